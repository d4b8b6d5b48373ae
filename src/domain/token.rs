//! Token identity type.

use super::{Address, Amount, Decimals, Rounding};
use crate::error::PoolError;

/// The canonical identity of a token: its [`Address`] and [`Decimals`].
///
/// Two tokens are considered equal only if both address and decimals match.
///
/// # Examples
///
/// ```
/// use coverage_pool::domain::{Address, Decimals, Token};
///
/// let wavax = Token::new(Address::repeat(1), Decimals::MAX);
/// assert_eq!(wavax.address(), Address::repeat(1));
/// assert_eq!(wavax.decimals().get(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    address: Address,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    #[must_use]
    pub const fn new(address: Address, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Re-expresses an amount of this token in `target`'s raw units, with
    /// no price adjustment.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the rescaled value exceeds `u128`.
    pub fn rescale_to(
        &self,
        amount: Amount,
        target: &Self,
        rounding: Rounding,
    ) -> Result<Amount, PoolError> {
        self.decimals
            .rescale(amount.get(), target.decimals, rounding)
            .map(Amount::new)
    }

    /// Re-expresses a raw amount of this token at 18 decimals, the
    /// precision `Amount`'s `Display` renders.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the rescaled value exceeds `u128`.
    pub fn to_standard_units(&self, amount: Amount) -> Result<Amount, PoolError> {
        self.decimals
            .rescale(amount.get(), Decimals::MAX, Rounding::Down)
            .map(Amount::new)
    }
}
