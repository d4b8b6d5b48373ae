//! Configuration for one asset ledger.

use crate::domain::{Address, Amount, Token};
use crate::error::PoolError;

/// Describes one asset ledger at pool setup.
///
/// A ledger starts at `cash = initial_cash` and
/// `liability = supply = initial_liability`. A fresh pool uses zero for
/// both; non-zero values restore a ledger from persisted state.
///
/// # Validation
///
/// - The receipt-share token must differ from the underlying token.
/// - Neither address may be the zero address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetConfig {
    token: Token,
    share_token: Address,
    initial_cash: Amount,
    initial_liability: Amount,
}

impl AssetConfig {
    /// Creates an empty ledger description.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] on invalid addresses.
    pub fn new(token: Token, share_token: Address) -> Result<Self, PoolError> {
        Self::with_balances(token, share_token, Amount::ZERO, Amount::ZERO)
    }

    /// Creates a ledger description restored with existing balances.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] on invalid addresses.
    pub fn with_balances(
        token: Token,
        share_token: Address,
        initial_cash: Amount,
        initial_liability: Amount,
    ) -> Result<Self, PoolError> {
        let config = Self {
            token,
            share_token,
            initial_cash,
            initial_liability,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] on invalid addresses.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.token.address().is_zero() || self.share_token.is_zero() {
            return Err(PoolError::InvalidConfiguration("zero address"));
        }
        if self.token.address() == self.share_token {
            return Err(PoolError::InvalidConfiguration(
                "share token must differ from underlying",
            ));
        }
        Ok(())
    }

    /// Returns the underlying token.
    #[must_use]
    pub const fn token(&self) -> Token {
        self.token
    }

    /// Returns the receipt-share token address.
    #[must_use]
    pub const fn share_token(&self) -> Address {
        self.share_token
    }

    /// Returns the starting cash.
    pub const fn initial_cash(&self) -> Amount {
        self.initial_cash
    }

    /// Returns the starting liability (and share supply).
    pub const fn initial_liability(&self) -> Amount {
        self.initial_liability
    }
}
