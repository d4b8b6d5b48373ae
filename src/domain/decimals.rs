//! Token decimal places.

use crate::error::PoolError;
use crate::math::div_round;

use super::Rounding;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places of a token's raw unit.
///
/// Valid range is `0..=18`. Construction is validated: values above 18
/// are rejected.
///
/// # Examples
///
/// ```
/// use coverage_pool::domain::{Decimals, Rounding};
///
/// let usdc = Decimals::new(6).expect("6 is valid");
/// let wavax = Decimals::new(18).expect("18 is valid");
///
/// // 1.5 USDC expressed in 18-decimal units and back
/// assert_eq!(usdc.rescale(1_500_000, wavax, Rounding::Down), Ok(1_500_000_000_000_000_000));
/// assert_eq!(wavax.rescale(1_500_000_000_000_000_001, usdc, Rounding::Down), Ok(1_500_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::MAX
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum standard decimal places (18); the pool's native precision.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, PoolError> {
        if value > MAX_DECIMALS {
            return Err(PoolError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Re-expresses `raw` units of this precision in `target` precision.
    ///
    /// Scaling up is exact; scaling down divides with `rounding`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if scaling up exceeds `u128`.
    pub fn rescale(&self, raw: u128, target: Self, rounding: Rounding) -> Result<u128, PoolError> {
        use core::cmp::Ordering;
        match self.0.cmp(&target.0) {
            Ordering::Equal => Ok(raw),
            Ordering::Less => raw
                .checked_mul(pow10(target.0 - self.0))
                .ok_or(PoolError::Overflow("decimal rescale overflow")),
            Ordering::Greater => {
                div_round(raw, pow10(self.0 - target.0), rounding).ok_or(PoolError::DivisionByZero)
            }
        }
    }
}

/// `10^exp` for `exp <= 18`.
const fn pow10(exp: u8) -> u128 {
    10u128.pow(exp as u32)
}
