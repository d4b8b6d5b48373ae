//! Checked arithmetic trait for fixed-point domain types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, PoolError>`](crate::error::PoolError) instead
//! of panicking on overflow, underflow, or division by zero.
//!
//! # Implementations
//!
//! - [`Amount`]: token quantities (raw 18-decimal `u128`)
//! - [`Wad`]: ratios and rates scaled by `10^18`
//!
//! Both types scale by a [`Wad`] factor, so `safe_mul` / `safe_div` take
//! a [`Wad`] operand regardless of `Self`.
//!
//! # Examples
//!
//! ```
//! use coverage_pool::domain::{Amount, Rounding, Wad};
//! use coverage_pool::math::CheckedArithmetic;
//!
//! let a = Amount::from_whole(100);
//! let b = Amount::from_whole(70);
//! assert_eq!(a.safe_sub(&b), Ok(Amount::from_whole(30)));
//! assert!(b.safe_sub(&a).is_err());
//!
//! let half = Wad::new(500_000_000_000_000_000);
//! assert_eq!(a.safe_mul(&half, Rounding::Down), Ok(Amount::from_whole(50)));
//! ```

use crate::domain::{Amount, Rounding, Wad};
use crate::error::PoolError;

/// Fallible arithmetic for fixed-point domain types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: overflow and underflow propagate as errors.
/// - Every division states its [`Rounding`] direction.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the result exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError>;

    /// Fixed-point product `self × factor / 10^18`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the result exceeds `u128`.
    fn safe_mul(&self, factor: &Wad, rounding: Rounding) -> Result<Self, PoolError>;

    /// Fixed-point quotient `self × 10^18 / divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DivisionByZero`] if `divisor` is zero, or
    /// [`PoolError::Overflow`] if the quotient exceeds `u128`.
    fn safe_div(&self, divisor: &Wad, rounding: Rounding) -> Result<Self, PoolError>;

    /// Proportional scaling `self × numerator / denominator` with a 256-bit
    /// intermediate.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DivisionByZero`] if `denominator` is zero, or
    /// [`PoolError::Overflow`] if the quotient exceeds `u128`.
    fn safe_mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
    ) -> Result<Self, PoolError>;
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_add(other)
            .ok_or(PoolError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_sub(other)
            .ok_or(PoolError::Underflow("amount subtraction underflow"))
    }

    fn safe_mul(&self, factor: &Wad, rounding: Rounding) -> Result<Self, PoolError> {
        self.checked_mul_wad(factor, rounding)
            .ok_or(PoolError::Overflow("amount scaling overflow"))
    }

    fn safe_div(&self, divisor: &Wad, rounding: Rounding) -> Result<Self, PoolError> {
        if divisor.is_zero() {
            return Err(PoolError::DivisionByZero);
        }
        self.checked_div_wad(divisor, rounding)
            .ok_or(PoolError::Overflow("amount division overflow"))
    }

    fn safe_mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
    ) -> Result<Self, PoolError> {
        crate::math::mul_div(self.get(), numerator.get(), denominator.get(), rounding)
            .map(Amount::new)
    }
}

// ---------------------------------------------------------------------------
// Wad
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Wad {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_add(other)
            .ok_or(PoolError::Overflow("ratio addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_sub(other)
            .ok_or(PoolError::Underflow("ratio subtraction underflow"))
    }

    fn safe_mul(&self, factor: &Wad, rounding: Rounding) -> Result<Self, PoolError> {
        self.checked_mul(factor, rounding)
            .ok_or(PoolError::Overflow("ratio multiplication overflow"))
    }

    fn safe_div(&self, divisor: &Wad, rounding: Rounding) -> Result<Self, PoolError> {
        if divisor.is_zero() {
            return Err(PoolError::DivisionByZero);
        }
        self.checked_div(divisor, rounding)
            .ok_or(PoolError::Overflow("ratio division overflow"))
    }

    fn safe_mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
    ) -> Result<Self, PoolError> {
        crate::math::mul_div(self.get(), numerator.get(), denominator.get(), rounding)
            .map(Wad::new)
    }
}
