//! 256-bit intermediates for fixed-point multiplication.
//!
//! Ledger amounts are `u128` values at 18-decimal precision, so the product
//! of two of them (or of an amount and a WAD ratio) routinely exceeds
//! `u128::MAX`.  [`mul_div`] widens to [`U256`], divides with an explicit
//! [`Rounding`], and narrows back with an overflow check.

use crate::domain::Rounding;
use crate::error::{PoolError, Result};

#[allow(clippy::all, clippy::pedantic, missing_docs)]
mod u256 {
    uint::construct_uint! {
        /// Unsigned 256-bit integer for intermediate products.
        pub struct U256(4);
    }
}

pub use u256::U256;

/// Computes `a × b / denominator` with a 256-bit intermediate product.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if `denominator` is zero.
/// - [`PoolError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use coverage_pool::domain::Rounding;
/// use coverage_pool::math::mul_div;
///
/// let wad = 1_000_000_000_000_000_000u128;
/// // 1e21 * 1e21 overflows u128 but the quotient fits.
/// assert_eq!(mul_div(1_000 * wad, 1_000 * wad, wad, Rounding::Down), Ok(1_000_000 * wad));
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
/// assert_eq!(mul_div(5, 1, 2, Rounding::Nearest), Ok(3));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    if denominator == 0 {
        return Err(PoolError::DivisionByZero);
    }
    let d = U256::from(denominator);
    let product = U256::from(a) * U256::from(b);
    let quotient = product / d;
    let remainder = product % d;

    // remainder < denominator, so d - remainder cannot underflow
    let quotient = if rounding.bumps(!remainder.is_zero(), remainder >= d - remainder) {
        quotient + U256::one()
    } else {
        quotient
    };
    narrow(quotient)
}

/// Narrows a [`U256`] into `u128`.
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] if `value > u128::MAX`.
pub fn narrow(value: U256) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(PoolError::Overflow("256-bit quotient exceeds u128"));
    }
    Ok(value.as_u128())
}
