//! Rounding helpers for integer division.
//!
//! [`div_round`] performs `u128` division with an explicit [`Rounding`]
//! direction.  It is the narrow-width building block behind
//! [`Amount`](crate::domain::Amount) and [`Wad`](crate::domain::Wad)
//! division; products that need 256 bits go through
//! [`mul_div`](super::mul_div) instead.
//!
//! # Convention
//!
//! **Always round against the caller** (pool-favorable):
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Amount paid out | [`Rounding::Down`] |
//! | Penalty / haircut withheld | [`Rounding::Up`] |
//! | Shares burned for a cross-asset payout | [`Rounding::Up`] |
//! | Oracle value credited to the caller | [`Rounding::Down`] |
//!
//! # Examples
//!
//! ```
//! use coverage_pool::domain::Rounding;
//! use coverage_pool::math::div_round;
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(10, 4, Rounding::Nearest), Some(3));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    let r = numerator % denominator;
    // r >= d - r  <=>  2r >= d, without overflowing on 2r
    if rounding.bumps(r != 0, r >= denominator - r) {
        // q < u128::MAX whenever r != 0, so the increment cannot overflow
        Some(q + 1)
    } else {
        Some(q)
    }
}
