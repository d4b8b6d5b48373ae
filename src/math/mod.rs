//! Arithmetic utilities for pool pricing.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations on
//! [`Amount`](crate::domain::Amount) and [`Wad`](crate::domain::Wad),
//! [`div_round`] for narrow divisions, and [`mul_div`] for products that
//! need a 256-bit intermediate.
//!
//! | Helper | Width | Use case |
//! |--------|-------|----------|
//! | [`div_round`] | `u128` | Quotients of values already in range |
//! | [`mul_div`] | [`U256`] intermediate | Amount × amount, amount × rate |

mod checked;
mod rounding;
mod wide;

pub use checked::CheckedArithmetic;
pub use rounding::div_round;
pub use wide::{mul_div, narrow, U256};
