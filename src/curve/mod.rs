//! Pricing: the coverage-ratio slippage curve.
//!
//! See [`SlippageCurve`] for the closed forms. The module is pure and is
//! unit-tested without an engine.

mod slippage;

pub use slippage::{SlippageCurve, SwapPricing, WithdrawalPricing};
