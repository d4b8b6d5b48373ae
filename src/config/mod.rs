//! Pool configuration structs.
//!
//! [`PoolConfig`] is the top-level declarative blueprint of a pool. It is
//! made of one [`CurveConfig`], one [`AssetConfig`] per ledger and one
//! [`GroupConfig`] per aggregate group. Every struct validates its
//! invariants at construction.

mod asset;
mod curve;
mod group;
mod pool;

pub use asset::AssetConfig;
pub use curve::{CurveConfig, DEFAULT_BONUS_COEFFICIENT, DEFAULT_HAIRCUT_RATE};
pub use group::GroupConfig;
pub use pool::PoolConfig;
