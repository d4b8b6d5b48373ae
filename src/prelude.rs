//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use coverage_pool::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, Decimals, DepositRecord, GroupId, Quote, Rounding, SettlementRecord,
    SwapRecord, Timestamp, Token, Wad,
};

pub use crate::traits::{FromConfig, OracleRate, RateSource, TokenCustody, Transfer};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{AssetConfig, CurveConfig, GroupConfig, PoolConfig};

pub use crate::custody::InMemoryCustody;
pub use crate::engine::{ExecutionContext, PoolEngine};
pub use crate::oracle::StaticRateSource;

pub use crate::error::{PoolError, Result};
