//! Unified error types for the coverage pool.
//!
//! All fallible operations across the crate return [`PoolError`], so a
//! caller can match on one enum whether the failure came from a ledger
//! primitive, the slippage curve, the oracle or the custody layer.
//!
//! # Taxonomy
//!
//! | Class | Variants | Caller action |
//! |-------|----------|---------------|
//! | Policy violation | `DeadlineExpired`, `SlippageExceeded`, `ExceedsMaxWithdrawable`, `CrossAggregateNotAllowed` | Adjust the request |
//! | Invariant protection | `InsufficientCash`, `InsufficientLiability` | Request is impossible against current state |
//! | Dependency failure | `StaleOrInvalidRate`, `TransferFailed` | Surfaced verbatim, never retried |
//!
//! Every variant is reported synchronously and leaves all ledgers in their
//! pre-operation state.

/// Error returned by every fallible operation in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PoolError {
    /// The execution happened after the caller-supplied deadline.
    #[error("deadline expired")]
    DeadlineExpired,

    /// The settled output is below the caller's minimum.
    #[error("slippage exceeded: output below requested minimum")]
    SlippageExceeded,

    /// Removing cash would drive a ledger's cash negative.
    #[error("insufficient cash")]
    InsufficientCash,

    /// Burning shares would drive a ledger's liability negative.
    #[error("insufficient liability")]
    InsufficientLiability,

    /// The requested amount is above what the curve can quote.
    #[error("amount exceeds max withdrawable")]
    ExceedsMaxWithdrawable,

    /// The two assets do not belong to the same aggregate group.
    #[error("cross-aggregate operation not allowed")]
    CrossAggregateNotAllowed,

    /// The oracle rate is zero or past its validity window.
    #[error("stale or invalid oracle rate")]
    StaleOrInvalidRate,

    /// The custody collaborator rejected a settlement batch.
    #[error("transfer failed: {0}")]
    TransferFailed(&'static str),

    /// The asset is not registered in the pool.
    #[error("unknown asset")]
    UnknownAsset,

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A quantity argument is zero, dust, or otherwise unusable.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// Decimal precision outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Pool, asset, group or curve configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl PoolError {
    /// Returns `true` for caller-correctable policy violations.
    #[must_use]
    pub const fn is_policy_violation(&self) -> bool {
        matches!(
            self,
            Self::DeadlineExpired
                | Self::SlippageExceeded
                | Self::ExceedsMaxWithdrawable
                | Self::CrossAggregateNotAllowed
        )
    }

    /// Returns `true` for failures raised to protect ledger invariants.
    #[must_use]
    pub const fn is_invariant_protection(&self) -> bool {
        matches!(self, Self::InsufficientCash | Self::InsufficientLiability)
    }

    /// Returns `true` for failures of an external collaborator.
    #[must_use]
    pub const fn is_dependency_failure(&self) -> bool {
        matches!(self, Self::StaleOrInvalidRate | Self::TransferFailed(_))
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PoolError>;
