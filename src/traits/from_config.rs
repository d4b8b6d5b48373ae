//! Generic construction trait for building runtime components from
//! configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating the pool's
//! runtime pieces from their configuration structs:
//!
//! ```text
//! CurveConfig => SlippageCurve::from_config(&cfg)
//! PoolConfig  => LedgerRegistry::from_config(&cfg)
//! ```
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction. A successfully constructed component is guaranteed to be
//! in a valid initial state: for ledgers, `liability == supply` and every
//! group member resolves to a registered asset.
//!
//! There is no blanket `impl<T> FromConfig<T>`; each pairing is explicit.

use crate::error::PoolError;

/// Generic construction trait for building a component from a configuration.
///
/// # Implementors
///
/// - `impl FromConfig<CurveConfig> for SlippageCurve`
/// - `impl FromConfig<PoolConfig> for LedgerRegistry`
///
/// # Errors
///
/// Returns [`PoolError::InvalidConfiguration`] (or a more specific variant)
/// if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// The configuration is taken by reference because it may be reused.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidConfiguration`] if any parameter is out of
    ///   range or inconsistent.
    fn from_config(config: &C) -> Result<Self, PoolError>
    where
        Self: Sized;
}
