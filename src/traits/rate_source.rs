//! Price oracle collaborator.
//!
//! The pool never computes prices itself: for every aggregate group that has
//! a rated member it asks a [`RateSource`] for the current
//! [`OracleRate`]. Validation of the reading (zero rate, expiry) happens in
//! [`OracleRateAdapter`](crate::oracle::OracleRateAdapter), not in the
//! source.

use crate::domain::{GroupId, Timestamp, Wad};
use crate::error::PoolError;

/// One oracle reading: the value of the group's rated member in units of
/// the other members, and the last instant it may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OracleRate {
    /// Exchange rate scaled by `10^18`.
    pub rate: Wad,
    /// Inclusive expiry.
    pub valid_until: Timestamp,
}

impl OracleRate {
    /// Creates a new reading.
    #[must_use]
    pub const fn new(rate: Wad, valid_until: Timestamp) -> Self {
        Self { rate, valid_until }
    }

    /// Returns `true` if the reading may be used at `now`.
    #[must_use]
    pub const fn is_usable_at(&self, now: Timestamp) -> bool {
        !self.rate.is_zero() && !now.is_after(self.valid_until)
    }
}

/// Supplies oracle rates per aggregate group.
///
/// # Errors
///
/// Implementations return [`PoolError::StaleOrInvalidRate`] when they have
/// no reading for the group.
pub trait RateSource {
    /// Returns the latest reading for `group`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::StaleOrInvalidRate`] if no reading exists.
    fn get_rate(&self, group: GroupId) -> Result<OracleRate, PoolError>;
}

impl<R: RateSource + ?Sized> RateSource for &R {
    fn get_rate(&self, group: GroupId) -> Result<OracleRate, PoolError> {
        (**self).get_rate(group)
    }
}
