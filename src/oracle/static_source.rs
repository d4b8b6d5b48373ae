//! In-memory [`RateSource`] holding pushed readings.

use std::collections::BTreeMap;

use crate::domain::{GroupId, Timestamp, Wad};
use crate::error::PoolError;
use crate::traits::{OracleRate, RateSource};

/// A [`RateSource`] backed by a map of readings set by the host.
///
/// # Examples
///
/// ```
/// use coverage_pool::domain::{GroupId, Timestamp, Wad};
/// use coverage_pool::oracle::StaticRateSource;
/// use coverage_pool::traits::RateSource;
///
/// let source = StaticRateSource::new().with_rate(GroupId::new(1), Wad::ONE, Timestamp::MAX);
/// assert!(source.get_rate(GroupId::new(1)).is_ok());
/// assert!(source.get_rate(GroupId::new(2)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRateSource {
    readings: BTreeMap<GroupId, OracleRate>,
}

impl StaticRateSource {
    /// Creates a source with no readings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_rate`](Self::set_rate).
    #[must_use]
    pub fn with_rate(mut self, group: GroupId, rate: Wad, valid_until: Timestamp) -> Self {
        self.set_rate(group, rate, valid_until);
        self
    }

    /// Stores the reading for `group`, replacing any previous one.
    pub fn set_rate(&mut self, group: GroupId, rate: Wad, valid_until: Timestamp) {
        self.readings.insert(group, OracleRate::new(rate, valid_until));
    }

    /// Removes the reading for `group`.
    pub fn clear(&mut self, group: GroupId) -> Option<OracleRate> {
        self.readings.remove(&group)
    }
}

impl RateSource for StaticRateSource {
    fn get_rate(&self, group: GroupId) -> Result<OracleRate, PoolError> {
        self.readings
            .get(&group)
            .copied()
            .ok_or(PoolError::StaleOrInvalidRate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_and_clear() {
        let g = GroupId::new(7);
        let mut s = StaticRateSource::new().with_rate(g, Wad::ONE, Timestamp::new(1));
        s.set_rate(g, Wad::TWO, Timestamp::new(2));
        assert_eq!(s.get_rate(g), Ok(OracleRate::new(Wad::TWO, Timestamp::new(2))));
        assert!(s.clear(g).is_some());
        assert_eq!(s.get_rate(g), Err(PoolError::StaleOrInvalidRate));
    }
}
