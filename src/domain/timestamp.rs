//! Unix timestamps used for deadlines and oracle expiry.

use core::fmt;

/// Seconds since the Unix epoch.
///
/// Deadlines and oracle validity are inclusive: a value is still valid
/// when `now == limit` and expired once `now > limit`.
///
/// # Examples
///
/// ```
/// use coverage_pool::domain::Timestamp;
///
/// let deadline = Timestamp::new(1_000);
/// assert!(!Timestamp::new(1_000).is_after(deadline));
/// assert!(Timestamp::new(1_001).is_after(deadline));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The far future; useful as a deadline or expiry that never passes.
    pub const MAX: Self = Self(u64::MAX);

    /// Wraps a raw number of seconds.
    #[must_use]
    pub const fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the raw number of seconds.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if `self` is strictly later than `limit`.
    #[must_use]
    pub const fn is_after(&self, limit: Self) -> bool {
        self.0 > limit.0
    }

    /// Returns `self + secs`, saturating at [`Timestamp::MAX`].
    #[must_use]
    pub const fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
