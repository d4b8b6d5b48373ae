//! Aggregate group identifier.

use core::fmt;

/// Identifies an aggregate account: a set of asset ledgers sharing one
/// price oracle.
///
/// # Examples
///
/// ```
/// use coverage_pool::domain::GroupId;
///
/// let avax = GroupId::new(1);
/// assert_eq!(avax.get(), 1);
/// assert_eq!(avax.to_string(), "group#1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(u32);

impl GroupId {
    /// Wraps a raw group number.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw group number.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group#{}", self.0)
    }
}
