//! Configuration for an aggregate group.

use crate::domain::{Address, GroupId};
use crate::error::PoolError;

/// Describes an aggregate group: member assets sharing one oracle.
///
/// At most one member is *rated*: its value in units of the other members
/// is the oracle rate. Without a rated member the group trades 1:1 and
/// never consults the oracle.
///
/// # Validation
///
/// - At least two members, all distinct.
/// - The rated asset, if any, must be a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    id: GroupId,
    members: Vec<Address>,
    rated: Option<Address>,
}

impl GroupConfig {
    /// Creates a new `GroupConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if the member list is too
    /// short, has duplicates, or does not contain `rated`.
    pub fn new(id: GroupId, members: Vec<Address>, rated: Option<Address>) -> Result<Self, PoolError> {
        let config = Self { id, members, rated };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] on any violation.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.members.len() < 2 {
            return Err(PoolError::InvalidConfiguration(
                "group needs at least two members",
            ));
        }
        for (i, a) in self.members.iter().enumerate() {
            if self.members[i + 1..].contains(a) {
                return Err(PoolError::InvalidConfiguration("duplicate group member"));
            }
        }
        if let Some(rated) = self.rated {
            if !self.members.contains(&rated) {
                return Err(PoolError::InvalidConfiguration(
                    "rated asset is not a group member",
                ));
            }
        }
        Ok(())
    }

    /// Returns the group identifier.
    #[must_use]
    pub const fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the member assets.
    #[must_use]
    pub fn members(&self) -> &[Address] {
        &self.members
    }

    /// Returns the rated member, if any.
    #[must_use]
    pub const fn rated(&self) -> Option<Address> {
        self.rated
    }
}
