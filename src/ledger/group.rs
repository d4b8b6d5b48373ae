//! Aggregate group membership.

use crate::config::GroupConfig;
use crate::domain::{Address, GroupId};

/// A named set of ledgers sharing one price oracle.
///
/// Cross-asset operations are allowed only between members of the same
/// group. The optional rated member is valued at the oracle rate; all
/// other members trade 1:1 with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateGroup {
    id: GroupId,
    members: Vec<Address>,
    rated: Option<Address>,
}

impl AggregateGroup {
    /// Builds the runtime group from its configuration.
    #[must_use]
    pub fn from_group_config(config: &GroupConfig) -> Self {
        Self {
            id: config.id(),
            members: config.members().to_vec(),
            rated: config.rated(),
        }
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

    /// Returns `true` if `asset` belongs to this group.
    #[must_use]
    pub fn contains(&self, asset: &Address) -> bool {
        self.members.contains(asset)
    }

    /// Returns `true` if `asset` is the rated member.
    #[must_use]
    pub fn is_rated(&self, asset: &Address) -> bool {
        self.rated.as_ref() == Some(asset)
    }
}
