//! Owned store of every ledger and group of a pool.

use std::collections::BTreeMap;

use super::{AggregateGroup, AssetLedger};
use crate::config::PoolConfig;
use crate::domain::{Address, GroupId};
use crate::error::PoolError;
use crate::traits::FromConfig;

/// Owns all asset ledgers and aggregate groups of one pool.
///
/// Ledgers are keyed by their underlying token address. Reads hand out
/// copies or shared references; the only write path is
/// [`commit`](Self::commit), which replaces whole records after an
/// execution has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRegistry {
    ledgers: BTreeMap<Address, AssetLedger>,
    groups: BTreeMap<GroupId, AggregateGroup>,
    membership: BTreeMap<Address, GroupId>,
}

impl LedgerRegistry {
    /// Returns the ledger of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::UnknownAsset`] if no such ledger exists.
    pub fn ledger(&self, asset: &Address) -> Result<&AssetLedger, PoolError> {
        self.ledgers.get(asset).ok_or(PoolError::UnknownAsset)
    }

    /// Returns the group `asset` belongs to, if any.
    #[must_use]
    pub fn group_of(&self, asset: &Address) -> Option<GroupId> {
        self.membership.get(asset).copied()
    }

    /// Returns the group with identifier `id`.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&AggregateGroup> {
        self.groups.get(&id)
    }

    /// Resolves the group shared by two distinct assets.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidQuantity`] if `from == to`.
    /// - [`PoolError::UnknownAsset`] if either asset has no ledger.
    /// - [`PoolError::CrossAggregateNotAllowed`] if the assets are not
    ///   members of one common group.
    pub fn shared_group(&self, from: &Address, to: &Address) -> Result<&AggregateGroup, PoolError> {
        if from == to {
            return Err(PoolError::InvalidQuantity("from and to assets must differ"));
        }
        self.ledger(from)?;
        self.ledger(to)?;
        match (self.group_of(from), self.group_of(to)) {
            (Some(a), Some(b)) if a == b => self
                .groups
                .get(&a)
                .ok_or(PoolError::CrossAggregateNotAllowed),
            _ => Err(PoolError::CrossAggregateNotAllowed),
        }
    }

    /// Iterates over every ledger in asset-address order.
    pub fn ledgers(&self) -> impl Iterator<Item = &AssetLedger> {
        self.ledgers.values()
    }

    /// Writes back updated ledger records.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::UnknownAsset`] if a record does not match a
    /// registered ledger; nothing is written in that case.
    pub fn commit(&mut self, updated: &[AssetLedger]) -> Result<(), PoolError> {
        if updated.iter().any(|l| !self.ledgers.contains_key(&l.asset())) {
            return Err(PoolError::UnknownAsset);
        }
        for ledger in updated {
            self.ledgers.insert(ledger.asset(), *ledger);
        }
        Ok(())
    }
}

impl FromConfig<PoolConfig> for LedgerRegistry {
    fn from_config(config: &PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        let ledgers = config
            .assets()
            .iter()
            .map(|a| {
                let ledger = AssetLedger::restored(
                    a.token(),
                    a.share_token(),
                    a.initial_cash(),
                    a.initial_liability(),
                );
                (ledger.asset(), ledger)
            })
            .collect();
        let mut groups = BTreeMap::new();
        let mut membership = BTreeMap::new();
        for g in config.groups() {
            let group = AggregateGroup::from_group_config(g);
            for member in group.members() {
                membership.insert(*member, group.id());
            }
            groups.insert(group.id(), group);
        }
        Ok(Self {
            ledgers,
            groups,
            membership,
        })
    }
}
