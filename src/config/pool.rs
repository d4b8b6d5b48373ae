//! Top-level pool configuration.

use super::{AssetConfig, CurveConfig, GroupConfig};
use crate::error::PoolError;

/// Declarative blueprint of a pool: its curve, its asset ledgers and the
/// aggregate groups they belong to.
///
/// # Validation
///
/// - Every asset config is individually valid and assets are distinct.
/// - Every group config is individually valid and group ids are distinct.
/// - Every group member is a configured asset, and no asset belongs to
///   more than one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    curve: CurveConfig,
    assets: Vec<AssetConfig>,
    groups: Vec<GroupConfig>,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] on any violation.
    pub fn new(
        curve: CurveConfig,
        assets: Vec<AssetConfig>,
        groups: Vec<GroupConfig>,
    ) -> Result<Self, PoolError> {
        let config = Self {
            curve,
            assets,
            groups,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] on any violation.
    pub fn validate(&self) -> Result<(), PoolError> {
        self.curve.validate()?;
        if self.assets.is_empty() {
            return Err(PoolError::InvalidConfiguration("pool has no assets"));
        }
        for (i, asset) in self.assets.iter().enumerate() {
            asset.validate()?;
            let address = asset.token().address();
            if self.assets[i + 1..]
                .iter()
                .any(|other| other.token().address() == address)
            {
                return Err(PoolError::InvalidConfiguration("duplicate asset"));
            }
        }
        for (i, group) in self.groups.iter().enumerate() {
            group.validate()?;
            let later = &self.groups[i + 1..];
            if later.iter().any(|other| other.id() == group.id()) {
                return Err(PoolError::InvalidConfiguration("duplicate group id"));
            }
            for member in group.members() {
                if !self.assets.iter().any(|a| a.token().address() == *member) {
                    return Err(PoolError::InvalidConfiguration(
                        "group member is not a pool asset",
                    ));
                }
                if later.iter().any(|other| other.members().contains(member)) {
                    return Err(PoolError::InvalidConfiguration(
                        "asset belongs to more than one group",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Returns the curve parameters.
    #[must_use]
    pub const fn curve(&self) -> &CurveConfig {
        &self.curve
    }

    /// Returns the asset ledger descriptions.
    #[must_use]
    pub fn assets(&self) -> &[AssetConfig] {
        &self.assets
    }

    /// Returns the aggregate group descriptions.
    #[must_use]
    pub fn groups(&self) -> &[GroupConfig] {
        &self.groups
    }
}
