//! Configuration for the slippage curve.

use crate::domain::Wad;
use crate::error::PoolError;

/// Default relief-bonus coefficient `λ` (0.5).
pub const DEFAULT_BONUS_COEFFICIENT: Wad = Wad::new(500_000_000_000_000_000);

/// Default swap haircut (0.04 %).
pub const DEFAULT_HAIRCUT_RATE: Wad = Wad::new(400_000_000_000_000);

/// Parameters of the coverage-ratio slippage curve.
///
/// # Parameters
///
/// - `bonus_coefficient` (`λ`): a ledger at coverage `r < 1` that gets
///   relieved pays a bonus ratio starting at `λ·(1 − r)`.
/// - `haircut_rate`: fraction of every swap output retained in the paying
///   ledger's cash.
///
/// # Validation
///
/// - `bonus_coefficient <= 1`, so a bonus never exceeds the nominal value.
/// - `haircut_rate < 1`, so a swap always pays something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConfig {
    bonus_coefficient: Wad,
    haircut_rate: Wad,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            bonus_coefficient: DEFAULT_BONUS_COEFFICIENT,
            haircut_rate: DEFAULT_HAIRCUT_RATE,
        }
    }
}

impl CurveConfig {
    /// Creates a new `CurveConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if a parameter is out of
    /// range.
    pub fn new(bonus_coefficient: Wad, haircut_rate: Wad) -> Result<Self, PoolError> {
        let config = Self {
            bonus_coefficient,
            haircut_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if a parameter is out of
    /// range.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.bonus_coefficient > Wad::ONE {
            return Err(PoolError::InvalidConfiguration(
                "bonus coefficient must not exceed 1",
            ));
        }
        if self.haircut_rate >= Wad::ONE {
            return Err(PoolError::InvalidConfiguration(
                "haircut rate must be below 1",
            ));
        }
        Ok(())
    }

    /// Returns the relief-bonus coefficient `λ`.
    pub const fn bonus_coefficient(&self) -> Wad {
        self.bonus_coefficient
    }

    /// Returns the swap haircut rate.
    pub const fn haircut_rate(&self) -> Wad {
        self.haircut_rate
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(CurveConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_parameters_accepted() {
        let Ok(cfg) = CurveConfig::new(Wad::ZERO, Wad::ZERO) else {
            panic!("expected Ok");
        };
        assert!(cfg.bonus_coefficient().is_zero());
        assert!(cfg.haircut_rate().is_zero());
    }

    #[test]
    fn bonus_coefficient_above_one_rejected() {
        let Err(PoolError::InvalidConfiguration(_)) =
            CurveConfig::new(Wad::new(Wad::ONE.get() + 1), Wad::ZERO)
        else {
            panic!("expected InvalidConfiguration");
        };
    }

    #[test]
    fn full_haircut_rejected() {
        assert!(CurveConfig::new(Wad::ZERO, Wad::ONE).is_err());
    }
}
