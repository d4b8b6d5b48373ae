//! Coverage-ratio slippage curve.
//!
//! All functions are pure: they price against [`LedgerState`] snapshots and
//! never touch a ledger. Every quantity is an 18-decimal [`Amount`]; ratios
//! are [`Wad`] values where `W = 10^18` is one.
//!
//! # Plain withdrawal of `d` liability from `(c, l)`
//!
//! With coverage `r = c / l`:
//!
//! - `r >= 1`: `out = d`.
//! - `r < 1`: the marginal payout falls linearly from `m0 = min(1, 2r)` to
//!   `m1 = max(0, 2r − 1)` across the whole liability:
//!
//! ```text
//! out = m0·d − (m0 − m1)·d² / (2l)
//! ```
//!
//! Withdrawing the entire liability pays out exactly the entire cash.
//!
//! # Relief bonus on a ledger with `r < 1`
//!
//! A ledger that receives `s` of cash (or has `s` of liability burned
//! without paying cash) has its deficit `D = l − c` reduced. The bonus
//! ratio starts at `base = λ·(1 − r)` and falls linearly as the deficit is
//! closed; past the deficit the total bonus stays at its closing value:
//!
//! ```text
//! s <= D:  ratio = base − base·s / (2D)
//! s >  D:  ratio = base·D / (2s)
//! bonus = s · ratio
//! ```
//!
//! # Payout of `n` cash without burning liability
//!
//! Identity up to the excess `E = max(0, c − l)`; the remainder `q = n − E`
//! prices like a constant-product curve over the backing cash
//! `C = c − E`:
//!
//! ```text
//! out = min(n, E) + C·q / (C + q)
//! ```
//!
//! # Rounding
//!
//! Output components round down, penalty and haircut components round up,
//! so every rounding step favors the pool.

use crate::config::CurveConfig;
use crate::domain::{Amount, Rounding, Wad};
use crate::error::PoolError;
use crate::ledger::LedgerState;
use crate::math::{mul_div, CheckedArithmetic};
use crate::traits::FromConfig;

/// Result of pricing a plain withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawalPricing {
    /// Cash paid to the withdrawer.
    pub amount_out: Amount,
    /// Liability burned but not paid out.
    pub penalty: Amount,
}

/// Result of pricing a swap leg against the paying ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapPricing {
    /// Cash paid to the recipient.
    pub amount_out: Amount,
    /// Cash retained by the paying ledger.
    pub haircut: Amount,
}

/// The pool's pricing function, parameterized by a [`CurveConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlippageCurve {
    bonus_coefficient: Wad,
    haircut_rate: Wad,
}

impl FromConfig<CurveConfig> for SlippageCurve {
    fn from_config(config: &CurveConfig) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self {
            bonus_coefficient: config.bonus_coefficient(),
            haircut_rate: config.haircut_rate(),
        })
    }
}

impl SlippageCurve {
    /// Returns the relief-bonus coefficient `λ`.
    pub const fn bonus_coefficient(&self) -> Wad {
        self.bonus_coefficient
    }

    /// Returns the swap haircut rate.
    pub const fn haircut_rate(&self) -> Wad {
        self.haircut_rate
    }

    /// Largest liability a plain withdrawal may burn.
    pub const fn max_withdrawable(&self, state: &LedgerState) -> Amount {
        state.liability
    }

    /// Prices burning `d` of liability for cash from the same ledger.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidQuantity`] if `d` is zero or the payout rounds
    ///   to zero.
    /// - [`PoolError::ExceedsMaxWithdrawable`] if `d > liability`.
    pub fn withdrawal(&self, state: &LedgerState, d: Amount) -> Result<WithdrawalPricing, PoolError> {
        if d.is_zero() {
            return Err(PoolError::InvalidQuantity("zero withdrawal"));
        }
        if d > self.max_withdrawable(state) {
            return Err(PoolError::ExceedsMaxWithdrawable);
        }
        let r = state
            .coverage_ratio()
            .ok_or(PoolError::ExceedsMaxWithdrawable)?;
        if r >= Wad::ONE {
            return Ok(WithdrawalPricing {
                amount_out: d,
                penalty: Amount::ZERO,
            });
        }

        let two_r = r.safe_add(&r)?;
        let m0 = two_r.min(Wad::ONE);
        let m1 = two_r.saturating_sub(&Wad::ONE);
        let gross = d.safe_mul(&m0, Rounding::Down)?;
        // (m0 - m1)·d² / (2l), split as ((m0 - m1)·d)·d / (2l)
        let slope = d.safe_mul(&m0.safe_sub(&m1)?, Rounding::Up)?;
        let two_l = state.liability.safe_add(&state.liability)?;
        let decay = slope.safe_mul_div(&d, &two_l, Rounding::Up)?;

        let amount_out = gross.saturating_sub(&decay).min(state.cash);
        if amount_out.is_zero() {
            return Err(PoolError::InvalidQuantity("withdrawal too small to pay out"));
        }
        Ok(WithdrawalPricing {
            amount_out,
            penalty: d.safe_sub(&amount_out)?,
        })
    }

    /// Bonus earned by relieving a ledger by `s`.
    ///
    /// Zero when the ledger is fully covered or has no liability.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error only on overflow.
    pub fn relief_bonus(&self, state: &LedgerState, s: Amount) -> Result<Amount, PoolError> {
        let Some(r) = state.coverage_ratio() else {
            return Ok(Amount::ZERO);
        };
        if r >= Wad::ONE || s.is_zero() || self.bonus_coefficient.is_zero() {
            return Ok(Amount::ZERO);
        }
        let base = self
            .bonus_coefficient
            .safe_mul(&Wad::ONE.safe_sub(&r)?, Rounding::Down)?;
        let deficit = state.deficit();
        if deficit.is_zero() {
            return Ok(Amount::ZERO);
        }
        let ratio = if s <= deficit {
            let two_d = deficit.safe_add(&deficit)?;
            let decline = Wad::new(mul_div(base.get(), s.get(), two_d.get(), Rounding::Up)?);
            base.saturating_sub(&decline)
        } else {
            let two_s = s.safe_add(&s)?;
            Wad::new(mul_div(base.get(), deficit.get(), two_s.get(), Rounding::Down)?)
        };
        s.safe_mul(&ratio, Rounding::Down)
    }

    /// Cash paid for a nominal `n` drawn from a ledger without burning its
    /// liability.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error only on overflow.
    pub fn payout(&self, state: &LedgerState, n: Amount) -> Result<Amount, PoolError> {
        let excess = state.excess();
        let q = n.saturating_sub(&excess);
        if q.is_zero() {
            return Ok(n);
        }
        let backing = state.cash.safe_sub(&excess)?;
        let denominator = backing.safe_add(&q)?;
        let tail = backing.safe_mul_div(&q, &denominator, Rounding::Down)?;
        excess.safe_add(&tail)
    }

    /// Cash paid by the target ledger of a cross-asset withdrawal for a
    /// nominal `n` (target units) plus a relief `bonus`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidQuantity`] if `n` is zero.
    /// - [`PoolError::ExceedsMaxWithdrawable`] if `n` exceeds the target's
    ///   excess cash.
    pub fn cross_asset_payout(
        &self,
        target: &LedgerState,
        n: Amount,
        bonus: Amount,
    ) -> Result<Amount, PoolError> {
        if n.is_zero() {
            return Err(PoolError::InvalidQuantity("zero withdrawal"));
        }
        let excess = target.excess();
        if n > excess {
            return Err(PoolError::ExceedsMaxWithdrawable);
        }
        Ok(n.safe_add(&bonus)?.min(excess))
    }

    /// Prices the paying leg of a swap: `payout(n + bonus)` less haircut.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidQuantity`] if `n` is zero or the output
    /// rounds to zero.
    pub fn swap(&self, target: &LedgerState, n: Amount, bonus: Amount) -> Result<SwapPricing, PoolError> {
        if n.is_zero() {
            return Err(PoolError::InvalidQuantity("zero swap"));
        }
        let gross = self.payout(target, n.safe_add(&bonus)?)?;
        let haircut = gross.safe_mul(&self.haircut_rate, Rounding::Up)?;
        let amount_out = gross.safe_sub(&haircut)?;
        if amount_out.is_zero() {
            return Err(PoolError::InvalidQuantity("swap too small to pay out"));
        }
        Ok(SwapPricing {
            amount_out,
            haircut,
        })
    }
}
