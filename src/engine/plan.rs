//! Priced, not-yet-committed execution plans.
//!
//! A plan holds updated copies of every ledger an operation touches. Quotes
//! build a plan and discard it; executions build the same plan, settle its
//! transfers, then commit its ledgers. Sharing the builder is what makes a
//! quote agree bit-for-bit with the execution that follows it.

use crate::curve::SlippageCurve;
use crate::domain::{Address, Amount, Quote, Rounding, Timestamp};
use crate::error::PoolError;
use crate::ledger::{AssetLedger, LedgerRegistry};
use crate::math::CheckedArithmetic;
use crate::oracle::OracleRateAdapter;
use crate::traits::{RateSource, Transfer};

/// Updated ledgers plus the quote that priced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Plan {
    pub(crate) quote: Quote,
    /// Haircut kept in the payer's cash; zero outside swaps.
    pub(crate) haircut: Amount,
    pub(crate) source: AssetLedger,
    pub(crate) target: Option<AssetLedger>,
}

impl Plan {
    /// Ledgers to commit after settlement.
    pub(crate) fn ledgers(&self) -> Vec<AssetLedger> {
        let mut out = vec![self.source];
        out.extend(self.target);
        out
    }

    /// The ledger that pays cash out: the target if any, else the source.
    pub(crate) fn payer(&self) -> &AssetLedger {
        self.target.as_ref().unwrap_or(&self.source)
    }

    /// Settlement legs for a withdrawal: burn the caller's shares on the
    /// source, pay the recipient from the payer.
    pub(crate) fn withdrawal_transfers(&self, caller: Address, recipient: Address) -> [Transfer; 2] {
        [
            Transfer::Burn {
                token: self.source.share_token(),
                from: caller,
                amount: self.quote.amount_in(),
            },
            Transfer::Out {
                token: self.payer().asset(),
                to: recipient,
                amount: self.quote.amount_out(),
            },
        ]
    }
}

/// Same-asset withdrawal of `shares`.
pub(crate) fn withdraw(
    registry: &LedgerRegistry,
    curve: &SlippageCurve,
    asset: &Address,
    shares: Amount,
) -> Result<Plan, PoolError> {
    let mut ledger = *registry.ledger(asset)?;
    let pricing = curve.withdrawal(&ledger.state(), shares)?;
    ledger.burn_shares(shares)?;
    ledger.remove_cash(pricing.amount_out)?;
    Ok(Plan {
        quote: Quote::new(shares, pricing.amount_out, pricing.penalty, Amount::ZERO),
        haircut: Amount::ZERO,
        source: ledger,
        target: None,
    })
}

/// Cross-asset withdrawal of a nominal `amount` of `to`, paid for with
/// shares of `from`.
pub(crate) fn withdraw_from_other_asset<R: RateSource>(
    registry: &LedgerRegistry,
    curve: &SlippageCurve,
    oracle: &OracleRateAdapter<R>,
    from: &Address,
    to: &Address,
    amount: Amount,
    now: Timestamp,
) -> Result<Plan, PoolError> {
    if amount.is_zero() {
        return Err(PoolError::InvalidQuantity("zero withdrawal"));
    }
    let group = registry.shared_group(from, to)?;
    let mut source = *registry.ledger(from)?;
    let mut target = *registry.ledger(to)?;

    // shares owed by the caller round up
    let shares = oracle.convert(group, amount, &target.token(), &source.token(), now, Rounding::Up)?;
    if shares.is_zero() {
        return Err(PoolError::InvalidQuantity("withdrawal too small to burn shares"));
    }
    if shares > source.liability() {
        return Err(PoolError::ExceedsMaxWithdrawable);
    }
    let relief = curve.relief_bonus(&source.state(), shares)?;
    let bonus = if relief.is_zero() {
        Amount::ZERO
    } else {
        oracle.convert(group, relief, &source.token(), &target.token(), now, Rounding::Down)?
    };
    let amount_out = curve.cross_asset_payout(&target.state(), amount, bonus)?;

    source.burn_shares(shares)?;
    target.remove_cash(amount_out)?;
    let granted = amount_out.saturating_sub(&amount);
    Ok(Plan {
        quote: Quote::new(shares, amount_out, Amount::ZERO, granted),
        haircut: Amount::ZERO,
        source,
        target: Some(target),
    })
}

/// Maximum shares of `from` a cross-asset withdrawal into `to` may burn.
pub(crate) fn max_initial_asset_withdrawable<R: RateSource>(
    registry: &LedgerRegistry,
    oracle: &OracleRateAdapter<R>,
    from: &Address,
    to: &Address,
    now: Timestamp,
) -> Result<Amount, PoolError> {
    let group = registry.shared_group(from, to)?;
    let source = registry.ledger(from)?;
    let target = registry.ledger(to)?;
    let excess = target.state().excess();
    let converted = oracle.convert(group, excess, &target.token(), &source.token(), now, Rounding::Up)?;
    Ok(converted.min(source.liability()))
}

/// Deposit of `amount` underlying, minting shares 1:1.
pub(crate) fn deposit(registry: &LedgerRegistry, asset: &Address, amount: Amount) -> Result<Plan, PoolError> {
    if amount.is_zero() {
        return Err(PoolError::InvalidQuantity("zero deposit"));
    }
    let mut ledger = *registry.ledger(asset)?;
    ledger.add_cash(amount)?;
    ledger.mint_shares(amount)?;
    Ok(Plan {
        quote: Quote::new(amount, amount, Amount::ZERO, Amount::ZERO),
        haircut: Amount::ZERO,
        source: ledger,
        target: None,
    })
}

/// Swap of `amount` of `from` into `to`.
pub(crate) fn swap<R: RateSource>(
    registry: &LedgerRegistry,
    curve: &SlippageCurve,
    oracle: &OracleRateAdapter<R>,
    from: &Address,
    to: &Address,
    amount: Amount,
    now: Timestamp,
) -> Result<Plan, PoolError> {
    if amount.is_zero() {
        return Err(PoolError::InvalidQuantity("zero swap"));
    }
    let group = registry.shared_group(from, to)?;
    let mut source = *registry.ledger(from)?;
    let mut target = *registry.ledger(to)?;

    let nominal = oracle.convert(group, amount, &source.token(), &target.token(), now, Rounding::Down)?;
    let relief = curve.relief_bonus(&source.state(), amount)?;
    let bonus = if relief.is_zero() {
        Amount::ZERO
    } else {
        oracle.convert(group, relief, &source.token(), &target.token(), now, Rounding::Down)?
    };
    let pricing = curve.swap(&target.state(), nominal, bonus)?;

    source.add_cash(amount)?;
    target.remove_cash(pricing.amount_out)?;
    // slippage plus haircut, relative to the oracle value
    let fee = nominal.safe_add(&bonus)?.safe_sub(&pricing.amount_out)?;
    Ok(Plan {
        quote: Quote::new(amount, pricing.amount_out, fee, bonus),
        haircut: pricing.haircut,
        source,
        target: Some(target),
    })
}
