//! Quote and execute paths of the pool.

use tracing::{debug, info, warn};

use super::plan::{self, Plan};
use super::ExecutionContext;
use crate::config::PoolConfig;
use crate::curve::SlippageCurve;
use crate::domain::{Address, Amount, DepositRecord, Quote, SettlementRecord, SwapRecord, Timestamp};
use crate::error::PoolError;
use crate::ledger::{AssetLedger, LedgerRegistry};
use crate::oracle::OracleRateAdapter;
use crate::traits::{FromConfig, RateSource, TokenCustody, Transfer};

/// The pool: ledgers, curve, oracle access and custody behind one owner.
///
/// Quotes take `&self` and never mutate. Executions take `&mut self` and
/// follow the same sequence:
///
/// 1. Reject if `ctx.now` is past `deadline`.
/// 2. Build the plan (the exact computation a quote performs) on copies of
///    the touched ledgers.
/// 3. Reject if the output is below `min_out`.
/// 4. Settle every transfer in one [`TokenCustody::settle`] batch.
/// 5. Commit the ledger copies.
///
/// Any failure before step 5 leaves every ledger unchanged.
///
/// # Examples
///
/// ```
/// use coverage_pool::config::{AssetConfig, CurveConfig, GroupConfig, PoolConfig};
/// use coverage_pool::custody::InMemoryCustody;
/// use coverage_pool::domain::{Address, Amount, Decimals, GroupId, Timestamp, Token};
/// use coverage_pool::engine::{ExecutionContext, PoolEngine};
/// use coverage_pool::oracle::StaticRateSource;
///
/// let wavax = Token::new(Address::repeat(1), Decimals::MAX);
/// let savax = Token::new(Address::repeat(2), Decimals::MAX);
/// let config = PoolConfig::new(
///     CurveConfig::default(),
///     vec![
///         AssetConfig::new(wavax, Address::repeat(11)).expect("valid"),
///         AssetConfig::new(savax, Address::repeat(12)).expect("valid"),
///     ],
///     vec![GroupConfig::new(GroupId::new(1), vec![wavax.address(), savax.address()], None)
///         .expect("valid")],
/// )
/// .expect("valid pool");
///
/// let alice = Address::repeat(0xa1);
/// let mut custody = InMemoryCustody::new(Address::repeat(0xee));
/// custody.credit(wavax.address(), alice, Amount::from_whole(10)).expect("credit");
///
/// let mut pool = PoolEngine::new(&config, StaticRateSource::new(), custody).expect("pool");
/// let ctx = ExecutionContext::new(alice, Timestamp::new(0));
/// let record = pool
///     .deposit(ctx, &wavax.address(), Amount::from_whole(10), alice, Timestamp::MAX)
///     .expect("deposit");
/// assert_eq!(record.shares_minted, Amount::from_whole(10));
///
/// let quote = pool
///     .quote_potential_withdraw(&wavax.address(), Amount::from_whole(4))
///     .expect("quote");
/// assert_eq!(quote.amount_out(), Amount::from_whole(4));
/// ```
#[derive(Debug)]
pub struct PoolEngine<R, C> {
    registry: LedgerRegistry,
    curve: SlippageCurve,
    oracle: OracleRateAdapter<R>,
    custody: C,
}

impl<R: RateSource, C: TokenCustody> PoolEngine<R, C> {
    /// Builds the pool from its configuration and collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if `config` is invalid.
    pub fn new(config: &PoolConfig, rates: R, custody: C) -> Result<Self, PoolError> {
        let registry = LedgerRegistry::from_config(config)?;
        let curve = SlippageCurve::from_config(config.curve())?;
        info!(
            assets = config.assets().len(),
            groups = config.groups().len(),
            "pool initialized"
        );
        Ok(Self {
            registry,
            curve,
            oracle: OracleRateAdapter::new(rates),
            custody,
        })
    }

    // -- Accessors ----------------------------------------------------------

    /// Returns the ledger registry.
    pub const fn registry(&self) -> &LedgerRegistry {
        &self.registry
    }

    /// Returns a copy of the ledger of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::UnknownAsset`] if no such ledger exists.
    pub fn ledger(&self, asset: &Address) -> Result<AssetLedger, PoolError> {
        self.registry.ledger(asset).copied()
    }

    /// Returns the pricing curve.
    pub const fn curve(&self) -> &SlippageCurve {
        &self.curve
    }

    /// Returns the custody collaborator.
    pub const fn custody(&self) -> &C {
        &self.custody
    }

    /// Returns the custody collaborator mutably.
    pub fn custody_mut(&mut self) -> &mut C {
        &mut self.custody
    }

    /// Returns the rate source mutably, e.g. to push a fresh reading.
    pub fn rate_source_mut(&mut self) -> &mut R {
        self.oracle.source_mut()
    }

    // -- Quotes -------------------------------------------------------------

    /// Prices burning `shares` of `asset` for cash of the same asset.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnknownAsset`] if `asset` has no ledger.
    /// - [`PoolError::ExceedsMaxWithdrawable`] if `shares` exceeds the
    ///   ledger's liability.
    /// - [`PoolError::InvalidQuantity`] for a zero or dust request.
    pub fn quote_potential_withdraw(&self, asset: &Address, shares: Amount) -> Result<Quote, PoolError> {
        let plan = plan::withdraw(&self.registry, &self.curve, asset, shares)?;
        debug!(asset = %asset, quote = %plan.quote, "quoted withdraw");
        Ok(plan.quote)
    }

    /// Largest amount of `from` shares a cross-asset withdrawal into `to`
    /// may burn at `now`.
    ///
    /// This is the smaller of `from`'s liability and `to`'s excess cash
    /// converted into `from` units.
    ///
    /// # Errors
    ///
    /// - [`PoolError::CrossAggregateNotAllowed`] if the assets do not share
    ///   a group.
    /// - [`PoolError::StaleOrInvalidRate`] if the oracle reading is unusable.
    pub fn quote_max_initial_asset_withdrawable(
        &self,
        from: &Address,
        to: &Address,
        now: Timestamp,
    ) -> Result<Amount, PoolError> {
        let max = plan::max_initial_asset_withdrawable(&self.registry, &self.oracle, from, to, now)?;
        debug!(from = %from, to = %to, max = %max, "quoted max cross-asset withdrawal");
        Ok(max)
    }

    /// Prices withdrawing a nominal `amount` of `to` by burning the
    /// equivalent shares of `from`.
    ///
    /// `amount_in` of the returned quote is the number of `from` shares
    /// burned; `amount_out` is paid in `to`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::CrossAggregateNotAllowed`] if the assets do not share
    ///   a group.
    /// - [`PoolError::ExceedsMaxWithdrawable`] if `amount` exceeds `to`'s
    ///   excess cash or the converted shares exceed `from`'s liability.
    /// - [`PoolError::StaleOrInvalidRate`] if the oracle reading is unusable.
    pub fn quote_potential_withdraw_from_other_asset(
        &self,
        from: &Address,
        to: &Address,
        amount: Amount,
        now: Timestamp,
    ) -> Result<Quote, PoolError> {
        let plan = plan::withdraw_from_other_asset(
            &self.registry,
            &self.curve,
            &self.oracle,
            from,
            to,
            amount,
            now,
        )?;
        debug!(from = %from, to = %to, quote = %plan.quote, "quoted cross-asset withdraw");
        Ok(plan.quote)
    }

    /// Prices depositing `amount` of `asset`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnknownAsset`] if `asset` has no ledger.
    /// - [`PoolError::InvalidQuantity`] if `amount` is zero.
    pub fn quote_potential_deposit(&self, asset: &Address, amount: Amount) -> Result<Quote, PoolError> {
        let plan = plan::deposit(&self.registry, asset, amount)?;
        debug!(asset = %asset, quote = %plan.quote, "quoted deposit");
        Ok(plan.quote)
    }

    /// Prices swapping `amount` of `from` into `to`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::CrossAggregateNotAllowed`] if the assets do not share
    ///   a group.
    /// - [`PoolError::StaleOrInvalidRate`] if the oracle reading is unusable.
    pub fn quote_potential_swap(
        &self,
        from: &Address,
        to: &Address,
        amount: Amount,
        now: Timestamp,
    ) -> Result<Quote, PoolError> {
        let plan = plan::swap(&self.registry, &self.curve, &self.oracle, from, to, amount, now)?;
        debug!(from = %from, to = %to, quote = %plan.quote, "quoted swap");
        Ok(plan.quote)
    }

    // -- Executions ---------------------------------------------------------

    /// Burns `shares` of `asset` held by the caller and pays the priced
    /// cash to `recipient`.
    ///
    /// # Errors
    ///
    /// Everything [`quote_potential_withdraw`](Self::quote_potential_withdraw)
    /// returns, plus [`PoolError::DeadlineExpired`],
    /// [`PoolError::SlippageExceeded`] and [`PoolError::TransferFailed`].
    pub fn withdraw(
        &mut self,
        ctx: ExecutionContext,
        asset: &Address,
        shares: Amount,
        min_out: Amount,
        recipient: Address,
        deadline: Timestamp,
    ) -> Result<SettlementRecord, PoolError> {
        let result = check_deadline(&ctx, deadline)
            .and_then(|()| plan::withdraw(&self.registry, &self.curve, asset, shares))
            .and_then(|plan| self.settle_withdrawal(ctx, plan, min_out, recipient));
        let record = result.map_err(|e| rejected("withdraw", &ctx, e))?;
        info!(record = %record, "withdraw settled");
        Ok(record)
    }

    /// Burns the caller's `from` shares worth a nominal `amount` of `to`
    /// and pays the priced `to` cash to `recipient`.
    ///
    /// `from`'s cash and `to`'s liability are untouched.
    ///
    /// # Errors
    ///
    /// Everything
    /// [`quote_potential_withdraw_from_other_asset`](Self::quote_potential_withdraw_from_other_asset)
    /// returns, plus [`PoolError::DeadlineExpired`],
    /// [`PoolError::SlippageExceeded`] and [`PoolError::TransferFailed`].
    #[allow(clippy::too_many_arguments)]
    pub fn withdraw_from_other_asset(
        &mut self,
        ctx: ExecutionContext,
        from: &Address,
        to: &Address,
        amount: Amount,
        min_out: Amount,
        recipient: Address,
        deadline: Timestamp,
    ) -> Result<SettlementRecord, PoolError> {
        let result = check_deadline(&ctx, deadline)
            .and_then(|()| {
                plan::withdraw_from_other_asset(
                    &self.registry,
                    &self.curve,
                    &self.oracle,
                    from,
                    to,
                    amount,
                    ctx.now,
                )
            })
            .and_then(|plan| self.settle_withdrawal(ctx, plan, min_out, recipient));
        let record = result.map_err(|e| rejected("withdraw_from_other_asset", &ctx, e))?;
        info!(record = %record, "cross-asset withdraw settled");
        Ok(record)
    }

    /// Takes `amount` of `asset` from the caller and mints the same number
    /// of receipt shares to `recipient`.
    ///
    /// # Errors
    ///
    /// Everything [`quote_potential_deposit`](Self::quote_potential_deposit)
    /// returns, plus [`PoolError::DeadlineExpired`] and
    /// [`PoolError::TransferFailed`].
    pub fn deposit(
        &mut self,
        ctx: ExecutionContext,
        asset: &Address,
        amount: Amount,
        recipient: Address,
        deadline: Timestamp,
    ) -> Result<DepositRecord, PoolError> {
        let result = check_deadline(&ctx, deadline)
            .and_then(|()| plan::deposit(&self.registry, asset, amount))
            .and_then(|plan| {
                let ledger = plan.source;
                let transfers = [
                    Transfer::In {
                        token: ledger.asset(),
                        from: ctx.caller,
                        amount,
                    },
                    Transfer::Mint {
                        token: ledger.share_token(),
                        to: recipient,
                        amount: plan.quote.amount_out(),
                    },
                ];
                self.commit(&plan, &transfers)?;
                Ok(DepositRecord {
                    caller: ctx.caller,
                    asset: ledger.asset(),
                    amount_in: amount,
                    shares_minted: plan.quote.amount_out(),
                    recipient,
                })
            });
        let record = result.map_err(|e| rejected("deposit", &ctx, e))?;
        info!(
            caller = %record.caller,
            asset = %record.asset,
            amount = %record.amount_in,
            recipient = %record.recipient,
            "deposit settled"
        );
        Ok(record)
    }

    /// Takes `amount` of `from` from the caller and pays the priced `to`
    /// cash to `recipient`.
    ///
    /// # Errors
    ///
    /// Everything [`quote_potential_swap`](Self::quote_potential_swap)
    /// returns, plus [`PoolError::DeadlineExpired`],
    /// [`PoolError::SlippageExceeded`] and [`PoolError::TransferFailed`].
    #[allow(clippy::too_many_arguments)]
    pub fn swap(
        &mut self,
        ctx: ExecutionContext,
        from: &Address,
        to: &Address,
        amount: Amount,
        min_out: Amount,
        recipient: Address,
        deadline: Timestamp,
    ) -> Result<SwapRecord, PoolError> {
        let result = check_deadline(&ctx, deadline)
            .and_then(|()| {
                plan::swap(&self.registry, &self.curve, &self.oracle, from, to, amount, ctx.now)
            })
            .and_then(|plan| {
                check_min_out(&plan, min_out)?;
                let transfers = [
                    Transfer::In {
                        token: plan.source.asset(),
                        from: ctx.caller,
                        amount,
                    },
                    Transfer::Out {
                        token: plan.payer().asset(),
                        to: recipient,
                        amount: plan.quote.amount_out(),
                    },
                ];
                self.commit(&plan, &transfers)?;
                Ok(SwapRecord {
                    caller: ctx.caller,
                    from: plan.source.asset(),
                    to: plan.payer().asset(),
                    amount_in: amount,
                    amount_out: plan.quote.amount_out(),
                    haircut: plan.haircut,
                    recipient,
                })
            });
        let record = result.map_err(|e| rejected("swap", &ctx, e))?;
        info!(
            caller = %record.caller,
            from = %record.from,
            to = %record.to,
            amount_in = %record.amount_in,
            amount_out = %record.amount_out,
            haircut = %record.haircut,
            "swap settled"
        );
        Ok(record)
    }

    // -- Internals ----------------------------------------------------------

    fn settle_withdrawal(
        &mut self,
        ctx: ExecutionContext,
        plan: Plan,
        min_out: Amount,
        recipient: Address,
    ) -> Result<SettlementRecord, PoolError> {
        check_min_out(&plan, min_out)?;
        let transfers = plan.withdrawal_transfers(ctx.caller, recipient);
        self.commit(&plan, &transfers)?;
        Ok(SettlementRecord {
            caller: ctx.caller,
            asset: plan.source.asset(),
            payout_asset: plan.payer().asset(),
            shares_burned: plan.quote.amount_in(),
            amount_out: plan.quote.amount_out(),
            recipient,
        })
    }

    /// Settles `transfers` then writes the plan's ledgers back.
    fn commit(&mut self, plan: &Plan, transfers: &[Transfer]) -> Result<(), PoolError> {
        self.custody.settle(transfers)?;
        self.registry.commit(&plan.ledgers())
    }
}

fn check_deadline(ctx: &ExecutionContext, deadline: Timestamp) -> Result<(), PoolError> {
    if ctx.now.is_after(deadline) {
        return Err(PoolError::DeadlineExpired);
    }
    Ok(())
}

fn check_min_out(plan: &Plan, min_out: Amount) -> Result<(), PoolError> {
    if plan.quote.amount_out() < min_out {
        return Err(PoolError::SlippageExceeded);
    }
    Ok(())
}

fn rejected(op: &'static str, ctx: &ExecutionContext, err: PoolError) -> PoolError {
    warn!(op, caller = %ctx.caller, now = %ctx.now, error = %err, "execution rejected");
    err
}
