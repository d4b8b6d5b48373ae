//! Records returned by successful executions.

use core::fmt;

use super::{Address, Amount};

/// Outcome of a withdrawal, same-asset or cross-asset.
///
/// `asset` is the ledger whose shares were burned; `payout_asset` is the
/// ledger that paid cash out. They coincide for a plain withdrawal. A
/// consumer emitting a `Withdraw` event keyed by the token paid out (yyAVAX
/// when AVAX shares are burned for yyAVAX) reads `payout_asset`, not
/// `asset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettlementRecord {
    /// Account that supplied the shares.
    pub caller: Address,
    /// Asset whose shares were burned.
    pub asset: Address,
    /// Asset paid out to the recipient.
    pub payout_asset: Address,
    /// Shares (and liability) burned on `asset`.
    pub shares_burned: Amount,
    /// Tokens of `payout_asset` delivered.
    pub amount_out: Amount,
    /// Account that received the payout.
    pub recipient: Address,
}

impl SettlementRecord {
    /// Returns `true` if the payout came from a different ledger than the
    /// burned shares.
    #[must_use]
    pub fn is_cross_asset(&self) -> bool {
        self.asset != self.payout_asset
    }
}

impl fmt::Display for SettlementRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdraw(caller={}, burned={} of {}, paid={} of {}, to={})",
            self.caller,
            self.shares_burned,
            self.asset,
            self.amount_out,
            self.payout_asset,
            self.recipient
        )
    }
}

/// Outcome of a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositRecord {
    /// Account that supplied the underlying tokens.
    pub caller: Address,
    /// Asset deposited.
    pub asset: Address,
    /// Underlying tokens received by the pool.
    pub amount_in: Amount,
    /// Receipt shares minted to the recipient.
    pub shares_minted: Amount,
    /// Account credited with the shares.
    pub recipient: Address,
}

/// Outcome of a swap between two assets of one aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapRecord {
    /// Account that paid in.
    pub caller: Address,
    /// Asset paid in.
    pub from: Address,
    /// Asset paid out.
    pub to: Address,
    /// Tokens of `from` received by the pool.
    pub amount_in: Amount,
    /// Tokens of `to` delivered.
    pub amount_out: Amount,
    /// Haircut retained in the `to` ledger's cash.
    pub haircut: Amount,
    /// Account that received the output.
    pub recipient: Address,
}
