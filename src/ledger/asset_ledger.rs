//! Per-asset cash / liability / share-supply record.

use crate::domain::{Address, Amount, Rounding, Token, Wad};
use crate::error::PoolError;
use crate::math::CheckedArithmetic;

/// Snapshot of the two balances the slippage curve prices against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LedgerState {
    /// Tokens actually held for this asset.
    pub cash: Amount,
    /// Tokens owed to depositors.
    pub liability: Amount,
}

impl LedgerState {
    /// Creates a snapshot.
    pub const fn new(cash: Amount, liability: Amount) -> Self {
        Self { cash, liability }
    }

    /// Coverage ratio `cash / liability`, truncated.
    ///
    /// Returns `None` when liability is zero (coverage is saturated).
    #[must_use]
    pub fn coverage_ratio(&self) -> Option<Wad> {
        if self.liability.is_zero() {
            return None;
        }
        Wad::from_ratio(self.cash, self.liability, Rounding::Down)
    }

    /// Cash held above liability, or zero.
    pub const fn excess(&self) -> Amount {
        self.cash.saturating_sub(&self.liability)
    }

    /// Liability not backed by cash, or zero.
    pub const fn deficit(&self) -> Amount {
        self.liability.saturating_sub(&self.cash)
    }
}

/// Accounting record of one underlying token.
///
/// # Invariants
///
/// - `liability == supply` at every observable point: both move only
///   through [`mint_shares`](Self::mint_shares) and
///   [`burn_shares`](Self::burn_shares).
/// - Balances never wrap: every primitive either applies in full or returns
///   an error and leaves the record untouched.
///
/// The record is `Copy`. Executions mutate a copy and write it back only
/// after custody has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetLedger {
    token: Token,
    share_token: Address,
    cash: Amount,
    liability: Amount,
    supply: Amount,
}

impl AssetLedger {
    /// Creates an empty ledger.
    pub const fn new(token: Token, share_token: Address) -> Self {
        Self {
            token,
            share_token,
            cash: Amount::ZERO,
            liability: Amount::ZERO,
            supply: Amount::ZERO,
        }
    }

    /// Restores a ledger from persisted balances; supply equals liability.
    pub const fn restored(
        token: Token,
        share_token: Address,
        cash: Amount,
        liability: Amount,
    ) -> Self {
        Self {
            token,
            share_token,
            cash,
            liability,
            supply: liability,
        }
    }

    /// Returns the underlying token.
    #[must_use]
    pub const fn token(&self) -> Token {
        self.token
    }

    /// Returns the underlying token address, which also keys the ledger.
    #[must_use]
    pub const fn asset(&self) -> Address {
        self.token.address()
    }

    /// Returns the receipt-share token address.
    #[must_use]
    pub const fn share_token(&self) -> Address {
        self.share_token
    }

    /// Returns the cash balance.
    pub const fn cash(&self) -> Amount {
        self.cash
    }

    /// Returns the liability owed to depositors.
    pub const fn liability(&self) -> Amount {
        self.liability
    }

    /// Returns the receipt-share supply.
    pub const fn supply(&self) -> Amount {
        self.supply
    }

    /// Returns the `(cash, liability)` snapshot.
    pub const fn state(&self) -> LedgerState {
        LedgerState::new(self.cash, self.liability)
    }

    /// Increases cash.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if cash would exceed `u128`.
    pub fn add_cash(&mut self, amount: Amount) -> Result<(), PoolError> {
        self.cash = self.cash.safe_add(&amount)?;
        Ok(())
    }

    /// Decreases cash.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientCash`] if `amount > cash`.
    pub fn remove_cash(&mut self, amount: Amount) -> Result<(), PoolError> {
        self.cash = self
            .cash
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientCash)?;
        Ok(())
    }

    /// Mints receipt shares, raising liability by the same amount.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if supply would exceed `u128`.
    pub fn mint_shares(&mut self, amount: Amount) -> Result<(), PoolError> {
        let supply = self.supply.safe_add(&amount)?;
        let liability = self.liability.safe_add(&amount)?;
        self.supply = supply;
        self.liability = liability;
        Ok(())
    }

    /// Burns receipt shares, lowering liability by the same amount.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientLiability`] if `amount` exceeds the
    /// recorded liability.
    pub fn burn_shares(&mut self, amount: Amount) -> Result<(), PoolError> {
        let liability = self
            .liability
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientLiability)?;
        let supply = self
            .supply
            .checked_sub(&amount)
            .ok_or(PoolError::InsufficientLiability)?;
        self.liability = liability;
        self.supply = supply;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Decimals;

    fn ledger(cash: u64, liability: u64) -> AssetLedger {
        AssetLedger::restored(
            Token::new(Address::repeat(1), Decimals::MAX),
            Address::repeat(2),
            Amount::from_whole(cash),
            Amount::from_whole(liability),
        )
    }

    fn assert_invariant(l: &AssetLedger) {
        assert_eq!(l.liability(), l.supply());
    }

    // -- Snapshot -----------------------------------------------------------

    #[test]
    fn coverage_ratio() {
        assert_eq!(ledger(170, 100).state().coverage_ratio(), Some(Wad::new(1_700_000_000_000_000_000)));
        assert_eq!(ledger(50, 0).state().coverage_ratio(), None);
        assert_eq!(ledger(0, 10).state().coverage_ratio(), Some(Wad::ZERO));
    }

    #[test]
    fn excess_and_deficit() {
        let s = ledger(170, 100).state();
        assert_eq!(s.excess(), Amount::from_whole(70));
        assert_eq!(s.deficit(), Amount::ZERO);
        let s = ledger(60, 100).state();
        assert_eq!(s.excess(), Amount::ZERO);
        assert_eq!(s.deficit(), Amount::from_whole(40));
    }

    // -- Primitives ---------------------------------------------------------

    #[test]
    fn new_ledger_is_empty() {
        let l = AssetLedger::new(Token::new(Address::repeat(1), Decimals::MAX), Address::repeat(2));
        assert!(l.cash().is_zero());
        assert!(l.liability().is_zero());
        assert_invariant(&l);
    }

    #[test]
    fn mint_and_burn_move_together() {
        let mut l = ledger(100, 100);
        let Ok(()) = l.mint_shares(Amount::from_whole(5)) else {
            panic!("mint failed");
        };
        assert_eq!(l.liability(), Amount::from_whole(105));
        assert_invariant(&l);
        let Ok(()) = l.burn_shares(Amount::from_whole(105)) else {
            panic!("burn failed");
        };
        assert!(l.liability().is_zero());
        assert_invariant(&l);
    }

    #[test]
    fn burn_beyond_liability_fails_untouched() {
        let mut l = ledger(100, 100);
        let before = l;
        assert_eq!(
            l.burn_shares(Amount::new(100 * crate::domain::SCALE + 1)),
            Err(PoolError::InsufficientLiability)
        );
        assert_eq!(l, before);
    }

    #[test]
    fn remove_cash_beyond_balance_fails_untouched() {
        let mut l = ledger(10, 100);
        let before = l;
        assert_eq!(l.remove_cash(Amount::from_whole(11)), Err(PoolError::InsufficientCash));
        assert_eq!(l, before);
        let Ok(()) = l.remove_cash(Amount::from_whole(10)) else {
            panic!("remove failed");
        };
        assert!(l.cash().is_zero());
    }

    #[test]
    fn add_cash_overflow_fails_untouched() {
        let mut l = AssetLedger::restored(
            Token::new(Address::repeat(1), Decimals::MAX),
            Address::repeat(2),
            Amount::MAX,
            Amount::ZERO,
        );
        let Err(PoolError::Overflow(_)) = l.add_cash(Amount::new(1)) else {
            panic!("expected Overflow");
        };
        assert_eq!(l.cash(), Amount::MAX);
    }

    #[test]
    fn mint_overflow_fails_untouched() {
        let mut l = ledger(0, 1);
        let before = l;
        assert!(l.mint_shares(Amount::MAX).is_err());
        assert_eq!(l, before);
    }
}
