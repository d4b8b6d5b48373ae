//! Balance-map custody for simulation and tests.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::domain::{Address, Amount};
use crate::error::PoolError;
use crate::math::CheckedArithmetic;
use crate::traits::{TokenCustody, Transfer};

/// A [`TokenCustody`] that keeps every `(token, account)` balance in memory.
///
/// The pool itself holds tokens under `pool_account`. A batch is applied to
/// a scratch copy of the balance map and swapped in only if every leg
/// succeeds, so a failed [`settle`](TokenCustody::settle) changes nothing.
///
/// Accounts can be frozen to simulate a token that rejects transfers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryCustody {
    pool_account: Address,
    balances: BTreeMap<(Address, Address), Amount>,
    frozen: BTreeSet<Address>,
}

impl InMemoryCustody {
    /// Creates custody with no balances; the pool holds under
    /// `pool_account`.
    #[must_use]
    pub fn new(pool_account: Address) -> Self {
        Self {
            pool_account,
            balances: BTreeMap::new(),
            frozen: BTreeSet::new(),
        }
    }

    /// Returns the account the pool holds tokens under.
    #[must_use]
    pub const fn pool_account(&self) -> Address {
        self.pool_account
    }

    /// Returns the balance of `token` held by `account`.
    pub fn balance_of(&self, token: &Address, account: &Address) -> Amount {
        self.balances
            .get(&(*token, *account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Mints `amount` of `token` to `account` outside any settlement.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the balance would exceed `u128`.
    pub fn credit(&mut self, token: Address, account: Address, amount: Amount) -> Result<(), PoolError> {
        let entry = self.balances.entry((token, account)).or_default();
        *entry = entry.safe_add(&amount)?;
        Ok(())
    }

    /// Makes every leg touching `account` fail.
    pub fn freeze(&mut self, account: Address) {
        self.frozen.insert(account);
    }

    /// Lifts a [`freeze`](Self::freeze).
    pub fn unfreeze(&mut self, account: &Address) {
        self.frozen.remove(account);
    }

    fn check_not_frozen(&self, account: &Address) -> Result<(), PoolError> {
        if self.frozen.contains(account) {
            return Err(PoolError::TransferFailed("account frozen"));
        }
        Ok(())
    }
}

type Balances = BTreeMap<(Address, Address), Amount>;

fn debit(balances: &mut Balances, token: Address, account: Address, amount: Amount) -> Result<(), PoolError> {
    let current = balances.get(&(token, account)).copied().unwrap_or(Amount::ZERO);
    let next = current
        .checked_sub(&amount)
        .ok_or(PoolError::TransferFailed("insufficient balance"))?;
    balances.insert((token, account), next);
    Ok(())
}

fn credit(balances: &mut Balances, token: Address, account: Address, amount: Amount) -> Result<(), PoolError> {
    let current = balances.get(&(token, account)).copied().unwrap_or(Amount::ZERO);
    let next = current
        .checked_add(&amount)
        .ok_or(PoolError::TransferFailed("balance overflow"))?;
    balances.insert((token, account), next);
    Ok(())
}

impl TokenCustody for InMemoryCustody {
    fn settle(&mut self, transfers: &[Transfer]) -> Result<(), PoolError> {
        let mut scratch = self.balances.clone();
        let pool = self.pool_account;
        for leg in transfers {
            match *leg {
                Transfer::In { token, from, amount } => {
                    self.check_not_frozen(&from)?;
                    debit(&mut scratch, token, from, amount)?;
                    credit(&mut scratch, token, pool, amount)?;
                }
                Transfer::Out { token, to, amount } => {
                    self.check_not_frozen(&to)?;
                    debit(&mut scratch, token, pool, amount)?;
                    credit(&mut scratch, token, to, amount)?;
                }
                Transfer::Mint { token, to, amount } => {
                    self.check_not_frozen(&to)?;
                    credit(&mut scratch, token, to, amount)?;
                }
                Transfer::Burn { token, from, amount } => {
                    self.check_not_frozen(&from)?;
                    debit(&mut scratch, token, from, amount)?;
                }
            }
        }
        debug!(legs = transfers.len(), "custody batch settled");
        self.balances = scratch;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const POOL: Address = Address::from_bytes([0xee; 32]);
    const TOKEN: Address = Address::from_bytes([1; 32]);
    const SHARE: Address = Address::from_bytes([2; 32]);
    const ALICE: Address = Address::from_bytes([0xa1; 32]);

    fn custody() -> InMemoryCustody {
        let mut c = InMemoryCustody::new(POOL);
        let Ok(()) = c.credit(TOKEN, ALICE, Amount::new(100)) else {
            panic!("credit");
        };
        c
    }

    #[test]
    fn in_and_out_move_through_pool() {
        let mut c = custody();
        let legs = [
            Transfer::In { token: TOKEN, from: ALICE, amount: Amount::new(60) },
            Transfer::Out { token: TOKEN, to: ALICE, amount: Amount::new(10) },
        ];
        assert_eq!(c.settle(&legs), Ok(()));
        assert_eq!(c.balance_of(&TOKEN, &ALICE), Amount::new(50));
        assert_eq!(c.balance_of(&TOKEN, &POOL), Amount::new(50));
    }

    #[test]
    fn mint_and_burn() {
        let mut c = custody();
        assert_eq!(
            c.settle(&[Transfer::Mint { token: SHARE, to: ALICE, amount: Amount::new(5) }]),
            Ok(())
        );
        assert_eq!(
            c.settle(&[Transfer::Burn { token: SHARE, from: ALICE, amount: Amount::new(5) }]),
            Ok(())
        );
        assert!(c.balance_of(&SHARE, &ALICE).is_zero());
    }

    #[test]
    fn failed_batch_changes_nothing() {
        let mut c = custody();
        let before = c.clone();
        let legs = [
            Transfer::In { token: TOKEN, from: ALICE, amount: Amount::new(60) },
            Transfer::Burn { token: SHARE, from: ALICE, amount: Amount::new(1) },
        ];
        assert_eq!(
            c.settle(&legs),
            Err(PoolError::TransferFailed("insufficient balance"))
        );
        assert_eq!(c, before);
    }

    #[test]
    fn frozen_account_rejected() {
        let mut c = custody();
        c.freeze(ALICE);
        let legs = [Transfer::Out { token: TOKEN, to: ALICE, amount: Amount::ZERO }];
        assert_eq!(c.settle(&legs), Err(PoolError::TransferFailed("account frozen")));
        c.unfreeze(&ALICE);
        assert_eq!(c.settle(&legs), Ok(()));
    }
}
