//! Token custody collaborator.
//!
//! Executions never move tokens one at a time. They describe every leg of
//! the settlement as a [`Transfer`] and hand the whole batch to
//! [`TokenCustody::settle`], which applies all legs or none. Ledger state is
//! committed only after the batch succeeds.
//!
//! | Leg | Effect |
//! |-----|--------|
//! | [`Transfer::In`] | Pull tokens from an account into the pool |
//! | [`Transfer::Out`] | Pay tokens from the pool to an account |
//! | [`Transfer::Mint`] | Issue receipt shares to an account |
//! | [`Transfer::Burn`] | Destroy receipt shares held by an account |

use crate::domain::{Address, Amount};
use crate::error::PoolError;

/// One leg of a settlement batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transfer {
    /// Move `amount` of `token` from `from` into the pool.
    In {
        /// Token moved.
        token: Address,
        /// Paying account.
        from: Address,
        /// Raw amount.
        amount: Amount,
    },
    /// Move `amount` of `token` from the pool to `to`.
    Out {
        /// Token moved.
        token: Address,
        /// Receiving account.
        to: Address,
        /// Raw amount.
        amount: Amount,
    },
    /// Issue `amount` of receipt-share `token` to `to`.
    Mint {
        /// Share token.
        token: Address,
        /// Receiving account.
        to: Address,
        /// Raw amount.
        amount: Amount,
    },
    /// Destroy `amount` of receipt-share `token` held by `from`.
    Burn {
        /// Share token.
        token: Address,
        /// Holding account.
        from: Address,
        /// Raw amount.
        amount: Amount,
    },
}

impl Transfer {
    /// Returns the token this leg moves.
    #[must_use]
    pub const fn token(&self) -> Address {
        match self {
            Self::In { token, .. }
            | Self::Out { token, .. }
            | Self::Mint { token, .. }
            | Self::Burn { token, .. } => *token,
        }
    }

    /// Returns the amount this leg moves.
    pub const fn amount(&self) -> Amount {
        match self {
            Self::In { amount, .. }
            | Self::Out { amount, .. }
            | Self::Mint { amount, .. }
            | Self::Burn { amount, .. } => *amount,
        }
    }
}

/// Applies settlement batches atomically.
pub trait TokenCustody {
    /// Applies every leg of `transfers`, or none of them.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TransferFailed`] if any leg cannot be applied;
    /// in that case no balance has changed.
    fn settle(&mut self, transfers: &[Transfer]) -> Result<(), PoolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_cover_every_leg() {
        let token = Address::repeat(7);
        let account = Address::repeat(1);
        let amount = Amount::new(5);
        let legs = [
            Transfer::In { token, from: account, amount },
            Transfer::Out { token, to: account, amount },
            Transfer::Mint { token, to: account, amount },
            Transfer::Burn { token, from: account, amount },
        ];
        for leg in legs {
            assert_eq!(leg.token(), token);
            assert_eq!(leg.amount(), amount);
        }
    }
}
