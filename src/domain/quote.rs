//! Side-effect-free price quote.

use core::fmt;

use super::{Amount, Rounding, Wad};

/// The priced outcome of a prospective operation.
///
/// A quote is computed from current ledger state without mutating it.
/// Repeating a quote against unchanged state yields an identical value, and
/// executing immediately afterwards settles exactly `amount_out`.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `amount_in` | Shares burned or tokens paid in by the caller |
/// | `amount_out` | Tokens (or shares) delivered to the recipient |
/// | `fee` | Curve penalty or haircut withheld by the pool |
/// | `bonus` | Relief bonus paid on top of the nominal value |
/// | `effective_rate` | `amount_out / amount_in`, truncated |
///
/// # Examples
///
/// ```
/// use coverage_pool::domain::{Amount, Quote, Wad};
///
/// let q = Quote::new(Amount::from_whole(10), Amount::from_whole(9), Amount::from_whole(1), Amount::ZERO);
/// assert_eq!(q.effective_rate(), Wad::new(900_000_000_000_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quote {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
    bonus: Amount,
    effective_rate: Wad,
}

impl Quote {
    /// Builds a quote; the effective rate is derived from the two amounts
    /// and is zero when `amount_in` is zero.
    pub fn new(amount_in: Amount, amount_out: Amount, fee: Amount, bonus: Amount) -> Self {
        let effective_rate =
            Wad::from_ratio(amount_out, amount_in, Rounding::Down).unwrap_or(Wad::ZERO);
        Self {
            amount_in,
            amount_out,
            fee,
            bonus,
            effective_rate,
        }
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the withheld fee component.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Returns the bonus component.
    pub const fn bonus(&self) -> Amount {
        self.bonus
    }

    /// Returns `amount_out / amount_in`.
    pub const fn effective_rate(&self) -> Wad {
        self.effective_rate
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote(in={}, out={}, fee={}, bonus={}, rate={})",
            self.amount_in, self.amount_out, self.fee, self.bonus, self.effective_rate
        )
    }
}
