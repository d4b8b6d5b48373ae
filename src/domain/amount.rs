//! Raw token amount with checked arithmetic.

use core::fmt;
use core::str::FromStr;

use super::wad::{parse_fixed, write_fixed, SCALE};
use super::{Rounding, Wad};
use crate::error::PoolError;
use crate::math::mul_div;

/// A token quantity in raw units of the owning token's precision
/// (`1.0` token = `10^decimals`).
///
/// Cash, liability, share supply and every quoted amount use this type.
/// `Display` and `FromStr` use 18 fractional digits; amounts of a token
/// with fewer decimals go through [`Token::to_standard_units`] before
/// printing.
///
/// [`Token::to_standard_units`]: crate::domain::Token::to_standard_units
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow or division by zero instead of panicking or wrapping.
///
/// # Examples
///
/// ```
/// use coverage_pool::domain::{Amount, Rounding, Wad};
///
/// let cash = Amount::from_whole(170);
/// let out = Amount::from_whole(70);
/// assert_eq!(cash.checked_sub(&out), Some(Amount::from_whole(100)));
///
/// let rate: Wad = "1.012287344219239968".parse().expect("valid rate");
/// let converted = out.checked_mul_wad(&rate, Rounding::Nearest).expect("fits");
/// assert_eq!(converted.to_string(), "70.860114095346797760");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from raw units.
    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Creates an amount of `whole` tokens (`whole × 10^18` raw units).
    ///
    /// Cannot overflow: `u64::MAX × 10^18 < u128::MAX`.
    pub const fn from_whole(whole: u64) -> Self {
        Self(whole as u128 * SCALE)
    }

    /// Returns the raw units.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Subtraction clamped at zero.
    pub const fn saturating_sub(&self, other: &Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// `self × factor / 10^18` with a 256-bit intermediate.
    #[must_use]
    pub fn checked_mul_wad(&self, factor: &Wad, rounding: Rounding) -> Option<Self> {
        mul_div(self.0, factor.get(), SCALE, rounding).ok().map(Self)
    }

    /// `self × 10^18 / divisor`. Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div_wad(&self, divisor: &Wad, rounding: Rounding) -> Option<Self> {
        mul_div(self.0, SCALE, divisor.get(), rounding).ok().map(Self)
    }

    /// `self × numerator / denominator` with a 256-bit intermediate.
    #[must_use]
    pub fn checked_mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
    ) -> Option<Self> {
        mul_div(self.0, numerator.0, denominator.0, rounding)
            .ok()
            .map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed(f, self.0)
    }
}

impl FromStr for Amount {
    type Err = PoolError;

    /// Parses a decimal token quantity such as `"29.139885904653202240"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed(s).map(Self)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        let Ok(a) = s.parse() else {
            panic!("invalid amount literal {s}");
        };
        a
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn whole_units() {
        assert_eq!(Amount::from_whole(1).get(), SCALE);
        assert_eq!(Amount::from_whole(0), Amount::ZERO);
        assert!(Amount::from_whole(u64::MAX) < Amount::MAX);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
        assert!(Amount::ZERO.is_zero());
    }

    // -- Display / parse ----------------------------------------------------

    #[test]
    fn display_keeps_eighteen_digits() {
        assert_eq!(Amount::from_whole(100).to_string(), "100.000000000000000000");
        assert_eq!(Amount::new(1).to_string(), "0.000000000000000001");
    }

    #[test]
    fn parse_fixture_values() {
        assert_eq!(
            amount("29.139885904653202240").get(),
            29_139_885_904_653_202_240
        );
        assert_eq!(amount("70").get(), 70 * SCALE);
        assert!("-1".parse::<Amount>().is_err());
    }

    // -- Checked add / sub --------------------------------------------------

    #[test]
    fn add_and_sub() {
        let a = Amount::from_whole(100);
        let b = Amount::from_whole(70);
        assert_eq!(a.checked_add(&b), Some(Amount::from_whole(170)));
        assert_eq!(a.checked_sub(&b), Some(Amount::from_whole(30)));
        assert_eq!(b.checked_sub(&a), None);
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
        assert_eq!(b.saturating_sub(&a), Amount::ZERO);
    }

    // -- WAD scaling --------------------------------------------------------

    #[test]
    fn mul_wad_exceeds_u128_intermediate() {
        // 10^12 tokens * 1.5: the raw product overflows u128 without widening
        let big = Amount::from_whole(1_000_000_000_000);
        let one_and_half = Wad::new(3 * SCALE / 2);
        assert_eq!(
            big.checked_mul_wad(&one_and_half, Rounding::Down),
            Some(Amount::from_whole(1_500_000_000_000))
        );
    }

    #[test]
    fn div_wad_rounding() {
        let rate = Wad::new(1_012_287_344_219_239_968);
        let a = Amount::from_whole(25);
        assert_eq!(
            a.checked_div_wad(&rate, Rounding::Nearest),
            Some(amount("24.696545049945354502"))
        );
        assert_eq!(
            a.checked_div_wad(&rate, Rounding::Down),
            Some(amount("24.696545049945354501"))
        );
        assert_eq!(a.checked_div_wad(&Wad::ZERO, Rounding::Down), None);
    }

    #[test]
    fn mul_div_proportion() {
        let a = Amount::from_whole(10);
        assert_eq!(
            a.checked_mul_div(&Amount::new(1), &Amount::new(3), Rounding::Up),
            Some(Amount::new(3_333_333_333_333_333_334))
        );
        assert_eq!(
            a.checked_mul_div(&Amount::new(1), &Amount::ZERO, Rounding::Up),
            None
        );
    }
}
