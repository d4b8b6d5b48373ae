//! 18-decimal fixed-point ratio.

use core::fmt;
use core::str::FromStr;

use super::{Amount, Rounding};
use crate::error::PoolError;
use crate::math::mul_div;

/// Number of fractional digits carried by every amount and ratio.
pub const FRACTIONAL_DIGITS: u32 = 18;

/// `10^18`, the fixed-point unit.
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// A non-negative ratio scaled by `10^18` (coverage ratios, oracle rates,
/// curve coefficients).
///
/// # Examples
///
/// ```
/// use coverage_pool::domain::{Amount, Rounding, Wad};
///
/// let r = Wad::from_ratio(Amount::from_whole(170), Amount::from_whole(100), Rounding::Down);
/// assert_eq!(r, Some(Wad::new(1_700_000_000_000_000_000)));
/// assert_eq!(Wad::ONE.to_string(), "1.000000000000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Wad(u128);

impl Wad {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One (`10^18`).
    pub const ONE: Self = Self(SCALE);

    /// Two (`2 × 10^18`).
    pub const TWO: Self = Self(2 * SCALE);

    /// Wraps a raw scaled value.
    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the ratio is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `numerator / denominator` as a WAD ratio.
    ///
    /// Returns `None` if `denominator` is zero or the ratio overflows.
    pub fn from_ratio(numerator: Amount, denominator: Amount, rounding: Rounding) -> Option<Self> {
        mul_div(numerator.get(), SCALE, denominator.get(), rounding)
            .ok()
            .map(Self)
    }

    /// Checked addition.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction.
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

    /// Fixed-point product `self × other / 10^18`.
    #[must_use]
    pub fn checked_mul(&self, other: &Self, rounding: Rounding) -> Option<Self> {
        mul_div(self.0, other.0, SCALE, rounding).ok().map(Self)
    }

    /// Fixed-point quotient `self × 10^18 / other`.
    #[must_use]
    pub fn checked_div(&self, other: &Self, rounding: Rounding) -> Option<Self> {
        mul_div(self.0, SCALE, other.0, rounding).ok().map(Self)
    }
}

impl fmt::Display for Wad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed(f, self.0)
    }
}

impl FromStr for Wad {
    type Err = PoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed(s).map(Self)
    }
}

/// Writes `raw` as `integer.fraction` with all 18 fractional digits.
pub(crate) fn write_fixed(f: &mut fmt::Formatter<'_>, raw: u128) -> fmt::Result {
    let integer = raw / SCALE;
    let fraction = raw % SCALE;
    write!(f, "{integer}.{fraction:018}")
}

/// Parses `"123"` or `"123.456"` (at most 18 fractional digits) into raw
/// scaled units.
pub(crate) fn parse_fixed(s: &str) -> Result<u128, PoolError> {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(PoolError::InvalidQuantity("empty decimal string"));
    }
    if frac_part.len() > FRACTIONAL_DIGITS as usize {
        return Err(PoolError::InvalidPrecision("more than 18 fractional digits"));
    }
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(PoolError::InvalidQuantity("non-digit in decimal string"));
    }

    let integer: u128 = if int_part.is_empty() {
        0
    } else {
        int_part
            .parse()
            .map_err(|_| PoolError::Overflow("decimal integer part"))?
    };
    let mut fraction: u128 = if frac_part.is_empty() {
        0
    } else {
        frac_part
            .parse()
            .map_err(|_| PoolError::InvalidQuantity("decimal fraction part"))?
    };
    // right-pad the fraction to 18 digits
    let pad = FRACTIONAL_DIGITS - frac_part.len() as u32;
    fraction *= 10u128.pow(pad);

    integer
        .checked_mul(SCALE)
        .and_then(|v| v.checked_add(fraction))
        .ok_or(PoolError::Overflow("decimal value exceeds u128"))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Wad::ONE.get(), SCALE);
        assert_eq!(Wad::TWO.get(), 2 * SCALE);
        assert!(Wad::ZERO.is_zero());
    }

    #[test]
    fn ratio_truncates() {
        let Some(r) = Wad::from_ratio(Amount::new(1), Amount::new(3), Rounding::Down) else {
            panic!("expected ratio");
        };
        assert_eq!(r.get(), 333_333_333_333_333_333);
        assert_eq!(
            Wad::from_ratio(Amount::new(1), Amount::ZERO, Rounding::Down),
            None
        );
    }

    #[test]
    fn mul_and_div() {
        let half = Wad::new(SCALE / 2);
        assert_eq!(Wad::TWO.checked_mul(&half, Rounding::Down), Some(Wad::ONE));
        assert_eq!(Wad::ONE.checked_div(&half, Rounding::Down), Some(Wad::TWO));
        assert_eq!(Wad::ONE.checked_div(&Wad::ZERO, Rounding::Down), None);
    }

    #[test]
    fn display_and_parse() {
        let Ok(rate) = "1.012287344219239968".parse::<Wad>() else {
            panic!("valid decimal");
        };
        assert_eq!(rate.get(), 1_012_287_344_219_239_968);
        assert_eq!(rate.to_string(), "1.012287344219239968");
        assert_eq!("0.5".parse::<Wad>(), Ok(Wad::new(SCALE / 2)));
        assert_eq!(".25".parse::<Wad>(), Ok(Wad::new(SCALE / 4)));
        assert!("1.0000000000000000001".parse::<Wad>().is_err());
        assert!("1e18".parse::<Wad>().is_err());
        assert!("".parse::<Wad>().is_err());
    }

    #[test]
    fn saturating() {
        assert_eq!(Wad::ONE.saturating_sub(&Wad::TWO), Wad::ZERO);
        assert_eq!(Wad::TWO.min(Wad::ONE), Wad::ONE);
    }
}
