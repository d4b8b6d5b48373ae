//! Oracle-adjusted unit conversion between members of one group.

use tracing::debug;

use crate::domain::{Amount, Rounding, Timestamp, Token, Wad};
use crate::error::PoolError;
use crate::ledger::AggregateGroup;
use crate::math::CheckedArithmetic;
use crate::traits::RateSource;

/// Converts amounts between assets of one aggregate group.
///
/// Conversion from `X` to `Y`:
///
/// 1. Rescale decimals (`10^dY / 10^dX`).
/// 2. If `X` is the group's rated member, multiply by the rate; if `Y` is,
///    divide by it. Between two unrated members the oracle is not consulted.
///
/// The rate is applied at the finer of the two precisions, and every step
/// rounds in the caller-supplied direction. Callers pass [`Rounding::Up`]
/// for amounts the caller owes the pool and [`Rounding::Down`] for amounts
/// the pool pays out.
///
/// A reading is rejected with [`PoolError::StaleOrInvalidRate`] if its rate
/// is zero or `now` is past its `valid_until`.
#[derive(Debug, Clone)]
pub struct OracleRateAdapter<R> {
    source: R,
}

impl<R: RateSource> OracleRateAdapter<R> {
    /// Wraps a rate source.
    pub const fn new(source: R) -> Self {
        Self { source }
    }

    /// Returns the wrapped source.
    pub const fn source(&self) -> &R {
        &self.source
    }

    /// Returns the wrapped source mutably, e.g. to push a fresh reading.
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Returns the validated rate of `group`, or `None` if the group has no
    /// rated member.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::StaleOrInvalidRate`] if the reading is missing,
    /// zero, or expired at `now`.
    pub fn current_rate(
        &self,
        group: &AggregateGroup,
        now: Timestamp,
    ) -> Result<Option<Wad>, PoolError> {
        if group.rated().is_none() {
            return Ok(None);
        }
        let reading = self.source.get_rate(group.id())?;
        if !reading.is_usable_at(now) {
            debug!(
                group = %group.id(),
                rate = %reading.rate,
                valid_until = %reading.valid_until,
                now = %now,
                "oracle reading rejected"
            );
            return Err(PoolError::StaleOrInvalidRate);
        }
        Ok(Some(reading.rate))
    }

    /// Converts `amount` of `from` into units of `to`, rounding every step
    /// with `rounding`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::StaleOrInvalidRate`] if a rate is needed and invalid.
    /// - [`PoolError::Overflow`] if the converted value exceeds `u128`.
    pub fn convert(
        &self,
        group: &AggregateGroup,
        amount: Amount,
        from: &Token,
        to: &Token,
        now: Timestamp,
        rounding: Rounding,
    ) -> Result<Amount, PoolError> {
        let from_rated = group.is_rated(&from.address());
        let rate = if from_rated || group.is_rated(&to.address()) {
            self.current_rate(group, now)?
        } else {
            None
        };
        let priced = |value: Amount| match rate {
            None => Ok(value),
            Some(rate) if from_rated => value.safe_mul(&rate, rounding),
            Some(rate) => value.safe_div(&rate, rounding),
        };
        if to.decimals() >= from.decimals() {
            priced(from.rescale_to(amount, to, rounding)?)
        } else {
            from.rescale_to(priced(amount)?, to, rounding)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::GroupConfig;
    use crate::domain::{Address, Decimals, GroupId};
    use crate::oracle::StaticRateSource;

    const RATE: Wad = Wad::new(1_012_287_344_219_239_968);

    fn token(byte: u8) -> Token {
        Token::new(Address::repeat(byte), Decimals::MAX)
    }

    fn group(rated: Option<u8>) -> AggregateGroup {
        let Ok(cfg) = GroupConfig::new(
            GroupId::new(1),
            vec![Address::repeat(1), Address::repeat(2), Address::repeat(3)],
            rated.map(Address::repeat),
        ) else {
            panic!("valid group");
        };
        AggregateGroup::from_group_config(&cfg)
    }

    fn adapter(valid_until: u64) -> OracleRateAdapter<StaticRateSource> {
        OracleRateAdapter::new(StaticRateSource::new().with_rate(
            GroupId::new(1),
            RATE,
            Timestamp::new(valid_until),
        ))
    }

    fn amount(s: &str) -> Amount {
        let Ok(a) = s.parse() else {
            panic!("invalid amount {s}");
        };
        a
    }

    #[test]
    fn rated_to_unrated_multiplies() {
        let a = adapter(100);
        let Ok(out) = a.convert(&group(Some(2)), amount("70"), &token(2), &token(1), Timestamp::new(5), Rounding::Up)
        else {
            panic!("expected Ok");
        };
        assert_eq!(out, amount("70.860114095346797760"));
    }

    #[test]
    fn unrated_to_rated_divides_in_given_direction() {
        let a = adapter(100);
        let g = group(Some(2));
        // 25 / rate = 24.69654504994535450158...
        let (Ok(up), Ok(down)) = (
            a.convert(&g, amount("25"), &token(1), &token(2), Timestamp::new(5), Rounding::Up),
            a.convert(&g, amount("25"), &token(1), &token(2), Timestamp::new(5), Rounding::Down),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(up, amount("24.696545049945354502"));
        assert_eq!(down, amount("24.696545049945354501"));
    }

    #[test]
    fn unrated_pair_skips_oracle() {
        // no reading at all: the source would fail if consulted
        let a = OracleRateAdapter::new(StaticRateSource::new());
        let out = a.convert(&group(Some(2)), amount("3"), &token(1), &token(3), Timestamp::new(5), Rounding::Down);
        assert_eq!(out, Ok(amount("3")));
        let out = a.convert(&group(None), amount("3"), &token(1), &token(2), Timestamp::new(5), Rounding::Down);
        assert_eq!(out, Ok(amount("3")));
    }

    #[test]
    fn expiry_is_inclusive() {
        let a = adapter(100);
        let g = group(Some(2));
        assert!(a.convert(&g, amount("1"), &token(1), &token(2), Timestamp::new(100), Rounding::Up).is_ok());
        assert_eq!(
            a.convert(&g, amount("1"), &token(1), &token(2), Timestamp::new(101), Rounding::Up),
            Err(PoolError::StaleOrInvalidRate)
        );
    }

    #[test]
    fn zero_rate_rejected() {
        let a = OracleRateAdapter::new(StaticRateSource::new().with_rate(
            GroupId::new(1),
            Wad::ZERO,
            Timestamp::MAX,
        ));
        assert_eq!(
            a.current_rate(&group(Some(2)), Timestamp::new(0)),
            Err(PoolError::StaleOrInvalidRate)
        );
    }

    #[test]
    fn decimals_rescaled_before_rate() {
        let Ok(d6) = Decimals::new(6) else {
            panic!("valid decimals");
        };
        let usdc = Token::new(Address::repeat(1), d6);
        let a = adapter(100);
        let Ok(out) = a.convert(
            &group(Some(2)),
            Amount::new(2_000_000),
            &usdc,
            &token(3),
            Timestamp::new(0),
            Rounding::Down,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::from_whole(2));
    }

    #[test]
    fn coarser_target_rounds_in_given_direction() {
        let Ok(d6) = Decimals::new(6) else {
            panic!("valid decimals");
        };
        let usdc = Token::new(Address::repeat(3), d6);
        let a = adapter(100);
        let g = group(Some(2));
        let dust = Amount::new(1_499_999_999_999);
        let up = a.convert(&g, dust, &token(1), &usdc, Timestamp::new(0), Rounding::Up);
        let down = a.convert(&g, dust, &token(1), &usdc, Timestamp::new(0), Rounding::Down);
        assert_eq!(up, Ok(Amount::new(2)));
        assert_eq!(down, Ok(Amount::new(1)));
    }

    #[test]
    fn rate_applied_before_coarsening() {
        let Ok(d6) = Decimals::new(6) else {
            panic!("valid decimals");
        };
        let usdc = Token::new(Address::repeat(1), d6);
        let a = adapter(100);
        // 1 rated unit at 18 dp is worth 1.012287... unrated units; at 6 dp
        // that is 1.012288 when rounded up, not 1.000000
        let out = a.convert(
            &group(Some(2)),
            Amount::from_whole(1),
            &token(2),
            &usdc,
            Timestamp::new(0),
            Rounding::Up,
        );
        assert_eq!(out, Ok(Amount::new(1_012_288)));
    }
}
