//! Rounding direction for fixed-point division.

/// Which way a division remainder goes.
///
/// Every division in the crate names one, so a quote and the execution that
/// follows it produce the same bits.
///
/// # Examples
///
/// ```
/// use coverage_pool::domain::Rounding;
///
/// // 7 / 2 leaves remainder 1, exactly half the divisor
/// assert!(!Rounding::Down.bumps(true, true));
/// assert!(Rounding::Up.bumps(true, false));
/// assert!(Rounding::Nearest.bumps(true, true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling. Used for amounts withheld by the pool.
    Up,
    /// Floor. Used for amounts paid out.
    Down,
    /// Half-up at the last unit. Used for oracle conversions.
    Nearest,
}

impl Rounding {
    /// Whether a truncated quotient must be incremented.
    ///
    /// `has_remainder` is `remainder != 0`; `at_least_half` is
    /// `2 × remainder >= divisor`.
    #[must_use]
    pub const fn bumps(self, has_remainder: bool, at_least_half: bool) -> bool {
        match self {
            Self::Down => false,
            Self::Up => has_remainder,
            Self::Nearest => has_remainder && at_least_half,
        }
    }
}

impl core::fmt::Display for Rounding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Nearest => "nearest",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_quotient_never_bumps() {
        for mode in [Rounding::Up, Rounding::Down, Rounding::Nearest] {
            assert!(!mode.bumps(false, false));
        }
    }

    #[test]
    fn nearest_needs_half() {
        assert!(!Rounding::Nearest.bumps(true, false));
        assert!(Rounding::Nearest.bumps(true, true));
        assert!(Rounding::Up.bumps(true, false));
        assert!(!Rounding::Down.bumps(true, true));
    }

    #[test]
    fn display() {
        assert_eq!(Rounding::Nearest.to_string(), "nearest");
    }
}
