use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A monetary amount in integer cents.
///
/// Receipts carry prices and totals as decimal strings; `Money` is what the
/// scoring rules evaluate. Parsing is strict: one or more ASCII digits, a
/// dot, exactly two cent digits (`"35.00"`, `"6.49"`). No sign, no
/// whitespace, no thousands separators.
///
/// All arithmetic is exact. The "round dollar" and "multiple of 0.25"
/// checks are plain modulo on cents, so `"35.10"` is never mistaken for a
/// quarter multiple the way truncated-float implementations mistake it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Construct from a cent count.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Total cents.
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Whole-dollar amount with no cents, e.g. `"35.00"`.
    pub const fn is_round_dollar(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Exact multiple of 0.25, e.g. `"35.25"`, `"0.50"`.
    pub const fn is_quarter_multiple(&self) -> bool {
        self.0 % 25 == 0
    }

    /// `ceil(amount * 0.2)` in whole points, computed in cents.
    ///
    /// `12.25` → 1225 cents → ceil(2.45) → 3.
    pub const fn ceil_fifth(&self) -> u64 {
        self.0.div_ceil(500)
    }
}

impl FromStr for Money {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypeError::InvalidMoney(s.to_string());

        let (dollars, cents) = s.split_once('.').ok_or_else(invalid)?;
        if dollars.is_empty()
            || cents.len() != 2
            || !dollars.bytes().all(|b| b.is_ascii_digit())
            || !cents.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let dollars: u64 = dollars
            .parse()
            .map_err(|_| TypeError::MoneyOutOfRange(s.to_string()))?;
        let cents: u64 = cents.parse().map_err(|_| invalid())?;
        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .map(Money)
            .ok_or_else(|| TypeError::MoneyOutOfRange(s.to_string()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_amounts() {
        assert_eq!("35.00".parse::<Money>().unwrap().cents(), 3500);
        assert_eq!("6.49".parse::<Money>().unwrap().cents(), 649);
        assert_eq!("0.01".parse::<Money>().unwrap().cents(), 1);
        assert_eq!("1234.56".parse::<Money>().unwrap().cents(), 123_456);
    }

    #[test]
    fn rejects_malformed_amounts() {
        for bad in [
            "", "35", "35.", "35.0", "35.000", ".50", "-1.00", "+1.00",
            " 1.00", "1.00 ", "1,00", "1.0a", "a.00", "1..00",
        ] {
            assert!(bad.parse::<Money>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_overflow() {
        let err = "99999999999999999999.00".parse::<Money>().unwrap_err();
        assert!(matches!(err, TypeError::MoneyOutOfRange(_)));
    }

    #[test]
    fn round_dollar() {
        assert!("35.00".parse::<Money>().unwrap().is_round_dollar());
        assert!("0.00".parse::<Money>().unwrap().is_round_dollar());
        assert!(!"35.10".parse::<Money>().unwrap().is_round_dollar());
        assert!(!"35.35".parse::<Money>().unwrap().is_round_dollar());
    }

    #[test]
    fn quarter_multiple() {
        assert!("35.00".parse::<Money>().unwrap().is_quarter_multiple());
        assert!("9.75".parse::<Money>().unwrap().is_quarter_multiple());
        assert!("0.25".parse::<Money>().unwrap().is_quarter_multiple());
        assert!(!"35.10".parse::<Money>().unwrap().is_quarter_multiple());
        assert!(!"35.35".parse::<Money>().unwrap().is_quarter_multiple());
    }

    #[test]
    fn ceil_fifth_rounds_up() {
        // 12.25 * 0.2 = 2.45 → 3
        assert_eq!("12.25".parse::<Money>().unwrap().ceil_fifth(), 3);
        // 12.00 * 0.2 = 2.4 → 3
        assert_eq!("12.00".parse::<Money>().unwrap().ceil_fifth(), 3);
        // 5.00 * 0.2 = 1.0 exactly → 1
        assert_eq!("5.00".parse::<Money>().unwrap().ceil_fifth(), 1);
        // 0.01 * 0.2 = 0.002 → 1
        assert_eq!("0.01".parse::<Money>().unwrap().ceil_fifth(), 1);
        assert_eq!(Money::from_cents(0).ceil_fifth(), 0);
    }

    #[test]
    fn display_roundtrip() {
        for s in ["35.00", "6.49", "0.05", "1234.56"] {
            assert_eq!(s.parse::<Money>().unwrap().to_string(), s);
        }
    }
}
