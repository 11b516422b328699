//! Amount type for ledger values
//!
//! Wraps an `f64` without imposing rounding or currency semantics on
//! arithmetic. Only the display path rounds, and only to two decimals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A numeric amount entered by the user
///
/// Any finite value is allowed, including zero and negatives.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    ///
    /// # Examples
    /// ```
    /// use verzi::models::Amount;
    /// let amount = Amount::new(10.5);
    /// assert_eq!(amount.value(), 10.5);
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse an amount typed into a form field
    ///
    /// Blank input is zero, matching a cleared numeric field. Accepts an
    /// optional leading sign and a leading `$`; thousands separators are
    /// not accepted.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::zero());
        }

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).trim_start();

        // One sign only; f64 parsing would accept a second one
        if rest.starts_with(['+', '-']) {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        let value: f64 = rest
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::NotFinite(s.to_string()));
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Text for a numeric input box: no symbol, whole numbers without a
    /// fraction
    ///
    /// Parsing the result gives back the same amount.
    pub fn to_input_text(&self) -> String {
        if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            format!("{}", self.0 as i64)
        } else {
            self.0.to_string()
        }
    }

    /// Format with a currency symbol and two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            AmountParseError::NotFinite(s) => write!(f, "Amount must be a finite number: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(10.5).to_string(), "$10.50");
        assert_eq!(Amount::zero().to_string(), "$0.00");
        assert_eq!(Amount::new(-10.5).to_string(), "-$10.50");
        assert_eq!(Amount::new(3.0).format_with_symbol("€"), "€3.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(10.0);
        let b = Amount::new(2.5);

        assert_eq!(a + b, Amount::new(12.5));
        assert_eq!(a - b, Amount::new(7.5));
        assert_eq!(-a, Amount::new(-10.0));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("$10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("-$4").unwrap().value(), -4.0);
        assert_eq!(Amount::parse("+7").unwrap().value(), 7.0);
        assert_eq!(Amount::parse("0.125").unwrap().value(), 0.125);
    }

    #[test]
    fn test_parse_blank_is_zero() {
        assert!(Amount::parse("").unwrap().is_zero());
        assert!(Amount::parse("   ").unwrap().is_zero());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Amount::parse("ten"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Amount::parse("inf"),
            Err(AmountParseError::NotFinite(_))
        ));
        assert!(Amount::parse("NaN").is_err());
        assert!(matches!(
            Amount::parse("--4"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Amount::parse("-$-4"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(Amount::parse("+-4").is_err());
        assert!(Amount::parse("$+4").is_err());
    }

    #[test]
    fn test_input_text_round_trips() {
        assert_eq!(Amount::new(20000.0).to_input_text(), "20000");
        assert_eq!(Amount::new(-4.5).to_input_text(), "-4.5");

        for value in [1e20, -3e16, 0.1, 123456.789] {
            let amount = Amount::new(value);
            assert_eq!(Amount::parse(&amount.to_input_text()).unwrap(), amount);
        }
    }

    #[test]
    fn test_sum() {
        let amounts = [Amount::new(1.0), Amount::new(2.0), Amount::new(-0.5)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total, Amount::new(2.5));
    }

    #[test]
    fn test_serialization_is_transparent() {
        let json = serde_json::to_string(&Amount::new(15.0)).unwrap();
        assert_eq!(json, "15.0");

        let back: Amount = serde_json::from_str("100").unwrap();
        assert_eq!(back, Amount::new(100.0));
    }
}
