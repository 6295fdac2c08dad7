use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GymError;

/// Largest magnitude representable with 10 digits, 2 of them fractional.
pub const MAX_PRICE_CENTS: i64 = 9_999_999_999;

/// A decimal amount with two fractional digits, stored as integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "i64", into = "i64")]
#[sqlx(transparent)]
pub struct Price(i64);

impl Price {
    pub fn from_cents(cents: i64) -> Result<Self, GymError> {
        if cents.unsigned_abs() > MAX_PRICE_CENTS.unsigned_abs() {
            return Err(GymError::Validation(
                "Price cannot have more than 10 digits".to_string(),
            ));
        }
        Ok(Price(cents))
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Price {
    type Error = GymError;

    fn try_from(cents: i64) -> Result<Self, Self::Error> {
        Price::from_cents(cents)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Price {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GymError::Validation(format!("Invalid price: {}", s));

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(GymError::Validation(
                "Price cannot have more than 2 decimal places".to_string(),
            ));
        }
        if whole.trim_start_matches('0').len() > 8 {
            return Err(GymError::Validation(
                "Price cannot have more than 8 digits before the decimal point".to_string(),
            ));
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| invalid())? };
        let fraction: i64 = format!("{:0<2}", fraction).parse().map_err(|_| invalid())?;

        let cents = whole * 100 + fraction;
        Price::from_cents(if negative { -cents } else { cents })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_parsing() {
        assert_eq!("29.99".parse::<Price>().unwrap().cents(), 2999);
        assert_eq!("30".parse::<Price>().unwrap().cents(), 3000);
        assert_eq!("4.5".parse::<Price>().unwrap().cents(), 450);
        assert_eq!(".75".parse::<Price>().unwrap().cents(), 75);
        assert_eq!("-12.05".parse::<Price>().unwrap().cents(), -1205);
        assert_eq!("99999999.99".parse::<Price>().unwrap().cents(), MAX_PRICE_CENTS);
    }

    #[test]
    fn test_price_rejects_malformed_input() {
        assert!("".parse::<Price>().is_err());
        assert!(".".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
        assert!("1.2.3".parse::<Price>().is_err());
        assert!("29.999".parse::<Price>().is_err());
        assert!("100000000".parse::<Price>().is_err());
    }

    #[test]
    fn test_price_display_always_has_two_decimals() {
        assert_eq!("29.99".parse::<Price>().unwrap().to_string(), "29.99");
        assert_eq!("30".parse::<Price>().unwrap().to_string(), "30.00");
        assert_eq!(Price::from_cents(5).unwrap().to_string(), "0.05");
        assert_eq!(Price::from_cents(-1205).unwrap().to_string(), "-12.05");
    }

    #[test]
    fn test_price_range() {
        assert!(Price::from_cents(MAX_PRICE_CENTS + 1).is_err());
        assert!(Price::from_cents(-MAX_PRICE_CENTS).is_ok());
        assert!(Price::from_cents(-MAX_PRICE_CENTS - 1).is_err());
        assert!(Price::from_cents(i64::MIN).is_err());
        assert!(Price::from_cents(i64::MAX).is_err());
    }

    #[test]
    fn test_price_json_is_range_checked() {
        assert_eq!(serde_json::to_string(&Price::from_cents(2999).unwrap()).unwrap(), "2999");
        assert_eq!(serde_json::from_str::<Price>("2999").unwrap().cents(), 2999);
        assert!(serde_json::from_str::<Price>("99999999999999").is_err());
        assert!(serde_json::from_str::<Price>("-9223372036854775808").is_err());
    }
}
