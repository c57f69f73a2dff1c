//! Money type for representing monetary values.
//!
//! Uses integer amounts in the smallest currency unit to avoid
//! floating-point precision issues in monetary calculations. Menu prices
//! are quoted in whole rupees, so INR carries no decimal places here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Get the number of decimal places used for display.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::INR => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from the smallest currency unit.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Try to add another Money value.
    ///
    /// Returns None if currencies don't match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_add(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to sum an iterator of Money values.
    ///
    /// Returns None on currency mismatch or overflow.
    pub fn try_sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        let mut total = Money::zero(currency);
        for m in iter {
            total = total.try_add(m)?;
        }
        Some(total)
    }

    /// Convert to a decimal value for display.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "₹250").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_inr() {
        let m = Money::new(250, Currency::INR);
        assert_eq!(m.display(), "\u{20b9}250");
    }

    #[test]
    fn test_money_display_usd() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(250, Currency::INR);
        let b = Money::new(80, Currency::INR);
        assert_eq!(a.try_add(&b), Some(Money::new(330, Currency::INR)));
    }

    #[test]
    fn test_money_addition_currency_mismatch() {
        let inr = Money::new(250, Currency::INR);
        let usd = Money::new(250, Currency::USD);
        assert_eq!(inr.try_add(&usd), None);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(250, Currency::INR);
        assert_eq!(m.try_multiply(3), Some(Money::new(750, Currency::INR)));
    }

    #[test]
    fn test_money_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::INR);
        assert_eq!(m.try_multiply(2), None);
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::new(250, Currency::INR), Money::new(80, Currency::INR)];
        let total = Money::try_sum(values.iter(), Currency::INR);
        assert_eq!(total, Some(Money::new(330, Currency::INR)));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
