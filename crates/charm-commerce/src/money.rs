//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation (haléře for CZK) to avoid
//! floating-point precision issues in monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    CZK,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "CZK").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::CZK => "CZK",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "Kč").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::CZK => "Kč",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of minor-unit decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::CZK => 2,
            Currency::EUR => 2,
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
/// Amounts are stored in the smallest unit of the currency (haléře for
/// CZK), so whole-crown prices like 59 Kč are stored as 5900.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a CZK value from whole crowns.
    ///
    /// ```
    /// use charm_commerce::money::Money;
    /// let price = Money::from_crowns(59);
    /// assert_eq!(price.amount_minor, 5900);
    /// ```
    pub fn from_crowns(crowns: i64) -> Self {
        Self::new(crowns.saturating_mul(100), Currency::CZK)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Convert to a decimal value in major units.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format as a Czech-style display string (e.g., "59 Kč").
    ///
    /// Whole amounts drop the decimal part; fractional amounts use a
    /// decimal comma ("59,50 Kč").
    pub fn display(&self) -> String {
        let minor = 10_i64.pow(self.currency.decimal_places());
        if self.amount_minor % minor == 0 {
            format!("{} {}", self.amount_minor / minor, self.currency.symbol())
        } else {
            let whole = self.amount_minor / minor;
            let frac = (self.amount_minor % minor).abs();
            format!("{},{:02} {}", whole, frac, self.currency.symbol())
        }
    }

    /// Try to add another Money value, returning None if currencies differ.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_minor.saturating_add(other.amount_minor),
            self.currency,
        ))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_minor.saturating_sub(other.amount_minor),
            self.currency,
        ))
    }

    /// Multiply by a scalar, saturating on overflow.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_minor.saturating_mul(factor), self.currency)
    }

    /// Sum an iterator of Money values, saturating on overflow.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| {
            acc.try_add(m).unwrap_or(acc)
        })
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("Currency mismatch in addition")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match.
    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .expect("Currency mismatch in subtraction")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.saturating_multiply(factor)
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
    fn test_money_from_crowns() {
        let m = Money::from_crowns(59);
        assert_eq!(m.amount_minor, 5900);
        assert_eq!(m.currency, Currency::CZK);
    }

    #[test]
    fn test_money_display_whole() {
        let m = Money::from_crowns(118);
        assert_eq!(m.display(), "118 Kč");
    }

    #[test]
    fn test_money_display_fractional() {
        let m = Money::new(5950, Currency::CZK);
        assert_eq!(m.display(), "59,50 Kč");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::from_crowns(118);
        let b = Money::from_crowns(59);
        assert_eq!(a + b, Money::from_crowns(177));
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::from_crowns(1000);
        let b = Money::from_crowns(177);
        assert_eq!(a - b, Money::from_crowns(823));
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::from_crowns(59);
        assert_eq!(m * 2, Money::from_crowns(118));
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::from_crowns(118), Money::from_crowns(59)];
        let total = Money::sum(values.iter(), Currency::CZK);
        assert_eq!(total, Money::from_crowns(177));
    }

    #[test]
    fn test_saturating_multiply() {
        let m = Money::new(i64::MAX, Currency::CZK);
        assert_eq!(m.saturating_multiply(2).amount_minor, i64::MAX);
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch() {
        let czk = Money::from_crowns(100);
        let eur = Money::new(100, Currency::EUR);
        let _ = czk + eur;
    }
}
