use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Currency, EngineError};

/// Signed money amount backed by an exact [`Decimal`].
///
/// Use this type for **all** monetary values in the engine (expense amounts,
/// thresholds, budgets, tax estimates) to avoid floating-point drift. There is
/// no fixed number of fractional digits: `12.345` stays `12.345`.
///
/// Arithmetic is checked only; totals over many amounts go through
/// [`Money::checked_sum`] so an out-of-range result is reported, never wrapped.
///
/// # Examples
///
/// ```rust
/// use engine::{Currency, Money};
///
/// let amount = Money::from_cents(12_34);
/// assert_eq!(amount.to_string(), "12.34");
/// assert_eq!(amount.format(Currency::Usd), "$12.34");
/// ```
///
/// Parsing is culture invariant: `.` is the only decimal separator.
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10.5".parse::<Money>().unwrap(), Money::from_cents(1050));
/// assert_eq!("12.345".parse::<Money>().unwrap().to_string(), "12.345");
/// assert!("10,50".parse::<Money>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates an amount from integer cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Creates an amount from whole currency units.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns `true` if the amount is strictly above zero.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `true` if the amount is strictly below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Checked subtraction (returns `None` on overflow).
    #[must_use]
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// Adds every amount, returning `None` if the total leaves the `Decimal` range.
    #[must_use]
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts.into_iter().try_fold(Money::ZERO, Money::checked_add)
    }

    /// Applies a whole-number percentage without rounding.
    ///
    /// Returns `None` if the product is out of range.
    #[must_use]
    pub fn percent(self, rate: u32) -> Option<Money> {
        Decimal::from(rate)
            .checked_div(Decimal::ONE_HUNDRED)
            .and_then(|factor| self.0.checked_mul(factor))
            .map(Money)
    }

    /// Formats the amount with the currency symbol, e.g. `$12.34` or `12.34€`.
    #[must_use]
    pub fn format(self, currency: Currency) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let plain = self.abs();
        if currency.symbol_leads() {
            format!("{sign}{}{plain}", currency.symbol())
        } else {
            format!("{sign}{plain}{}", currency.symbol())
        }
    }
}

impl fmt::Display for Money {
    /// Prints at least two fractional digits and no trailing zeros beyond them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0.normalize();
        if value.scale() < 2 {
            value.rescale(2);
        }
        write!(f, "{value}")
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a decimal string.
    ///
    /// Accepts `.` as decimal separator and an optional leading `+`/`-`.
    ///
    /// Validation rules:
    /// - digits only around a single `.`; `,`, `_`, exponents and symbols are rejected
    /// - the value must fit a `Decimal` exactly (at most 28 fractional digits)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount("invalid amount".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        if rest.is_empty() {
            return Err(empty());
        }

        let (units, fraction) = rest.split_once('.').unwrap_or((rest, ""));

        // ".5" and "5." are accepted, a bare "." is not.
        if units.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !units.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units = if units.is_empty() { "0" } else { units };
        let fraction = if fraction.is_empty() { "0" } else { fraction };
        let value = Decimal::from_str_exact(&format!("{units}.{fraction}"))
            .map_err(|err| EngineError::InvalidAmount(format!("amount out of range: {err}")))?;

        Ok(Money(if negative { -value } else { value }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_two_digits_at_least() {
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(1).to_string(), "0.01");
        assert_eq!(Money::from_cents(10).to_string(), "0.10");
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_units(120).to_string(), "120.00");
        assert_eq!("12.345".parse::<Money>().unwrap().to_string(), "12.345");
        assert_eq!("1.2000".parse::<Money>().unwrap().to_string(), "1.20");
    }

    #[test]
    fn format_places_symbol() {
        assert_eq!(Money::from_cents(2550).format(Currency::Usd), "$25.50");
        assert_eq!(Money::from_cents(2550).format(Currency::Eur), "25.50€");
        assert_eq!(Money::from_cents(-550).format(Currency::Usd), "-$5.50");
    }

    #[test]
    fn parse_accepts_dot_only() {
        assert_eq!("10".parse::<Money>().unwrap(), Money::from_cents(1000));
        assert_eq!("10.5".parse::<Money>().unwrap(), Money::from_cents(1050));
        assert_eq!("5.".parse::<Money>().unwrap(), Money::from_cents(500));
        assert_eq!(".5".parse::<Money>().unwrap(), Money::from_cents(50));
        assert_eq!("-0.01".parse::<Money>().unwrap(), Money::from_cents(-1));
        assert_eq!("+1.00".parse::<Money>().unwrap(), Money::from_cents(100));
        assert_eq!("  2.30 ".parse::<Money>().unwrap(), Money::from_cents(230));
        assert!("10,50".parse::<Money>().is_err());
        assert!("1_000".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
    }

    #[test]
    fn parse_keeps_every_decimal() {
        assert_eq!(
            "12.345".parse::<Money>().unwrap(),
            Money::new(Decimal::new(12345, 3))
        );
        assert_eq!(
            "0.001".parse::<Money>().unwrap(),
            Money::new(Decimal::new(1, 3))
        );
    }

    #[test]
    fn parse_rejects_values_outside_decimal_range() {
        assert!("100000000000000000000000000000".parse::<Money>().is_err());
    }

    #[test]
    fn percent_is_exact() {
        assert_eq!(
            Money::from_cents(20550).percent(10),
            Some(Money::from_cents(2055))
        );
        assert_eq!(
            "12.345".parse::<Money>().unwrap().percent(10),
            Some(Money::new(Decimal::new(12345, 4)))
        );
    }

    #[test]
    fn percent_reports_overflow() {
        let huge = "70000000000000000000000000000".parse::<Money>().unwrap();
        assert_eq!(huge.percent(200), None);
    }

    #[test]
    fn checked_sum_reports_overflow() {
        let amounts = [Money::from_cents(100), Money::from_cents(250)];
        assert_eq!(Money::checked_sum(amounts), Some(Money::from_cents(350)));
        assert_eq!(Money::checked_sum([]), Some(Money::ZERO));

        let huge = "50000000000000000000000000000".parse::<Money>().unwrap();
        assert_eq!(Money::checked_sum([huge, huge]), None);
    }
}
