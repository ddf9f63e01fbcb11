//! Exact money amounts using decimal arithmetic.
//!
//! Every price in the store is US dollars, so `Money` carries only the
//! amount. Arithmetic stays exact; rounding to cents happens only when the
//! value is formatted for display.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A dollar amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wrap a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Build an amount from whole cents (e.g. `29_999` is `$299.99`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // splitting a u64 into its two u32 halves
    pub const fn from_cents(cents: i64) -> Self {
        Self(Decimal::from_parts(
            cents.unsigned_abs() as u32,
            (cents.unsigned_abs() >> 32) as u32,
            0,
            cents < 0,
            2,
        ))
    }

    /// The exact, unrounded amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// `percent`% of this amount, kept exact (`20` gives one fifth).
    #[must_use]
    pub fn percent(self, percent: u32) -> Self {
        Self(self.0 * Decimal::from(percent) / Decimal::ONE_HUNDRED)
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Amount rounded half-away-from-zero to whole cents.
    #[must_use]
    pub fn rounded(self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = format!("{:.2}", self.rounded().abs());
        let (whole, cents) = rounded.split_once('.').unwrap_or((&rounded, "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if self.0.is_sign_negative() && !self.rounded().is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{sign}${grouped}.{cents}")
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(29_999).amount(), Decimal::new(29_999, 2));
        assert_eq!(Money::from_cents(-150).amount(), Decimal::new(-150, 2));
        assert_eq!(Money::from_cents(0), Money::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(29_999).to_string(), "$299.99");
        assert_eq!(Money::from_cents(1_500).to_string(), "$15.00");
        assert_eq!(Money::from_cents(124_993).to_string(), "$1,249.93");
        assert_eq!(Money::from_cents(2_478_000).to_string(), "$24,780.00");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
        assert_eq!(Money::from_cents(-600).to_string(), "-$6.00");
    }

    #[test]
    fn test_display_rounds_half_up() {
        // 10% tax on $299.99
        let tax = Money::from_cents(29_999).percent(10);
        assert_eq!(tax.amount(), Decimal::new(29_999, 3));
        assert_eq!(tax.to_string(), "$30.00");
        assert_eq!(Money::new(Decimal::new(1_005, 3)).to_string(), "$1.01");
    }

    #[test]
    fn test_percent_is_exact() {
        let subtotal = Money::from_cents(64_998);
        assert_eq!(subtotal.percent(20).amount(), Decimal::new(129_996, 3));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1_000);
        let b = Money::from_cents(250);
        assert_eq!(a + b, Money::from_cents(1_250));
        assert_eq!(a - b, Money::from_cents(750));
        assert_eq!(b * 3, Money::from_cents(750));
        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total, Money::from_cents(1_500));
    }
}
