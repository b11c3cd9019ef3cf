//! Money type with decimal precision, denominated in Brazilian reais.
//!
//! Amounts stay in `rust_decimal::Decimal` end to end. The only place a
//! float appears is [`Money::to_f64`], used when a spreadsheet cell needs a
//! native number.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

/// Currency prefix used in rendered amounts.
pub const BRL_PREFIX: &str = "R$ ";

/// A monetary amount in BRL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Creates a new amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the inner decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Returns the amount rounded half-away-from-zero to centavos.
    #[must_use]
    pub fn to_cents_precision(self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Converts to a float for spreadsheet cells.
    ///
    /// Returns `0.0` for amounts that cannot be represented.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.to_cents_precision().to_f64().unwrap_or_default()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// Renders as `R$ ` followed by the amount with exactly two decimals,
/// e.g. `R$ 1250.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{BRL_PREFIX}{:.2}", self.to_cents_precision())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(150), "R$ 150.00")]
    #[case(dec!(89.9), "R$ 89.90")]
    #[case(dec!(0.005), "R$ 0.01")]
    #[case(dec!(1234.567), "R$ 1234.57")]
    #[case(dec!(0), "R$ 0.00")]
    fn test_money_display(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(Money::new(amount).to_string(), expected);
    }

    #[test]
    fn test_money_to_f64() {
        let money = Money::new(dec!(199.90));
        assert!((money.to_f64() - 199.9).abs() < f64::EPSILON);
    }
}
