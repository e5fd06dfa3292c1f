use std::iter::Sum;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Fixed-point currency amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: impl Into<Decimal>) -> Self {
        Self(amount.into())
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn times(&self, count: i64) -> Self {
        Self(self.0 * Decimal::from(count))
    }

    /// Whether the amount fits a fixed-point column of `precision` digits, `scale` of them decimal.
    pub fn fits(&self, precision: u32, scale: u32) -> bool {
        let limit = Decimal::from(10_i64.pow(precision - scale));
        self.0.normalize().scale() <= scale && self.0.abs() < limit
    }

    /// Amount in cents, rounded half-away-from-zero to two places.
    pub fn to_minor_units(&self) -> Option<i64> {
        use rust_decimal::prelude::ToPrimitive;
        (self.0.round_dp(2) * Decimal::ONE_HUNDRED).to_i64()
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|money| money.0).sum())
    }
}
