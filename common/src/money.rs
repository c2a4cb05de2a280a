//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};

/// Amount of money in minor currency units (cents).
///
/// Stored as an integer count of the smallest currency denomination to avoid
/// floating-point rounding.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize)
)]
pub struct Money(i32);

impl Money {
    /// Creates a new [`Money`] if the given `cents` amount is not negative.
    #[must_use]
    pub fn new(cents: i32) -> Option<Self> {
        (cents >= 0).then_some(Self(cents))
    }

    /// Creates a new [`Money`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `cents` amount is not negative.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(cents: i32) -> Self {
        Self(cents)
    }

    /// Creates a new [`Money`] from the given amount of major currency units.
    ///
    /// [`None`] is returned if the amount is negative, is not a whole number
    /// of cents, or overflows.
    #[must_use]
    pub fn from_major(major: Decimal) -> Option<Self> {
        let cents = major.checked_mul(Decimal::ONE_HUNDRED)?;
        cents.is_integer().then(|| cents.to_i32()).flatten().and_then(Self::new)
    }

    /// Returns this [`Money`] amount in cents.
    #[must_use]
    pub const fn cents(self) -> i32 {
        self.0
    }

    /// Returns this [`Money`] amount in major currency units.
    #[must_use]
    pub fn major(self) -> Decimal {
        Decimal::new(self.0.into(), 2)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::from_major)
            .ok_or("invalid money amount")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Money;

    #[test]
    fn from_str() {
        assert_eq!(Money::from_str("50").unwrap().cents(), 5000);
        assert_eq!(Money::from_str("49.99").unwrap().cents(), 4999);
        assert_eq!(Money::from_str("0").unwrap().cents(), 0);
        assert_eq!(Money::from_str("0.01").unwrap().cents(), 1);

        assert!(Money::from_str("-3").is_err());
        assert!(Money::from_str("49.999").is_err());
        assert!(Money::from_str("not-a-number").is_err());
        assert!(Money::from_str("").is_err());
    }

    #[test]
    fn from_major() {
        assert_eq!(Money::from_major(Decimal::from(125)).unwrap().cents(), 12500);
        assert!(Money::from_major(Decimal::from(-1)).is_none());
    }

    #[test]
    fn to_string() {
        assert_eq!(Money::new(5000).unwrap().to_string(), "50.00");
        assert_eq!(Money::new(4999).unwrap().to_string(), "49.99");
        assert_eq!(Money::new(5).unwrap().to_string(), "0.05");
    }

    #[test]
    fn major() {
        assert_eq!(Money::new(4999).unwrap().major(), Decimal::new(4999, 2));
    }
}
