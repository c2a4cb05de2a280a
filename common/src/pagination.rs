//! Abstractions for pagination.

use std::str::FromStr;

use derive_more::{Display, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use smart_default::SmartDefault;

/// Maximum number of rows a query is allowed to return.
///
/// Always positive, `10` if not specified.
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Into, PartialEq, SmartDefault,
)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Limit(#[default(10)] i32);

impl Limit {
    /// Creates a new [`Limit`] if the given `value` is positive.
    #[must_use]
    pub fn new(value: i32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Creates a new [`Limit`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `value` is positive.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(value: i32) -> Self {
        Self(value)
    }

    /// Returns this [`Limit`] as an [`i32`].
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for Limit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().ok().and_then(Self::new).ok_or("invalid limit value")
    }
}

#[cfg(test)]
mod spec {
    use super::Limit;

    #[test]
    fn defaults_to_ten() {
        assert_eq!(Limit::default().get(), 10);
    }

    #[test]
    fn requires_positive_value() {
        assert_eq!(Limit::new(1).map(Limit::get), Some(1));
        assert!(Limit::new(0).is_none());
        assert!(Limit::new(-5).is_none());
    }
}
