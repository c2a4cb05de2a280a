//! [`Rating`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use rust_decimal::Decimal;

/// Review rating on the `0` to `5` scale.
///
/// Fractional values are allowed, since an average of several reviews is a
/// [`Rating`] too.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Rating(Decimal);

impl Rating {
    /// Maximum value of a [`Rating`].
    pub const MAX: i64 = 5;

    /// Creates a new [`Rating`] by checking the provided value is between
    /// `0` and `5`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::from(Self::MAX) {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "TODO: Remove once clippy is fixed"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(val) })
        }
    }

    /// Creates a new [`Rating`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must be between `0` and `5`.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }
}

impl FromStr for Rating {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid rating value")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Rating;

    #[test]
    fn from_str() {
        assert!(Rating::from_str("0").is_ok());
        assert!(Rating::from_str("4").is_ok());
        assert!(Rating::from_str("4.5").is_ok());
        assert!(Rating::from_str("5").is_ok());

        assert!(Rating::from_str("5.1").is_err());
        assert!(Rating::from_str("-1").is_err());
        assert!(Rating::from_str("five").is_err());
    }

    #[test]
    fn new() {
        assert!(Rating::new(Decimal::new(35, 1)).is_some());
        assert!(Rating::new(Decimal::from(6)).is_none());
    }
}
