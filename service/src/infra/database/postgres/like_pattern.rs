//! [`LikePattern`] definition.

use derive_more::Display;
use postgres_types::{FromSql, ToSql};

/// SQL `LIKE` pattern matching a substring anywhere in a column.
///
/// The input is taken literally: `LIKE` metacharacters occurring in it are
/// escaped before wrapping it into `%` wildcards.
#[derive(Clone, Debug, Display, Eq, FromSql, PartialEq, ToSql)]
#[postgres(transparent)]
pub struct LikePattern(String);

impl LikePattern {
    /// Creates a new [`LikePattern`] out of the given `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self(format!(
            "%{}%",
            input
                .replace('\\', r"\\")
                .replace('%', r"\%")
                .replace('_', r"\_"),
        ))
    }
}

#[cfg(test)]
mod spec {
    use super::LikePattern;

    #[test]
    fn wraps_into_wildcards() {
        assert_eq!(LikePattern::new("van").to_string(), "%van%");
    }

    #[test]
    fn escapes_metacharacters() {
        assert_eq!(
            LikePattern::new(r"50%_off\now").to_string(),
            r"%50\%\_off\\now%",
        );
    }
}
