//! Dynamic SQL planning of a property search.

use common::{Money, Rating};
use itertools::Itertools as _;
use postgres_types::ToSql;

use crate::{
    domain::user,
    read::property::search::{Filter, Selector},
};

use super::LikePattern;

/// Columns returned by every search [`Plan`].
const COLUMNS: &str = "\
    properties.id, properties.owner_id, \
    properties.title, properties.description, \
    properties.thumbnail_photo_url, properties.cover_photo_url, \
    properties.cost_per_night, \
    properties.street, properties.city, properties.province, \
    properties.post_code, properties.country, \
    properties.parking_spaces, properties.number_of_bathrooms, \
    properties.number_of_bedrooms, properties.active, \
    AVG(property_reviews.rating) AS average_rating";

/// SQL statement of a property search, along with its bind [`Argument`]s.
///
/// Placeholder numbers follow the order the [`Filter`] fields are declared in,
/// skipping absent ones, with the row limit always bound last.
#[derive(Debug)]
pub(crate) struct Plan {
    /// Assembled SQL text.
    sql: String,

    /// Bind [`Argument`]s, ordered by placeholder number.
    arguments: Vec<Argument>,
}

impl Plan {
    /// Assembles a new [`Plan`] out of the provided [`Selector`].
    #[must_use]
    pub(crate) fn new(selector: &Selector) -> Self {
        let Selector { filter, limit } = selector;
        let Filter {
            city,
            owner_id,
            min_cost_per_night,
            max_cost_per_night,
            min_rating,
        } = filter;

        let mut arguments = Vec::with_capacity(6);
        let mut predicates = Vec::with_capacity(4);

        if let Some(city) = city {
            arguments.push(Argument::City(LikePattern::new(city.as_ref())));
            predicates.push(format!(
                "properties.city LIKE ${}::VARCHAR",
                arguments.len(),
            ));
        }
        if let Some(owner_id) = owner_id {
            arguments.push(Argument::Owner(*owner_id));
            predicates.push(format!(
                "properties.owner_id = ${}::INT4",
                arguments.len(),
            ));
        }
        if let Some(min) = min_cost_per_night {
            arguments.push(Argument::Cost(*min));
            predicates.push(format!(
                "properties.cost_per_night >= ${}::INT4",
                arguments.len(),
            ));
        }
        if let Some(max) = max_cost_per_night {
            arguments.push(Argument::Cost(*max));
            predicates.push(format!(
                "properties.cost_per_night <= ${}::INT4",
                arguments.len(),
            ));
        }

        // An aggregate cannot be constrained in `WHERE`, so the rating filter
        // lands in `HAVING` after the grouping.
        let having = min_rating.map(|rating| {
            arguments.push(Argument::Rating(rating));
            format!(
                "HAVING AVG(property_reviews.rating) >= ${}::NUMERIC ",
                arguments.len(),
            )
        });

        arguments.push(Argument::Limit(limit.get()));

        let sql = format!(
            "SELECT {COLUMNS} \
             FROM properties \
             JOIN property_reviews \
               ON property_reviews.property_id = properties.id \
             {predicates}\
             GROUP BY properties.id \
             {having}\
             ORDER BY properties.cost_per_night \
             LIMIT ${limit_num}::INT4",
            predicates = if predicates.is_empty() {
                String::new()
            } else {
                format!("WHERE {} ", predicates.iter().format(" AND "))
            },
            having = having.as_deref().unwrap_or_default(),
            limit_num = arguments.len(),
        );

        Self { sql, arguments }
    }

    /// Returns the SQL text of this [`Plan`].
    #[must_use]
    pub(crate) fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the bind parameters of this [`Plan`], ordered by placeholder
    /// number.
    #[must_use]
    pub(crate) fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.arguments
            .iter()
            .map(|arg| -> &(dyn ToSql + Sync) {
                match arg {
                    Argument::City(v) => v,
                    Argument::Owner(v) => v,
                    Argument::Cost(v) => v,
                    Argument::Rating(v) => v,
                    Argument::Limit(v) => v,
                }
            })
            .collect()
    }
}

/// Single bind argument of a [`Plan`].
#[derive(Debug, PartialEq)]
pub(crate) enum Argument {
    /// [`LikePattern`] matching a city name.
    City(LikePattern),

    /// [`user::Id`] of a property owner.
    Owner(user::Id),

    /// Nightly cost bound, in cents.
    Cost(Money),

    /// Average [`Rating`] bound.
    Rating(Rating),

    /// Maximum number of rows to return.
    Limit(i32),
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{Limit, Money, Rating};

    use crate::{
        domain::{property, user},
        infra::database::postgres::LikePattern,
        read::property::search::{Filter, Selector},
    };

    use super::{Argument, Plan};

    #[test]
    fn empty_filter_binds_limit_only() {
        let plan = Plan::new(&Selector::default());

        assert!(!plan.sql.contains("WHERE"));
        assert!(!plan.sql.contains("HAVING"));
        assert!(plan.sql.ends_with("LIMIT $1::INT4"));
        assert_eq!(plan.arguments, vec![Argument::Limit(10)]);
        assert_eq!(plan.params().len(), 1);
    }

    #[test]
    fn city_matches_as_substring() {
        let plan = Plan::new(&Selector {
            filter: Filter {
                city: Some(property::City::new("van").unwrap()),
                ..Filter::default()
            },
            limit: Limit::default(),
        });

        assert!(plan
            .sql
            .contains("WHERE properties.city LIKE $1::VARCHAR "));
        assert_eq!(
            plan.arguments,
            vec![
                Argument::City(LikePattern::new("van")),
                Argument::Limit(10),
            ],
        );
    }

    #[test]
    fn predicates_join_with_and() {
        let plan = Plan::new(&Selector {
            filter: Filter {
                owner_id: Some(user::Id::from(3)),
                min_cost_per_night: Some(Money::from_str("50").unwrap()),
                ..Filter::default()
            },
            limit: Limit::default(),
        });

        assert!(plan.sql.contains(
            "WHERE properties.owner_id = $1::INT4 \
             AND properties.cost_per_night >= $2::INT4 ",
        ));
        assert_eq!(
            plan.arguments,
            vec![
                Argument::Owner(user::Id::from(3)),
                Argument::Cost(Money::from_str("50").unwrap()),
                Argument::Limit(10),
            ],
        );
    }

    #[test]
    fn max_cost_is_inclusive() {
        let plan = Plan::new(&Selector {
            filter: Filter {
                max_cost_per_night: Some(Money::from_str("120").unwrap()),
                ..Filter::default()
            },
            limit: Limit::default(),
        });

        assert!(plan
            .sql
            .contains("properties.cost_per_night <= $1::INT4"));
    }

    #[test]
    fn rating_lands_in_having() {
        let plan = Plan::new(&Selector {
            filter: Filter {
                min_rating: Some(Rating::from_str("4").unwrap()),
                ..Filter::default()
            },
            limit: Limit::default(),
        });

        assert!(!plan.sql.contains("WHERE"));
        assert!(plan.sql.contains(
            "GROUP BY properties.id \
             HAVING AVG(property_reviews.rating) >= $1::NUMERIC ",
        ));
        assert!(plan.sql.ends_with("LIMIT $2::INT4"));
    }

    #[test]
    fn full_filter_numbers_placeholders_in_declaration_order() {
        let plan = Plan::new(&Selector {
            filter: Filter {
                city: Some(property::City::new("Vancouver").unwrap()),
                owner_id: Some(user::Id::from(7)),
                min_cost_per_night: Some(Money::from_str("49.99").unwrap()),
                max_cost_per_night: Some(Money::from_str("120").unwrap()),
                min_rating: Some(Rating::from_str("3.5").unwrap()),
            },
            limit: Limit::new(25).unwrap(),
        });

        assert!(plan.sql.contains(
            "WHERE properties.city LIKE $1::VARCHAR \
             AND properties.owner_id = $2::INT4 \
             AND properties.cost_per_night >= $3::INT4 \
             AND properties.cost_per_night <= $4::INT4 ",
        ));
        assert!(plan
            .sql
            .contains("HAVING AVG(property_reviews.rating) >= $5::NUMERIC "));
        assert!(plan.sql.ends_with("LIMIT $6::INT4"));
        assert_eq!(
            plan.arguments,
            vec![
                Argument::City(LikePattern::new("Vancouver")),
                Argument::Owner(user::Id::from(7)),
                Argument::Cost(Money::from_str("49.99").unwrap()),
                Argument::Cost(Money::from_str("120").unwrap()),
                Argument::Rating(Rating::from_str("3.5").unwrap()),
                Argument::Limit(25),
            ],
        );
    }
}
