//! [`Property`]-related read definitions.
//!
//! [`Property`]: crate::domain::Property

pub mod search {
    //! Filtered [`Property`] search definitions.
    //!
    //! [`Property`]: crate::domain::Property

    use common::{Limit, Money, Rating};

    use crate::domain::{property, user, Property};

    /// Filter for [`Selector`].
    ///
    /// Every present field constrains one search dimension; an absent field
    /// means no constraint on that dimension. Filters combine with logical
    /// AND.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// [`property::City`] (or its part) to search in.
        pub city: Option<property::City>,

        /// [`user::Id`] of the owner to search [`Property`]s of.
        ///
        /// [`Property`]: crate::domain::Property
        pub owner_id: Option<user::Id>,

        /// Minimum nightly cost, in cents.
        pub min_cost_per_night: Option<Money>,

        /// Maximum nightly cost, in cents.
        pub max_cost_per_night: Option<Money>,

        /// Minimum average [`Rating`] of reviews.
        pub min_rating: Option<Rating>,
    }

    /// Selector of [`Listing`]s.
    #[derive(Clone, Debug, Default)]
    pub struct Selector {
        /// [`Filter`] being applied to the result.
        pub filter: Filter,

        /// Maximum number of [`Listing`]s to return.
        pub limit: Limit,
    }

    /// Single [`Property`] search result.
    #[derive(Clone, Debug)]
    pub struct Listing {
        /// Matched [`Property`].
        pub property: Property,

        /// Average [`Rating`] of the [`Property`]'s reviews.
        pub average_rating: Rating,
    }
}
