//! [`Query`] collection related to the multiple [`Property`]s.
//!
//! [`Property`]: crate::domain::Property

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::Property, Query};

use super::DatabaseQuery;

/// Queries [`Property`] search results matching a
/// [`read::property::search::Filter`], bounded by a limit.
pub type Search = DatabaseQuery<
    By<Vec<read::property::search::Listing>, read::property::search::Selector>,
>;
