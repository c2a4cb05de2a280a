//! [`Query`] collection related to the multiple [`Reservation`]s.

use common::operations::By;

use crate::domain::Reservation;
#[cfg(doc)]
use crate::Query;
use crate::read;

use super::DatabaseQuery;

/// Queries [`Reservation`]s of a single guest, bounded by a limit.
pub type ForGuest =
    DatabaseQuery<By<Vec<Reservation>, read::reservation::list::Selector>>;
