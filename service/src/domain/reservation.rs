//! [`Reservation`] definitions.

#[cfg(doc)]
use common::Date;
use common::{unit, DateOf};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};

use super::{property, user};

/// Stay of a guest at a [`Property`].
///
/// [`Property`]: super::Property
#[derive(Clone, Copy, Debug)]
pub struct Reservation {
    /// ID of this [`Reservation`].
    pub id: Id,

    /// ID of the [`User`] staying.
    ///
    /// [`User`]: super::User
    pub guest_id: user::Id,

    /// ID of the reserved [`Property`].
    ///
    /// [`Property`]: super::Property
    pub property_id: property::Id,

    /// [`Date`] the stay begins on.
    pub start_date: StartDate,

    /// [`Date`] the stay ends on.
    pub end_date: EndDate,
}

/// ID of a [`Reservation`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(i32);

/// [`Date`] a [`Reservation`] begins on.
pub type StartDate = DateOf<(Reservation, unit::Start)>;

/// [`Date`] a [`Reservation`] ends on.
pub type EndDate = DateOf<(Reservation, unit::End)>;
