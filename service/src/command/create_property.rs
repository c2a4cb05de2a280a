//! [`Command`] for creating a new [`Property`].

use common::{
    operations::Insert,
    Money,
};
use tracerr::Traced;

#[cfg(doc)]
use crate::domain::property::{
    City, Country, Description, NumBathrooms, NumBedrooms, ParkingSpaces,
    PhotoUrl, PostCode, Province, Street, Title,
};
use crate::{
    domain::{property, user, Property},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Property`].
#[derive(Clone, Debug)]
pub struct CreateProperty {
    /// [`user::Id`] of the owner of a new [`Property`].
    pub owner_id: user::Id,

    /// [`Title`] of a new [`Property`].
    pub title: property::Title,

    /// [`Description`] of a new [`Property`].
    pub description: property::Description,

    /// [`PhotoUrl`] of a new [`Property`]'s thumbnail photo.
    pub thumbnail_photo_url: property::PhotoUrl,

    /// [`PhotoUrl`] of a new [`Property`]'s cover photo.
    pub cover_photo_url: property::PhotoUrl,

    /// Nightly cost of a new [`Property`], in cents.
    pub cost_per_night: Money,

    /// [`Street`] of a new [`Property`].
    pub street: property::Street,

    /// [`City`] of a new [`Property`].
    pub city: property::City,

    /// [`Province`] of a new [`Property`].
    pub province: property::Province,

    /// [`PostCode`] of a new [`Property`].
    pub post_code: property::PostCode,

    /// [`Country`] of a new [`Property`].
    pub country: property::Country,

    /// [`ParkingSpaces`] of a new [`Property`].
    pub parking_spaces: property::ParkingSpaces,

    /// [`NumBathrooms`] of a new [`Property`].
    pub num_bathrooms: property::NumBathrooms,

    /// [`NumBedrooms`] of a new [`Property`].
    pub num_bedrooms: property::NumBedrooms,
}

impl<Db> Command<CreateProperty> for Service<Db>
where
    Db: Database<
        Insert<property::New>,
        Ok = Property,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Property;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateProperty,
    ) -> Result<Self::Ok, Self::Err> {
        let CreateProperty {
            owner_id,
            title,
            description,
            thumbnail_photo_url,
            cover_photo_url,
            cost_per_night,
            street,
            city,
            province,
            post_code,
            country,
            parking_spaces,
            num_bathrooms,
            num_bedrooms,
        } = cmd;

        let new = property::New {
            owner_id,
            title,
            description,
            thumbnail_photo_url,
            cover_photo_url,
            cost_per_night,
            street,
            city,
            province,
            post_code,
            country,
            parking_spaces,
            num_bathrooms,
            num_bedrooms,
        };

        self.database()
            .execute(Insert(new))
            .await
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`CreateProperty`] [`Command`] execution.
pub type ExecutionError = database::Error;
