//! [`Property`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select};
use tokio_postgres::Row;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{property, Property},
    infra::{
        database::{
            self,
            postgres::{search::Plan, Connection},
            Postgres,
        },
        Database,
    },
    read,
};

impl<C> Database<Insert<property::New>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Property;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(property): Insert<property::New>,
    ) -> Result<Self::Ok, Self::Err> {
        let property::New {
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
        } = property;

        let parking_spaces = i32::from(parking_spaces);
        let num_bathrooms = i32::from(num_bathrooms);
        let num_bedrooms = i32::from(num_bedrooms);

        const SQL: &str = "\
            INSERT INTO properties (\
                owner_id, title, description, \
                thumbnail_photo_url, cover_photo_url, \
                cost_per_night, \
                street, city, province, post_code, country, \
                parking_spaces, number_of_bathrooms, number_of_bedrooms, \
                active\
            ) \
            VALUES (\
                $1::INT4, \
                $2::VARCHAR, $3::VARCHAR, \
                $4::VARCHAR, $5::VARCHAR, \
                $6::INT4, \
                $7::VARCHAR, $8::VARCHAR, $9::VARCHAR, \
                $10::VARCHAR, $11::VARCHAR, \
                $12::INT4, $13::INT4, $14::INT4, \
                TRUE\
            ) \
            RETURNING id, owner_id, title, description, \
                      thumbnail_photo_url, cover_photo_url, cost_per_night, \
                      street, city, province, post_code, country, \
                      parking_spaces, number_of_bathrooms, \
                      number_of_bedrooms, active";
        self.query_opt(
            SQL,
            &[
                &owner_id,
                &title,
                &description,
                &thumbnail_photo_url,
                &cover_photo_url,
                &cost_per_night,
                &street,
                &city,
                &province,
                &post_code,
                &country,
                &parking_spaces,
                &num_bathrooms,
                &num_bedrooms,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(|row| decode(&row.expect("`RETURNING` row always exists")))
    }
}

impl<C>
    Database<
        Select<
            By<
                Vec<read::property::search::Listing>,
                read::property::search::Selector,
            >,
        >,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<read::property::search::Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<
                Vec<read::property::search::Listing>,
                read::property::search::Selector,
            >,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();

        let plan = Plan::new(&selector);
        log::debug!("executing property search: {plan:?}");

        Ok(self
            .query(plan.sql(), &plan.params())
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| read::property::search::Listing {
                property: decode(&row),
                average_rating: row.get("average_rating"),
            })
            .collect())
    }
}

/// Decodes a [`Property`] out of the provided [`Row`].
fn decode(row: &Row) -> Property {
    Property {
        id: row.get("id"),
        owner_id: row.get("owner_id"),
        title: row.get("title"),
        description: row.get("description"),
        thumbnail_photo_url: row.get("thumbnail_photo_url"),
        cover_photo_url: row.get("cover_photo_url"),
        cost_per_night: row.get("cost_per_night"),
        street: row.get("street"),
        city: row.get("city"),
        province: row.get("province"),
        post_code: row.get("post_code"),
        country: row.get("country"),
        parking_spaces: u16::try_from(row.get::<_, i32>("parking_spaces"))
            .expect("`parking_spaces` fits into `u16`"),
        num_bathrooms: u16::try_from(row.get::<_, i32>("number_of_bathrooms"))
            .expect("`number_of_bathrooms` fits into `u16`"),
        num_bedrooms: u16::try_from(row.get::<_, i32>("number_of_bedrooms"))
            .expect("`number_of_bedrooms` fits into `u16`"),
        active: row.get("active"),
    }
}
