//! [`Reservation`]-related [`Database`] implementations.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::Reservation,
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

impl<C>
    Database<
        Select<By<Vec<Reservation>, read::reservation::list::Selector>>,
    > for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Reservation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Vec<Reservation>, read::reservation::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let read::reservation::list::Selector { guest_id, limit } =
            by.into_inner();

        const SQL: &str = "\
            SELECT id, guest_id, property_id, start_date, end_date \
            FROM reservations \
            WHERE guest_id = $1::INT4 \
            ORDER BY start_date \
            LIMIT $2::INT4";
        Ok(self
            .query(SQL, &[&guest_id, &limit])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| Reservation {
                id: row.get("id"),
                guest_id: row.get("guest_id"),
                property_id: row.get("property_id"),
                start_date: row.get("start_date"),
                end_date: row.get("end_date"),
            })
            .collect())
    }
}
