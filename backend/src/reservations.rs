use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use log::{debug, error};

use crate::error::Result;
use crate::models::ReservationListing;

const RESERVATIONS_FOR_GUEST: &str = "\
SELECT reservations.id AS reservation_id, reservations.start_date, reservations.end_date,
  reservations.guest_id, properties.*, AVG(property_reviews.rating)::float8 AS average_rating
FROM reservations
JOIN properties ON reservations.property_id = properties.id
JOIN property_reviews ON properties.id = property_reviews.property_id
WHERE reservations.guest_id = $1
GROUP BY properties.id, reservations.id
ORDER BY reservations.start_date
LIMIT $2";

/// Lists a guest's reservations with each reserved property and its average rating.
pub fn get_all_reservations(
    conn: &mut PgConnection,
    guest_id: i32,
    limit: i64,
) -> Result<Vec<ReservationListing>> {
    debug!("Fetching up to {} reservations for guest {}", limit, guest_id);
    diesel::sql_query(RESERVATIONS_FOR_GUEST)
        .bind::<Integer, _>(guest_id)
        .bind::<BigInt, _>(limit)
        .load(conn)
        .map_err(|e| {
            error!("Failed to fetch reservations for guest {}: {}", guest_id, e);
            e.into()
        })
}
