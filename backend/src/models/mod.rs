use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::{Date, Double, Integer, Nullable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Sign-up payload. The password is stored as given; hashing belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Queryable, Selectable, QueryableByName)]
#[diesel(table_name = crate::schema::properties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32, // cents
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// The fourteen caller-supplied columns of a new listing.
#[derive(Debug, Clone, Serialize, Deserialize, Insertable)]
#[diesel(table_name = crate::schema::properties)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// A property row plus the mean of its review ratings.
#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName)]
pub struct PropertyListing {
    #[diesel(embed)]
    #[serde(flatten)]
    pub property: Property,
    #[diesel(sql_type = Nullable<Double>)]
    pub average_rating: Option<f64>,
}

/// One of a guest's reservations with the reserved property.
#[derive(Debug, Clone, PartialEq, Serialize, QueryableByName)]
pub struct ReservationListing {
    #[diesel(sql_type = Integer)]
    pub reservation_id: i32,
    #[diesel(sql_type = Date)]
    pub start_date: NaiveDate,
    #[diesel(sql_type = Date)]
    pub end_date: NaiveDate,
    #[diesel(sql_type = Integer)]
    pub guest_id: i32,
    #[diesel(embed)]
    #[serde(flatten)]
    pub property: Property,
    #[diesel(sql_type = Nullable<Double>)]
    pub average_rating: Option<f64>,
}
