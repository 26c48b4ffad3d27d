#![allow(dead_code)]

use chrono::NaiveDate;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use lightbnb::models::{NewProperty, NewUser, Property, User};
use lightbnb::schema::{property_reviews, reservations};
use lightbnb::{properties, users};

const DROP_TABLES: &str = include_str!("../../migrations/2021-03-01-000000_create_lightbnb_tables/down.sql");
const CREATE_TABLES: &str = include_str!("../../migrations/2021-03-01-000000_create_lightbnb_tables/up.sql");

pub fn test_url() -> Option<String> {
    match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => Some(url),
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set, skipping database test");
            None
        }
    }
}

/// Starts a test transaction and recreates the tables inside it, so
/// everything is rolled back when the connection closes.
pub fn reset_schema(conn: &mut PgConnection) -> QueryResult<()> {
    conn.begin_test_transaction()?;
    conn.batch_execute(DROP_TABLES)?;
    conn.batch_execute(CREATE_TABLES)
}

/// Opens a connection with a fresh schema.
/// Returns `None` when no test database is configured.
pub fn connection() -> Option<PgConnection> {
    let url = test_url()?;
    let mut conn = PgConnection::establish(&url).expect("Failed to connect to test database");
    reset_schema(&mut conn).expect("Failed to reset schema");
    Some(conn)
}

pub struct Fixture {
    pub owner: User,
    pub guest: User,
    pub vancouver: Property,
    pub north_vancouver: Property,
    pub west_vancouver: Property,
    pub toronto: Property,
    pub calgary: Property,
    pub unreviewed: Property,
}

pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
    }
}

pub fn new_property(owner_id: i32, title: &str, city: &str, cost_per_night: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: title.to_string(),
        description: "description".to_string(),
        thumbnail_photo_url: "https://images.example.com/thumb.jpg".to_string(),
        cover_photo_url: "https://images.example.com/cover.jpg".to_string(),
        cost_per_night,
        street: "536 Namsub Highway".to_string(),
        city: city.to_string(),
        province: "Quebec".to_string(),
        post_code: "28142".to_string(),
        country: "Canada".to_string(),
        parking_spaces: 6,
        number_of_bathrooms: 4,
        number_of_bedrooms: 8,
    }
}

/// Records a stay by `guest` and a review of it. Each stay starts one week
/// after the previous one so reservation order is predictable.
pub fn review(conn: &mut PgConnection, guest_id: i32, property_id: i32, rating: i16, week: u32) {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + chrono::Duration::weeks(week as i64);
    let reservation_id: i32 = diesel::insert_into(reservations::table)
        .values((
            reservations::start_date.eq(start),
            reservations::end_date.eq(start + chrono::Duration::days(3)),
            reservations::property_id.eq(property_id),
            reservations::guest_id.eq(guest_id),
        ))
        .returning(reservations::id)
        .get_result(conn)
        .unwrap();
    diesel::insert_into(property_reviews::table)
        .values((
            property_reviews::guest_id.eq(guest_id),
            property_reviews::property_id.eq(property_id),
            property_reviews::reservation_id.eq(reservation_id),
            property_reviews::rating.eq(rating),
            property_reviews::message.eq("message"),
        ))
        .execute(conn)
        .unwrap();
}

pub fn seed(conn: &mut PgConnection) -> Fixture {
    let owner = users::add_user(conn, &new_user("Devin Sanders", "sebastianguerra@ymail.com")).unwrap();
    let guest = users::add_user(conn, &new_user("Eva Stanley", "sbaldwin@gmail.com")).unwrap();

    let mut add = |owner_id, title, city, cost| {
        properties::add_property(conn, &new_property(owner_id, title, city, cost)).unwrap()
    };
    let vancouver = add(owner.id, "Speed lamp", "Vancouver", 4500);
    let north_vancouver = add(owner.id, "Blank corner", "North Vancouver", 12000);
    let west_vancouver = add(owner.id, "Habit mix", "west vancouver", 15000);
    let toronto = add(guest.id, "Headed know", "Toronto", 5000);
    let calgary = add(owner.id, "Port out", "Calgary", 20000);
    let unreviewed = add(owner.id, "Nowhere near", "Vancouver", 3000);

    let mut week = 0;
    for (property, ratings) in [
        (&vancouver, vec![5, 5]),
        (&north_vancouver, vec![3, 4]),
        (&west_vancouver, vec![4]),
        (&toronto, vec![4, 5]),
        (&calgary, vec![2]),
    ] {
        for rating in ratings {
            review(conn, guest.id, property.id, rating, week);
            week += 1;
        }
    }

    Fixture {
        owner,
        guest,
        vancouver,
        north_vancouver,
        west_vancouver,
        toronto,
        calgary,
        unreviewed,
    }
}
