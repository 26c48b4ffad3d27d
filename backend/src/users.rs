use diesel::prelude::*;
use log::{debug, error};

use crate::error::Result;
use crate::models::{NewUser, User};
use crate::schema::users;

/// Fetches a single user by email. An unknown address is `Ok(None)`.
pub fn get_user_with_email(conn: &mut PgConnection, email: &str) -> Result<Option<User>> {
    debug!("Fetching user by email");
    users::table
        .filter(users::email.eq(email))
        .select(User::as_select())
        .first(conn)
        .optional()
        .map_err(|e| {
            error!("Failed to fetch user by email: {}", e);
            e.into()
        })
}

/// Fetches a single user by id. An unknown id is `Ok(None)`.
pub fn get_user_with_id(conn: &mut PgConnection, id: i32) -> Result<Option<User>> {
    debug!("Fetching user with ID: {}", id);
    users::table
        .find(id)
        .select(User::as_select())
        .first(conn)
        .optional()
        .map_err(|e| {
            error!("Failed to fetch user {}: {}", id, e);
            e.into()
        })
}

pub fn add_user(conn: &mut PgConnection, new_user: &NewUser) -> Result<User> {
    diesel::insert_into(users::table)
        .values(new_user)
        .returning(User::as_returning())
        .get_result(conn)
        .map(|user: User| {
            debug!("Added user {}", user.id);
            user
        })
        .map_err(|e| {
            error!("Failed to add user: {}", e);
            e.into()
        })
}
