//! Data-access layer for the LightBnB listing site: users, reservations,
//! and the property search queries.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod properties;
pub mod reservations;
pub mod schema;
pub mod users;

pub use db::Database;
pub use error::{DbError, Result};
pub use properties::{PropertySearch, DEFAULT_LIMIT};
