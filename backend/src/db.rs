use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use log::{error, info};

use crate::config::AppConfig;
use crate::error::Result;
use crate::models::{NewProperty, NewUser, Property, PropertyListing, ReservationListing, User};
use crate::properties::{self, PropertySearch};
use crate::{reservations, users};

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type PgPooled = PooledConnection<ConnectionManager<PgConnection>>;

pub fn establish_connection(config: &AppConfig) -> Result<PgConnection> {
    let database_url = config.connection_url();
    info!("Attempting to connect to database at {}", config.db_host);
    match PgConnection::establish(&database_url) {
        Ok(conn) => {
            info!("Database connection established successfully");
            Ok(conn)
        }
        Err(e) => {
            error!("Failed to establish database connection: {}", e);
            Err(e.into())
        }
    }
}

pub fn build_pool(config: &AppConfig) -> Result<PgPool> {
    let manager = ConnectionManager::<PgConnection>::new(config.connection_url());
    match Pool::builder().max_size(config.pool_size).build(manager) {
        Ok(pool) => {
            info!("Connection pool ready with up to {} connections", config.pool_size);
            Ok(pool)
        }
        Err(e) => {
            error!("Failed to build connection pool: {}", e);
            Err(e.into())
        }
    }
}

/// Process-wide handle that route handlers share. Each call checks out one
/// pooled connection and issues a single query on it.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn connect(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(build_pool(config)?))
    }

    /// Checks out a pooled connection, logging pool exhaustion or failure.
    pub fn connection(&self) -> Result<PgPooled> {
        self.pool.get().map_err(|e| {
            error!("Failed to check out a database connection: {}", e);
            e.into()
        })
    }

    pub fn get_user_with_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = self.connection()?;
        users::get_user_with_email(&mut conn, email)
    }

    pub fn get_user_with_id(&self, id: i32) -> Result<Option<User>> {
        let mut conn = self.connection()?;
        users::get_user_with_id(&mut conn, id)
    }

    pub fn add_user(&self, user: &NewUser) -> Result<User> {
        let mut conn = self.connection()?;
        users::add_user(&mut conn, user)
    }

    pub fn get_all_reservations(&self, guest_id: i32, limit: i64) -> Result<Vec<ReservationListing>> {
        let mut conn = self.connection()?;
        reservations::get_all_reservations(&mut conn, guest_id, limit)
    }

    pub fn get_all_properties(&self, search: &PropertySearch, limit: i64) -> Result<Vec<PropertyListing>> {
        let mut conn = self.connection()?;
        properties::get_all_properties(&mut conn, search, limit)
    }

    pub fn add_property(&self, property: &NewProperty) -> Result<Property> {
        let mut conn = self.connection()?;
        properties::add_property(&mut conn, property)
    }
}
