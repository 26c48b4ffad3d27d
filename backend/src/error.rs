//! Error types for the LightBnB data-access layer.

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database connection error: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("Pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("Query error: {0}")]
    Query(#[from] diesel::result::Error),
}

pub type Result<T> = std::result::Result<T, DbError>;
