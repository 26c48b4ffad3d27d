use dotenv::dotenv;
use serde::Deserialize;

use crate::error::Result;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_name: String,
    pub pool_size: u32,
}

impl AppConfig {
    /// Reads settings from the environment, after loading `.env` if present.
    /// Unset connection fields fall back to the local development database.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        let settings = config::Config::builder()
            .set_default("db_user", "vagrant")?
            .set_default("db_password", "123")?
            .set_default("db_host", "localhost")?
            .set_default("db_name", "lightbnb")?
            .set_default("pool_size", 10)?
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// `DATABASE_URL` wins over the individual `DB_*` fields.
    pub fn connection_url(&self) -> String {
        match &self.database_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "postgres://{}:{}@{}/{}",
                self.db_user, self.db_password, self.db_host, self.db_name
            ),
        }
    }
}
