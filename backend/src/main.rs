use diesel::prelude::*;

use lightbnb::config::AppConfig;
use lightbnb::{Database, PropertySearch, DEFAULT_LIMIT};

/// Checks the database is reachable, then prints the cheapest listings,
/// optionally restricted to the city given as the first argument.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!("Loaded config for database {} on {}", config.db_name, config.db_host);

    let database = Database::connect(&config)?;
    let mut conn = database.connection()?;
    let test_query: i32 = diesel::select(diesel::dsl::sql::<diesel::sql_types::Integer>("1"))
        .get_result(&mut conn)?;
    log::info!("Database test query result: {}", test_query);
    drop(conn);

    let search = match std::env::args().nth(1) {
        Some(city) => PropertySearch::new().with_city(city),
        None => PropertySearch::new(),
    };
    let listings = database.get_all_properties(&search, DEFAULT_LIMIT)?;
    log::info!("Found {} properties", listings.len());
    println!("{}", serde_json::to_string_pretty(&listings)?);

    Ok(())
}
