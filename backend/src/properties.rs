//! Property listings: the search endpoint's filter builder and listing inserts.
//!
//! The search query is assembled one fragment at a time. Every filter value
//! is bound to a positional `$n` parameter, numbered in the order the
//! fragments are appended, so caller input never reaches the SQL text.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{BigInt, Double, Integer, Text};
use log::{debug, error};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{NewProperty, Property, PropertyListing};
use crate::schema::properties;

/// Row cap used when the caller has no preference.
pub const DEFAULT_LIMIT: i64 = 10;

const SEARCH_BASE: &str = "\
SELECT properties.*, AVG(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON property_reviews.property_id = properties.id
";

pub type SearchQuery = BoxedSqlQuery<'static, Pg, SqlQuery>;

/// Optional filters of the property search endpoint. Prices are in whole
/// currency units; `cost_per_night` is stored in cents.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PropertySearch {
    pub owner_id: Option<i32>,
    pub city: Option<String>,
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_price_range(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.minimum_price_per_night = minimum;
        self.maximum_price_per_night = maximum;
        self
    }

    pub fn with_minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    // Empty strings, zero and NaN count as "not given". Negative values
    // still filter.
    fn owner_filter(&self) -> Option<i32> {
        self.owner_id.filter(|id| *id != 0)
    }

    fn city_filter(&self) -> Option<&str> {
        self.city.as_deref().filter(|city| !city.is_empty())
    }

    fn min_cents(&self) -> Option<i32> {
        given(self.minimum_price_per_night).map(to_cents)
    }

    fn max_cents(&self) -> Option<i32> {
        given(self.maximum_price_per_night).map(to_cents)
    }

    fn rating_filter(&self) -> Option<f64> {
        given(self.minimum_rating)
    }

    /// Builds the search query. Row filters go in `WHERE`, the rating
    /// filter in `HAVING` since it applies to the per-property average.
    pub fn to_query(&self, limit: i64) -> SearchQuery {
        let mut query = diesel::sql_query(SEARCH_BASE).into_boxed::<Pg>();
        let mut n = 0;

        if let Some(owner_id) = self.owner_filter() {
            n += 1;
            query = query
                .sql(format!("{} properties.owner_id = ${}\n", conjunction(n), n))
                .bind::<Integer, _>(owner_id);
        }
        if let Some(city) = self.city_filter() {
            n += 1;
            query = query
                .sql(format!("{} properties.city LIKE ${}\n", conjunction(n), n))
                .bind::<Text, _>(format!("%{}%", city));
        }
        if let Some(cents) = self.min_cents() {
            n += 1;
            query = query
                .sql(format!("{} properties.cost_per_night >= ${}\n", conjunction(n), n))
                .bind::<Integer, _>(cents);
        }
        if let Some(cents) = self.max_cents() {
            n += 1;
            query = query
                .sql(format!("{} properties.cost_per_night <= ${}\n", conjunction(n), n))
                .bind::<Integer, _>(cents);
        }

        query = query.sql("GROUP BY properties.id\n");

        if let Some(rating) = self.rating_filter() {
            n += 1;
            query = query
                .sql(format!("HAVING AVG(property_reviews.rating) >= ${}\n", n))
                .bind::<Double, _>(rating);
        }

        n += 1;
        query
            .sql(format!("ORDER BY properties.cost_per_night ASC\nLIMIT ${}", n))
            .bind::<BigInt, _>(limit)
    }
}

fn conjunction(n: usize) -> &'static str {
    if n == 1 {
        "WHERE"
    } else {
        "AND"
    }
}

fn given(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn to_cents(dollars: f64) -> i32 {
    (dollars * 100.0).round() as i32
}

/// Searches listings, cheapest first, with their average review rating.
pub fn get_all_properties(
    conn: &mut PgConnection,
    search: &PropertySearch,
    limit: i64,
) -> Result<Vec<PropertyListing>> {
    debug!("Searching properties with {:?}, limit {}", search, limit);
    search.to_query(limit).load(conn).map_err(|e| {
        error!("Failed to search properties: {}", e);
        e.into()
    })
}

pub fn add_property(conn: &mut PgConnection, new_property: &NewProperty) -> Result<Property> {
    debug!("Adding property '{}' for owner {}", new_property.title, new_property.owner_id);
    diesel::insert_into(properties::table)
        .values(new_property)
        .returning(Property::as_returning())
        .get_result(conn)
        .map_err(|e| {
            error!("Failed to add property: {}", e);
            e.into()
        })
}
