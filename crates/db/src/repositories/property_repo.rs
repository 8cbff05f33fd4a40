//! Repository for the `properties` table.
//!
//! Listing reads take a [`ListingQuery`] from `hearth_core` and translate it
//! to SQL with bound parameters. Every sort order carries an `id` tie-break
//! so equal keys come back in insertion order.

use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};

use hearth_core::listing::NewListing;
use hearth_core::query::{EqFilter, ListingQuery, SortOrder};
use hearth_core::types::DbId;

use crate::models::property::Property;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, address, price, beds, baths, area, status, property_type, \
                       description, images, main_image, featured, highlights, amenities, \
                       location, listed_at, comments_count, created_at, updated_at";

/// Provides reads and the administrative create for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property, returning the created row.
    ///
    /// The payload is assumed to have passed `validate_new_listing`; the
    /// database CHECK constraints are the backstop.
    pub async fn create(pool: &PgPool, input: &NewListing) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties
                (title, address, price, beds, baths, area, status, property_type,
                 description, images, main_image, featured, highlights, amenities,
                 location, listed_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                     COALESCE($16, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(&input.title)
            .bind(&input.address)
            .bind(input.price)
            .bind(input.beds)
            .bind(input.baths)
            .bind(input.area)
            .bind(input.status.as_str())
            .bind(input.property_type.as_str())
            .bind(&input.description)
            .bind(&input.images)
            .bind(&input.main_image)
            .bind(input.featured)
            .bind(input.highlights.clone().map(Json))
            .bind(&input.amenities)
            .bind(input.location.map(Json))
            .bind(input.listed_at)
            .fetch_one(pool)
            .await
    }

    /// Find a property by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Execute a listing query: filter conjunction, total order, then cap.
    pub async fn list(pool: &PgPool, query: &ListingQuery) -> Result<Vec<Property>, sqlx::Error> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM properties WHERE TRUE"));

        let filter = &query.filter;
        if let Some(property_type) = &filter.property_type {
            // Raw values bind as-is and match no stored row.
            let value = match property_type {
                EqFilter::Known(known) => known.as_str(),
                EqFilter::Raw(raw) => raw.as_str(),
            };
            builder.push(" AND property_type = ");
            builder.push_bind(value);
        }
        if let Some(status) = &filter.status {
            let value = match status {
                EqFilter::Known(known) => known.as_str(),
                EqFilter::Raw(raw) => raw.as_str(),
            };
            builder.push(" AND status = ");
            builder.push_bind(value);
        }
        if let Some(featured) = filter.featured {
            builder.push(" AND featured = ");
            builder.push_bind(featured);
        }
        if let Some(min_price) = filter.min_price {
            builder.push(" AND price >= ");
            builder.push_bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            builder.push(" AND price <= ");
            builder.push_bind(max_price);
        }

        builder.push(match query.sort {
            SortOrder::PriceLowHigh => " ORDER BY price ASC, id ASC",
            SortOrder::PriceHighLow => " ORDER BY price DESC, id ASC",
            SortOrder::Newest => " ORDER BY listed_at DESC, id DESC",
        });

        // The cap applies after ordering; no cap means return all matches.
        if let Some(limit) = query.limit {
            builder.push(" LIMIT ");
            builder.push_bind(limit);
        }

        builder
            .build_query_as::<Property>()
            .fetch_all(pool)
            .await
    }
}
