//! Property entity model.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

use hearth_core::listing::{GeoPoint, Highlights};
use hearth_core::types::{DbId, Timestamp};

/// Full property row from the `properties` table.
///
/// Serializes with the field names the browsing clients expect
/// (`type`, `mainImage`, `commentsCount`, ...).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: DbId,
    pub title: String,
    pub address: String,
    pub price: i64,
    pub beds: i32,
    pub baths: i32,
    pub area: f64,
    pub status: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub description: String,
    pub images: Vec<String>,
    pub main_image: String,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Json<Highlights>>,
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Json<GeoPoint>>,
    pub listed_at: Timestamp,
    pub comments_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
