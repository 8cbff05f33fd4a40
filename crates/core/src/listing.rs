//! Listing domain model: status/type enumerations, highlights, and the
//! creation-time invariant checks.
//!
//! The enums deserialize from their display strings (`"For Sale"`,
//! `"Land Or Plot"`, ...) so unknown values are rejected at the serde
//! boundary rather than coerced to a default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Sale/rental status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
    #[serde(rename = "Sold")]
    Sold,
    #[serde(rename = "Rented")]
    Rented,
}

impl PropertyStatus {
    /// The canonical display string, also used as the database value.
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "For Sale",
            PropertyStatus::ForRent => "For Rent",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::Rented => "Rented",
        }
    }
}

impl Default for PropertyStatus {
    fn default() -> Self {
        PropertyStatus::ForSale
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "For Sale" => Ok(PropertyStatus::ForSale),
            "For Rent" => Ok(PropertyStatus::ForRent),
            "Sold" => Ok(PropertyStatus::Sold),
            "Rented" => Ok(PropertyStatus::Rented),
            _ => Err(()),
        }
    }
}

/// Category of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "Apartment")]
    Apartment,
    #[serde(rename = "Commercial")]
    Commercial,
    #[serde(rename = "Land Or Plot")]
    LandOrPlot,
    #[serde(rename = "Farm")]
    Farm,
    #[serde(rename = "Villa")]
    Villa,
    #[serde(rename = "House")]
    House,
}

impl PropertyType {
    /// The canonical display string, also used as the database value.
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Commercial => "Commercial",
            PropertyType::LandOrPlot => "Land Or Plot",
            PropertyType::Farm => "Farm",
            PropertyType::Villa => "Villa",
            PropertyType::House => "House",
        }
    }
}

impl Default for PropertyType {
    fn default() -> Self {
        PropertyType::Apartment
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Apartment" => Ok(PropertyType::Apartment),
            "Commercial" => Ok(PropertyType::Commercial),
            "Land Or Plot" => Ok(PropertyType::LandOrPlot),
            "Farm" => Ok(PropertyType::Farm),
            "Villa" => Ok(PropertyType::Villa),
            "House" => Ok(PropertyType::House),
            _ => Err(()),
        }
    }
}

/// Free-form highlight attributes shown on the listing detail page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Highlights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedroom: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bath: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub big_yard: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jacuzzi: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating: Option<String>,
}

/// Geographic coordinate pair. Stored, never searched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Payload for creating a listing, before identity and timestamps exist.
///
/// `status` and `property_type` are typed enums so unknown values fail
/// deserialization; the numeric invariants are checked by
/// [`validate_new_listing`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub address: String,
    pub price: i64,
    #[serde(default)]
    pub beds: i32,
    #[serde(default)]
    pub baths: i32,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub status: PropertyStatus,
    #[serde(default, rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub highlights: Option<Highlights>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub listed_at: Option<Timestamp>,
}

/// Check the listing invariants, collecting every violated field.
///
/// Returns `CoreError::Validation` with a `field: reason` hint per violation
/// so clients can surface errors next to the offending form input.
pub fn validate_new_listing(input: &NewListing) -> Result<(), CoreError> {
    let mut problems: Vec<String> = Vec::new();

    if input.title.trim().is_empty() {
        problems.push("title: must not be empty".into());
    }
    if input.address.trim().is_empty() {
        problems.push("address: must not be empty".into());
    }
    if input.price < 0 {
        problems.push("price: must not be negative".into());
    }
    if input.beds < 0 {
        problems.push("beds: must not be negative".into());
    }
    if input.baths < 0 {
        problems.push("baths: must not be negative".into());
    }
    if input.area < 0.0 {
        problems.push("area: must not be negative".into());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(problems.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_listing() -> NewListing {
        NewListing {
            title: "Charming Beach House".into(),
            address: "39581 Rohan Estates, New York".into(),
            price: 179_800,
            beds: 4,
            baths: 2,
            area: 1500.0,
            status: PropertyStatus::ForSale,
            property_type: PropertyType::Apartment,
            description: String::new(),
            images: vec![],
            main_image: String::new(),
            featured: false,
            highlights: None,
            amenities: vec![],
            location: None,
            listed_at: None,
        }
    }

    #[test]
    fn valid_listing_passes() {
        assert!(validate_new_listing(&valid_listing()).is_ok());
    }

    #[test]
    fn empty_title_and_negative_price_are_both_reported() {
        let mut listing = valid_listing();
        listing.title = "  ".into();
        listing.price = -1;

        let err = validate_new_listing(&listing).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("title: must not be empty"), "got: {msg}");
        assert!(msg.contains("price: must not be negative"), "got: {msg}");
    }

    #[test]
    fn negative_counts_are_rejected() {
        let mut listing = valid_listing();
        listing.beds = -2;
        listing.baths = -1;
        listing.area = -0.5;

        let err = validate_new_listing(&listing).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("beds"), "got: {msg}");
        assert!(msg.contains("baths"), "got: {msg}");
        assert!(msg.contains("area"), "got: {msg}");
    }

    #[test]
    fn status_deserializes_from_display_string() {
        let status: PropertyStatus = serde_json::from_str("\"For Rent\"").unwrap();
        assert_eq!(status, PropertyStatus::ForRent);
    }

    #[test]
    fn unknown_status_is_rejected_not_coerced() {
        let result: Result<PropertyStatus, _> = serde_json::from_str("\"Leased\"");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_type_is_rejected_not_coerced() {
        let result: Result<PropertyType, _> = serde_json::from_str("\"Castle\"");
        assert!(result.is_err());
    }

    #[test]
    fn new_listing_defaults_apply_to_omitted_fields() {
        let listing: NewListing = serde_json::from_str(
            r#"{"title": "Loft", "address": "12 Main St", "price": 100}"#,
        )
        .unwrap();
        assert_eq!(listing.status, PropertyStatus::ForSale);
        assert_eq!(listing.property_type, PropertyType::Apartment);
        assert_eq!(listing.beds, 0);
        assert!(!listing.featured);
        assert!(listing.images.is_empty());
    }
}
