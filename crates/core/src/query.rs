//! Listing query builder.
//!
//! Client filter parameters arrive as loose strings from the search form.
//! [`ListingQuery::from_params`] normalizes them into a strongly-typed query
//! specification in a single parse-and-default pass. The function is pure and
//! total: malformed input degrades to "no constraint on that field", never an
//! error, because a public search surface should answer broadly rather than
//! fail.

use serde::Deserialize;
use std::str::FromStr;

use crate::listing::{PropertyStatus, PropertyType};

/// Sentinel type value meaning "do not filter by type".
const TYPE_VIEW_ALL: &str = "View All";

/// Raw filter parameters as they arrive on the query string.
///
/// Everything is optional and stringly-typed; normalization happens in
/// [`ListingQuery::from_params`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub status: Option<String>,
    pub featured: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub limit: Option<String>,
}

/// An equality filter value for an enumerated field.
///
/// Unrecognized client values are carried through verbatim rather than
/// dropped: the store only holds enumerated values, so a `Raw` filter
/// matches nothing. Dropping it would widen the query to the whole
/// collection, which is the opposite of what the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EqFilter<T> {
    Known(T),
    Raw(String),
}

/// Conjunction of filters applied to the listing collection.
///
/// `None` on any field means that field is unconstrained. When both price
/// bounds are present they form an inclusive closed range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub property_type: Option<EqFilter<PropertyType>>,
    pub status: Option<EqFilter<PropertyStatus>>,
    pub featured: Option<bool>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

/// Total order over the result set.
///
/// Ties are broken by insertion order (ascending id) in the storage layer so
/// results are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    PriceLowHigh,
    PriceHighLow,
    /// Descending listing date. Also the default for an unset or unknown
    /// `sortBy` value.
    Newest,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Newest
    }
}

/// A validated, normalized query specification: predicate + order + cap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    pub filter: ListingFilter,
    pub sort: SortOrder,
    /// Result cap, applied after sorting. `None` means return all matches.
    pub limit: Option<i64>,
}

impl ListingQuery {
    /// Build a query specification from raw client parameters.
    ///
    /// Normalization rules:
    /// - `type`: enum parse; empty or `"View All"` drops the filter, an
    ///   unrecognized value is carried through verbatim and matches nothing.
    /// - `status`: enum parse; empty drops the filter, unrecognized is
    ///   carried through verbatim.
    /// - `featured`: only the literal `"true"` restricts to featured
    ///   listings; any other value is ignored, never treated as `false`.
    /// - `minPrice` / `maxPrice`: integer parse; failure drops that bound.
    /// - `sortBy`: `priceLowHigh` / `priceHighLow` / `newest`; anything else
    ///   falls back to newest-first.
    /// - `limit`: integer parse; unparsable or non-positive means no cap.
    pub fn from_params(params: &ListingParams) -> Self {
        let property_type = params
            .property_type
            .as_deref()
            .filter(|t| !t.is_empty() && *t != TYPE_VIEW_ALL)
            .map(|t| match PropertyType::from_str(t) {
                Ok(known) => EqFilter::Known(known),
                Err(()) => EqFilter::Raw(t.to_string()),
            });

        let status = params
            .status
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| match PropertyStatus::from_str(s) {
                Ok(known) => EqFilter::Known(known),
                Err(()) => EqFilter::Raw(s.to_string()),
            });

        let featured = match params.featured.as_deref() {
            Some("true") => Some(true),
            _ => None,
        };

        let min_price = params.min_price.as_deref().and_then(parse_i64);
        let max_price = params.max_price.as_deref().and_then(parse_i64);

        let sort = match params.sort_by.as_deref() {
            Some("priceLowHigh") => SortOrder::PriceLowHigh,
            Some("priceHighLow") => SortOrder::PriceHighLow,
            _ => SortOrder::Newest,
        };

        let limit = params.limit.as_deref().and_then(parse_i64).filter(|n| *n > 0);

        ListingQuery {
            filter: ListingFilter {
                property_type,
                status,
                featured,
                min_price,
                max_price,
            },
            sort,
            limit,
        }
    }
}

fn parse_i64(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok()
}
