//! Pure domain logic for the hearth listings platform.
//!
//! No I/O lives here: this crate defines the shared error taxonomy, the
//! listing domain model (enums, highlights, creation validation), and the
//! query builder that turns loosely-typed client filter parameters into a
//! strongly-typed query specification.

pub mod error;
pub mod listing;
pub mod query;
pub mod types;
