//! HTTP handlers, one module per resource.

pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod properties;
