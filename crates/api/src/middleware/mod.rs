//! Session-gate extractor.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer
//!   token; every protected route takes it as a parameter.

pub mod auth;
