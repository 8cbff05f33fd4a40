//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- HS256 session-token generation and validation.

pub mod jwt;
pub mod password;
