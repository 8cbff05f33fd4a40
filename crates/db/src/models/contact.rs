//! Contact message entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use hearth_core::types::{DbId, Timestamp};

/// A contact message accepted for delivery, kept as the durable record.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub property_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for recording a new contact message.
#[derive(Debug, Clone)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub property_id: DbId,
}
