//! Handler for contact-an-agent messages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use hearth_core::error::CoreError;
use hearth_core::types::DbId;
use hearth_db::models::contact::{ContactMessage, CreateContactMessage};
use hearth_db::repositories::{ContactRepo, PropertyRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /contact`.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    #[serde(rename = "propertyId")]
    pub property_id: DbId,
}

/// POST /api/v1/contact
///
/// Accept a message about a listing. The message is persisted as the durable
/// record, then handed to the delivery collaborator; a delivery failure is
/// logged but does not fail the request, since the payload was accepted.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ContactMessage>>)> {
    let mut problems: Vec<&str> = Vec::new();
    if input.name.trim().is_empty() {
        problems.push("name: must not be empty");
    }
    if input.email.trim().is_empty() {
        problems.push("email: must not be empty");
    }
    if input.message.trim().is_empty() {
        problems.push("message: must not be empty");
    }
    if !problems.is_empty() {
        return Err(CoreError::Validation(problems.join("; ")).into());
    }

    // The message must reference a real listing.
    PropertyRepo::find_by_id(&state.pool, input.property_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Property",
            id: input.property_id,
        })?;

    let create = CreateContactMessage {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        phone: input.phone.filter(|p| !p.trim().is_empty()),
        message: input.message.trim().to_string(),
        property_id: input.property_id,
    };
    let message = ContactRepo::create(&state.pool, &create).await?;

    if let Err(e) = state.contact_delivery.deliver(&message).await {
        tracing::warn!(contact_id = message.id, error = %e, "Contact delivery failed");
    }

    Ok((StatusCode::CREATED, Json(DataResponse::new(message))))
}
