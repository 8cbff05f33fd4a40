//! Contact-message delivery seam.
//!
//! Delivery (email, CRM webhook, ...) is an external collaborator: the API
//! accepts a payload, records it, and hands it off behind this trait. The
//! default implementation only logs, which is all local development needs.

use async_trait::async_trait;

use hearth_db::models::contact::ContactMessage;

/// Forwards an accepted contact message to whatever channel reaches an agent.
#[async_trait]
pub trait ContactDelivery: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError>;
}

/// Opaque delivery failure. Logged by the caller, never surfaced to clients.
#[derive(Debug, thiserror::Error)]
#[error("Delivery failed: {0}")]
pub struct DeliveryError(pub String);

/// Delivery stub that writes the message to the log.
#[derive(Debug, Default)]
pub struct LogDelivery;

#[async_trait]
impl ContactDelivery for LogDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        tracing::info!(
            contact_id = message.id,
            property_id = message.property_id,
            from = %message.email,
            "Contact message accepted for delivery"
        );
        Ok(())
    }
}
