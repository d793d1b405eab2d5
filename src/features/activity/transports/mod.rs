//! Delivery backends for activity notifications
//!
//! Exactly one transport is active per process, chosen by `NOTIFY_TRANSPORT`.
//! Adding a mail provider means adding one implementation of
//! [`NotificationTransport`] and one arm in [`build_transport`].

mod log_transport;
mod webhook_transport;

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::core::config::{NotificationConfig, TransportKind};
use crate::features::activity::models::ActivityKind;

pub use log_transport::LogTransport;
pub use webhook_transport::WebhookTransport;

/// A fully rendered notification, ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailNotification {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
    pub activity: ActivityKind,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Endpoint responded with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait NotificationTransport: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    async fn send(&self, notification: &EmailNotification) -> Result<(), TransportError>;
}

/// Build the transport selected in configuration
pub fn build_transport(
    config: &NotificationConfig,
) -> Result<Arc<dyn NotificationTransport>, String> {
    match config.transport {
        TransportKind::Log => Ok(Arc::new(LogTransport)),
        TransportKind::Webhook => {
            let url = config
                .webhook_url
                .clone()
                .ok_or_else(|| "NOTIFY_WEBHOOK_URL is required for the webhook transport".to_string())?;
            let transport = WebhookTransport::new(url, config.webhook_token.clone(), config.timeout)
                .map_err(|e| format!("Failed to create webhook transport: {}", e))?;
            Ok(Arc::new(transport))
        }
    }
}
