use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::{EmailNotification, NotificationTransport, TransportError};

/// Longest slice of an error body kept for the log
const MAX_ERROR_BODY: usize = 512;

/// POSTs the notification as JSON to a relay that performs the delivery
pub struct WebhookTransport {
    client: Client,
    url: String,
    token: Option<String>,
}

impl WebhookTransport {
    pub fn new(url: String, token: Option<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url, token })
    }
}

#[async_trait]
impl NotificationTransport for WebhookTransport {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn send(&self, notification: &EmailNotification) -> Result<(), TransportError> {
        let mut request = self.client.post(&self.url).json(notification);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Notification delivered to webhook: status={}", status);
        Ok(())
    }
}
