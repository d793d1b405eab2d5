use async_trait::async_trait;
use base64::prelude::*;
use std::sync::Mutex;

use crate::features::activity::transports::{
    EmailNotification, NotificationTransport, TransportError,
};

/// Transport that keeps every notification it is given
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<EmailNotification>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<EmailNotification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationTransport for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, notification: &EmailNotification) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

/// Transport whose relay always answers 502
pub struct FailingTransport;

#[async_trait]
impl NotificationTransport for FailingTransport {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn send(&self, _notification: &EmailNotification) -> Result<(), TransportError> {
        Err(TransportError::Rejected {
            status: 502,
            body: "bad gateway".to_string(),
        })
    }
}

/// `Authorization` header value for HTTP basic auth
pub fn basic_auth_header(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        BASE64_STANDARD.encode(format!("{}:{}", username, password))
    )
}
