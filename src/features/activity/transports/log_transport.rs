use async_trait::async_trait;
use tracing::info;

use super::{EmailNotification, NotificationTransport, TransportError};

/// Writes the notification to the log instead of delivering it
///
/// This is the default until a mail backend is configured.
pub struct LogTransport;

#[async_trait]
impl NotificationTransport for LogTransport {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, notification: &EmailNotification) -> Result<(), TransportError> {
        info!(
            to = %notification.to,
            subject = %notification.subject,
            activity = notification.activity.as_str(),
            "Email notification (not delivered):\n{}",
            notification.text
        );
        Ok(())
    }
}
