use minijinja::{context, Environment};
use std::sync::{Arc, OnceLock};
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::features::activity::dtos::TRACK_FAILED;
use crate::features::activity::models::ActivityEvent;
use crate::features::activity::transports::{EmailNotification, NotificationTransport};

/// The `.html` suffix turns on HTML auto-escaping for client-supplied fields
const ACTIVITY_TEMPLATE_NAME: &str = "activity.html";
const ACTIVITY_TEMPLATE: &str =
    include_str!("../../../../templates/notifications/activity.html.jinja");

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    if let Err(e) = env.add_template(ACTIVITY_TEMPLATE_NAME, ACTIVITY_TEMPLATE) {
        tracing::warn!("Failed to load template {}: {}", ACTIVITY_TEMPLATE_NAME, e);
    }
    env
}

fn environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Turns activity events into notifications and hands them to the transport
pub struct ActivityNotifier {
    transport: Arc<dyn NotificationTransport>,
    recipient: String,
    owner_name: String,
}

impl ActivityNotifier {
    pub fn new(
        transport: Arc<dyn NotificationTransport>,
        recipient: impl Into<String>,
        owner_name: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            recipient: recipient.into(),
            owner_name: owner_name.into(),
        }
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Render the subject and bodies for an event
    pub fn compose(&self, event: &ActivityEvent) -> Result<EmailNotification> {
        let date = event.received_at.format(DATE_FORMAT).to_string();
        let subject = format!("Portfolio {} - {}", event.kind.label(), date);

        let html = environment()
            .get_template(ACTIVITY_TEMPLATE_NAME)
            .and_then(|template| {
                template.render(context! {
                    headline => event.kind.headline(),
                    label => event.kind.label(),
                    summary => event.kind.summary(),
                    date => date,
                    ip => event.client_ip,
                    user_agent => event.user_agent,
                    referrer => event.referrer,
                    owner_name => self.owner_name,
                })
            })
            .map_err(|e| AppError::notification(TRACK_FAILED, e))?;

        let mut text = format!(
            "Portfolio Activity Notification\n\n\
             Activity: {}\n\
             Date & Time: {}\n\
             Reported At: {}\n\
             IP Address: {}\n\
             User Agent: {}\n",
            event.kind.label(),
            date,
            event.occurred_at.to_rfc3339(),
            event.client_ip,
            event.user_agent,
        );
        if let Some(referrer) = &event.referrer {
            text.push_str(&format!("Referer: {}\n", referrer));
        }
        text.push_str(&format!("\n{}\n", event.kind.summary()));

        Ok(EmailNotification {
            to: self.recipient.clone(),
            subject,
            html,
            text,
            activity: event.kind,
        })
    }

    /// Log the event and deliver its notification
    ///
    /// Transport failures come back as a generic error; the caller decides
    /// whether that matters.
    pub async fn notify(&self, event: &ActivityEvent) -> Result<()> {
        info!(
            kind = event.kind.as_str(),
            ip = %event.client_ip,
            user_agent = %event.user_agent,
            referrer = event.referrer.as_deref().unwrap_or("-"),
            occurred_at = %event.occurred_at.to_rfc3339(),
            "Portfolio activity"
        );

        let notification = self.compose(event)?;

        self.transport
            .send(&notification)
            .await
            .map_err(|e| AppError::notification(TRACK_FAILED, e))?;

        Ok(())
    }
}
