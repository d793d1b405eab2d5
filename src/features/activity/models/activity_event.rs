use chrono::{DateTime, Utc};
use serde::Serialize;

/// What the visitor did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Download,
    Visit,
}

impl ActivityKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "download" => Some(ActivityKind::Download),
            "visit" => Some(ActivityKind::Visit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Download => "download",
            ActivityKind::Visit => "visit",
        }
    }

    /// Short label used in subjects and the field table
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Download => "Resume Download",
            ActivityKind::Visit => "Site Visit",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            ActivityKind::Download => "Resume Downloaded",
            ActivityKind::Visit => "Site Visited",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            ActivityKind::Download => "Someone has downloaded your resume!",
            ActivityKind::Visit => "Someone has visited your portfolio!",
        }
    }
}

/// A client-reported action, consumed once by the notifier and never stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent {
    pub kind: ActivityKind,
    pub client_ip: String,
    pub user_agent: String,
    pub referrer: Option<String>,
    /// When the client says it happened; server time if it did not say
    pub occurred_at: DateTime<Utc>,
    pub received_at: DateTime<Utc>,
}
