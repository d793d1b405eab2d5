use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::features::activity::models::{ActivityEvent, ActivityKind};

pub const INVALID_ACTIVITY_TYPE: &str = "Invalid activity type";
pub const TRACK_FAILED: &str = "Failed to track activity";
pub const TRACK_SUCCEEDED: &str = "Activity tracked successfully";

/// Sentinel shown when the browser sent no user agent
const UNKNOWN_USER_AGENT: &str = "unknown";

/// Activity reported by the page
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackActivityDto {
    /// "download" or "visit"
    #[serde(rename = "type", default)]
    #[schema(example = "download")]
    pub kind: String,
    pub user_agent: Option<String>,
    /// `document.referrer`; empty when there is none
    pub referer: Option<String>,
    /// Client-side ISO-8601 time of the action
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub timestamp: Option<String>,
}

impl TrackActivityDto {
    /// Combine the client report with what the server knows
    pub fn into_event(self, client_ip: String, received_at: DateTime<Utc>) -> Result<ActivityEvent> {
        let kind = ActivityKind::parse(&self.kind)
            .ok_or_else(|| AppError::Validation(INVALID_ACTIVITY_TYPE.to_string()))?;

        let user_agent = self
            .user_agent
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_USER_AGENT.to_string());

        let referrer = self.referer.filter(|r| !r.trim().is_empty());

        let occurred_at = self
            .timestamp
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| ts.with_timezone(&Utc))
            .unwrap_or(received_at);

        Ok(ActivityEvent {
            kind,
            client_ip,
            user_agent,
            referrer,
            occurred_at,
            received_at,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrackActivityResponseDto {
    pub success: bool,
    pub message: String,
}
