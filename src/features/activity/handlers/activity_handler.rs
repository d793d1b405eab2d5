use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, ClientIp};
use crate::features::activity::dtos::{
    TrackActivityDto, TrackActivityResponseDto, TRACK_SUCCEEDED,
};
use crate::features::activity::services::ActivityNotifier;
use crate::shared::types::ErrorResponse;

/// Record a page visit or resume download
///
/// The client address is taken from `x-forwarded-for` / `x-real-ip`. The page
/// calls this fire-and-forget, so a failure here never affects the visitor.
#[utoipa::path(
    post,
    path = "/api/track-download",
    request_body = TrackActivityDto,
    responses(
        (status = 200, description = "Activity tracked, or rejected with success=false", body = TrackActivityResponseDto),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 500, description = "Notification could not be delivered", body = ErrorResponse)
    ),
    tag = "activity"
)]
pub async fn track_activity(
    State(notifier): State<Arc<ActivityNotifier>>,
    ClientIp(client_ip): ClientIp,
    AppJson(dto): AppJson<TrackActivityDto>,
) -> Result<Json<TrackActivityResponseDto>> {
    let event = dto.into_event(client_ip, Utc::now())?;

    notifier.notify(&event).await?;

    Ok(Json(TrackActivityResponseDto {
        success: true,
        message: TRACK_SUCCEEDED.to_string(),
    }))
}
