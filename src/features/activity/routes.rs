use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::activity::handlers;
use crate::features::activity::services::ActivityNotifier;

/// Create routes for the activity feature
///
/// Note: This feature is public (no authentication required) as it's called
/// by every page load.
pub fn routes(notifier: Arc<ActivityNotifier>) -> Router {
    Router::new()
        .route("/api/track-download", post(handlers::track_activity))
        .with_state(notifier)
}
