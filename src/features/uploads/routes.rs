use axum::{
    extract::{DefaultBodyLimit, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::features::uploads::handlers::{list_files, upload_file};
use crate::features::uploads::services::UploadService;
use crate::shared::constants::{MAX_FILE_SIZE, MULTIPART_OVERHEAD, PARTIAL_UPLOAD_SUFFIX};

/// Create routes for the uploads feature
pub fn routes(upload_service: Arc<UploadService>) -> Router {
    Router::new()
        .route(
            "/api/upload",
            // Allow body size up to MAX_FILE_SIZE + buffer for multipart overhead
            post(upload_file)
                .layer(DefaultBodyLimit::max(MAX_FILE_SIZE + MULTIPART_OVERHEAD))
                .get(list_files),
        )
        .with_state(upload_service)
}

/// Serve stored uploads as static files under `url_prefix`
pub fn file_routes(url_prefix: &str, uploads_dir: &Path) -> Router {
    Router::new()
        .nest_service(url_prefix, ServeDir::new(uploads_dir))
        .layer(middleware::from_fn(hide_partial_uploads))
}

/// In-flight `.part` files stay invisible. Stored names never need escaping,
/// so escaped paths are refused as well.
async fn hide_partial_uploads(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if path.contains('%') || path.ends_with(PARTIAL_UPLOAD_SUFFIX) {
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(request).await
}
