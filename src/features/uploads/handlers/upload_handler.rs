use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::uploads::dtos::{
    FileEntryDto, ListFilesQuery, ListFilesResponseDto, UploadFileDto, UploadResponseDto,
    FILE_TOO_LARGE, INVALID_TYPE_PARAMETER, INVALID_UPLOAD_TYPE, NO_FILE_UPLOADED,
};
use crate::features::uploads::services::{NewUpload, UploadService};
use crate::shared::types::{Category, ErrorResponse};

/// Upload an image
///
/// Accepts multipart/form-data with:
/// - `file`: the image (required)
/// - `type`: "projects" or "designs" (required)
///
/// Validation failures are reported with HTTP 200 and `success: false`.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "uploads",
    request_body(
        content = UploadFileDto,
        content_type = "multipart/form-data",
        description = "Image file plus its category",
    ),
    responses(
        (status = 200, description = "Stored, or rejected with success=false", body = UploadResponseDto),
        (status = 500, description = "Unexpected storage failure", body = ErrorResponse)
    )
)]
pub async fn upload_file(
    State(service): State<Arc<UploadService>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponseDto>> {
    let mut multipart = multipart.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let mut file: Option<NewUpload> = None;
    let mut category_field: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let original_name = field.file_name().map(|s| s.to_string()).unwrap_or_default();

                let data = field.bytes().await.map_err(multipart_error)?;

                // Browsers send an empty, nameless part when no file was picked
                if original_name.is_empty() && data.is_empty() {
                    continue;
                }

                file = Some(NewUpload {
                    original_name,
                    content_type,
                    data,
                });
            }
            "type" => {
                let text = field.text().await.map_err(multipart_error)?;
                category_field = Some(text);
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let file = file.ok_or_else(|| AppError::Validation(NO_FILE_UPLOADED.to_string()))?;
    let category = category_field
        .as_deref()
        .and_then(|t| t.parse::<Category>().ok())
        .ok_or_else(|| AppError::Validation(INVALID_UPLOAD_TYPE.to_string()))?;

    let stored = service.store(file, category).await?;

    Ok(Json(UploadResponseDto::from(stored)))
}

/// A body over the route's limit surfaces as a multipart read error
fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::Validation(FILE_TOO_LARGE.to_string());
    }
    debug!("Failed to read multipart data: {}", e);
    AppError::BadRequest(format!("Failed to read multipart data: {}", e.body_text()))
}

/// List uploaded images for a category
#[utoipa::path(
    get,
    path = "/api/upload",
    tag = "uploads",
    params(ListFilesQuery),
    responses(
        (status = 200, description = "Files in the category, or rejected with success=false", body = ListFilesResponseDto),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Unexpected storage failure", body = ErrorResponse)
    )
)]
pub async fn list_files(
    State(service): State<Arc<UploadService>>,
    AppQuery(query): AppQuery<ListFilesQuery>,
) -> Result<Json<ListFilesResponseDto>> {
    let category = query
        .category
        .as_deref()
        .and_then(|t| t.parse::<Category>().ok())
        .ok_or_else(|| AppError::Validation(INVALID_TYPE_PARAMETER.to_string()))?;

    let files = service.list(category).await?;

    Ok(Json(ListFilesResponseDto {
        success: true,
        files: files.into_iter().map(FileEntryDto::from).collect(),
    }))
}
