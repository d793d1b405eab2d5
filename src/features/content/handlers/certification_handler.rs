use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::content::dtos::DeleteContentResponseDto;
use crate::features::content::models::Certification;
use crate::features::content::services::ContentService;
use crate::shared::types::{ApiResponse, ErrorResponse};

#[utoipa::path(
    get,
    path = "/api/certifications",
    responses(
        (status = 200, description = "All certifications in insertion order", body = ApiResponse<Vec<Certification>>),
    ),
    tag = "content"
)]
pub async fn list_certifications(
    State(service): State<Arc<ContentService<Certification>>>,
) -> Result<Json<ApiResponse<Vec<Certification>>>> {
    let items = service.list().await?;
    Ok(Json(ApiResponse::success(Some(items), None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/certifications",
    request_body = Certification,
    responses(
        (status = 200, description = "Certification created, or success=false on validation failure", body = ApiResponse<Certification>),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 401, description = "Missing or wrong credentials")
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "admin"
)]
pub async fn create_certification(
    State(service): State<Arc<ContentService<Certification>>>,
    AppJson(item): AppJson<Certification>,
) -> Result<Json<ApiResponse<Certification>>> {
    let item = service.create(item).await?;
    Ok(Json(ApiResponse::success(
        Some(item),
        Some("Certification created successfully".to_string()),
    )))
}

#[utoipa::path(
    patch,
    path = "/api/admin/certifications/{id}",
    params(
        ("id" = String, Path, description = "Certification id")
    ),
    request_body(content = Object, description = "Fields to replace"),
    responses(
        (status = 200, description = "Certification updated, or success=false on validation failure", body = ApiResponse<Certification>),
        (status = 401, description = "Missing or wrong credentials"),
        (status = 404, description = "Certification not found", body = ErrorResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "admin"
)]
pub async fn update_certification(
    State(service): State<Arc<ContentService<Certification>>>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<Value>,
) -> Result<Json<ApiResponse<Certification>>> {
    let item = service.update(&id, patch).await?;
    Ok(Json(ApiResponse::success(
        Some(item),
        Some("Certification updated successfully".to_string()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/certifications/{id}",
    params(
        ("id" = String, Path, description = "Certification id")
    ),
    responses(
        (status = 200, description = "Certification deleted", body = ApiResponse<DeleteContentResponseDto>),
        (status = 401, description = "Missing or wrong credentials"),
        (status = 404, description = "Certification not found", body = ErrorResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "admin"
)]
pub async fn delete_certification(
    State(service): State<Arc<ContentService<Certification>>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeleteContentResponseDto>>> {
    service.delete(&id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteContentResponseDto { id, deleted: true }),
        Some("Certification deleted successfully".to_string()),
    )))
}
