use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::content::dtos::DeleteContentResponseDto;
use crate::features::content::models::Organization;
use crate::features::content::services::ContentService;
use crate::shared::types::{ApiResponse, ErrorResponse};

#[utoipa::path(
    get,
    path = "/api/organizations",
    responses(
        (status = 200, description = "All organizations in insertion order", body = ApiResponse<Vec<Organization>>),
    ),
    tag = "content"
)]
pub async fn list_organizations(
    State(service): State<Arc<ContentService<Organization>>>,
) -> Result<Json<ApiResponse<Vec<Organization>>>> {
    let items = service.list().await?;
    Ok(Json(ApiResponse::success(Some(items), None)))
}

#[utoipa::path(
    post,
    path = "/api/admin/organizations",
    request_body = Organization,
    responses(
        (status = 200, description = "Organization created, or success=false on validation failure", body = ApiResponse<Organization>),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 401, description = "Missing or wrong credentials")
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "admin"
)]
pub async fn create_organization(
    State(service): State<Arc<ContentService<Organization>>>,
    AppJson(item): AppJson<Organization>,
) -> Result<Json<ApiResponse<Organization>>> {
    let item = service.create(item).await?;
    Ok(Json(ApiResponse::success(
        Some(item),
        Some("Organization created successfully".to_string()),
    )))
}

#[utoipa::path(
    patch,
    path = "/api/admin/organizations/{id}",
    params(
        ("id" = String, Path, description = "Organization id")
    ),
    request_body(content = Object, description = "Fields to replace"),
    responses(
        (status = 200, description = "Organization updated, or success=false on validation failure", body = ApiResponse<Organization>),
        (status = 401, description = "Missing or wrong credentials"),
        (status = 404, description = "Organization not found", body = ErrorResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "admin"
)]
pub async fn update_organization(
    State(service): State<Arc<ContentService<Organization>>>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<Value>,
) -> Result<Json<ApiResponse<Organization>>> {
    let item = service.update(&id, patch).await?;
    Ok(Json(ApiResponse::success(
        Some(item),
        Some("Organization updated successfully".to_string()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/organizations/{id}",
    params(
        ("id" = String, Path, description = "Organization id")
    ),
    responses(
        (status = 200, description = "Organization deleted", body = ApiResponse<DeleteContentResponseDto>),
        (status = 401, description = "Missing or wrong credentials"),
        (status = 404, description = "Organization not found", body = ErrorResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "admin"
)]
pub async fn delete_organization(
    State(service): State<Arc<ContentService<Organization>>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeleteContentResponseDto>>> {
    service.delete(&id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteContentResponseDto { id, deleted: true }),
        Some("Organization deleted successfully".to_string()),
    )))
}
