use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::content::dtos::{
    DeleteContentResponseDto, ListProjectsQuery, INVALID_PROJECT_TYPE,
};
use crate::features::content::models::PortfolioProject;
use crate::features::content::services::ContentService;
use crate::shared::types::{ApiResponse, Category, ErrorResponse};

/// List portfolio projects
///
/// Ordered by `order`, then id. `type` narrows the list to one category.
#[utoipa::path(
    get,
    path = "/api/projects",
    params(ListProjectsQuery),
    responses(
        (status = 200, description = "Projects, or success=false for a bad type", body = ApiResponse<Vec<PortfolioProject>>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
    ),
    tag = "content"
)]
pub async fn list_projects(
    State(service): State<Arc<ContentService<PortfolioProject>>>,
    AppQuery(query): AppQuery<ListProjectsQuery>,
) -> Result<Json<ApiResponse<Vec<PortfolioProject>>>> {
    let category = match query.category.as_deref() {
        None => None,
        Some(raw) => Some(
            raw.parse::<Category>()
                .map_err(|_| AppError::Validation(INVALID_PROJECT_TYPE.to_string()))?,
        ),
    };

    let projects = service.list_projects(category).await?;
    Ok(Json(ApiResponse::success(Some(projects), None)))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(
        ("id" = String, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "Project found", body = ApiResponse<PortfolioProject>),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    tag = "content"
)]
pub async fn get_project(
    State(service): State<Arc<ContentService<PortfolioProject>>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PortfolioProject>>> {
    let project = service.get(&id).await?;
    Ok(Json(ApiResponse::success(Some(project), None)))
}

/// Add a project. The id is generated from its type.
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    request_body = PortfolioProject,
    responses(
        (status = 200, description = "Project created, or success=false on validation failure", body = ApiResponse<PortfolioProject>),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 401, description = "Missing or wrong credentials")
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "admin"
)]
pub async fn create_project(
    State(service): State<Arc<ContentService<PortfolioProject>>>,
    AppJson(project): AppJson<PortfolioProject>,
) -> Result<Json<ApiResponse<PortfolioProject>>> {
    let project = service.create(project).await?;
    Ok(Json(ApiResponse::success(
        Some(project),
        Some("Project created successfully".to_string()),
    )))
}

/// Merge the given fields into a project
#[utoipa::path(
    patch,
    path = "/api/admin/projects/{id}",
    params(
        ("id" = String, Path, description = "Project id")
    ),
    request_body(content = Object, description = "Fields to replace"),
    responses(
        (status = 200, description = "Project updated, or success=false on validation failure", body = ApiResponse<PortfolioProject>),
        (status = 401, description = "Missing or wrong credentials"),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "admin"
)]
pub async fn update_project(
    State(service): State<Arc<ContentService<PortfolioProject>>>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<Value>,
) -> Result<Json<ApiResponse<PortfolioProject>>> {
    let project = service.update(&id, patch).await?;
    Ok(Json(ApiResponse::success(
        Some(project),
        Some("Project updated successfully".to_string()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    params(
        ("id" = String, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "Project deleted", body = ApiResponse<DeleteContentResponseDto>),
        (status = 401, description = "Missing or wrong credentials"),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "admin"
)]
pub async fn delete_project(
    State(service): State<Arc<ContentService<PortfolioProject>>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeleteContentResponseDto>>> {
    service.delete(&id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteContentResponseDto { id, deleted: true }),
        Some("Project deleted successfully".to_string()),
    )))
}
