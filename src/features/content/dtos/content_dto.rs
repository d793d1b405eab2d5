use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const CONTENT_LOAD_FAILED: &str = "Failed to load content";
pub const CONTENT_SAVE_FAILED: &str = "Failed to save content";
pub const INVALID_PROJECT_TYPE: &str = "Invalid type parameter. Must be \"projects\" or \"designs\"";

/// Query for `GET /api/projects`
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListProjectsQuery {
    /// "projects" or "designs"; all projects when absent
    #[serde(rename = "type")]
    pub category: Option<String>,
}

/// Response DTO for deleting a content item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteContentResponseDto {
    /// Id of the removed item
    pub id: String,
    pub deleted: bool,
}
