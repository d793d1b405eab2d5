use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::uploads::models::{ListedFile, StoredFile};
use crate::shared::types::Category;

pub const NO_FILE_UPLOADED: &str = "No file uploaded";
pub const INVALID_UPLOAD_TYPE: &str = "Invalid upload type";
pub const INVALID_FILE_TYPE: &str =
    "Invalid file type. Only JPEG, PNG, WebP, and GIF files are allowed.";
pub const FILE_TOO_LARGE: &str = "File too large. Maximum size is 10MB.";
pub const UPLOAD_FAILED: &str = "Failed to upload file";
pub const INVALID_TYPE_PARAMETER: &str = "Invalid type parameter";
pub const LIST_FAILED: &str = "Failed to list files";

/// Upload form for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct UploadFileDto {
    /// The image to upload (JPEG, PNG, WebP or GIF, at most 10MB)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Target category: "projects" or "designs"
    #[serde(rename = "type")]
    #[schema(example = "projects")]
    pub category: String,
}

/// Successful upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponseDto {
    pub success: bool,
    /// Public path of the stored file
    #[schema(example = "/uploads/projects/1700000000000_k2j4h5g6f7d8s.png")]
    pub url: String,
    /// Generated file name
    pub filename: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type as sent by the client
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl From<StoredFile> for UploadResponseDto {
    fn from(file: StoredFile) -> Self {
        Self {
            success: true,
            url: file.url,
            filename: file.filename,
            size: file.size_bytes,
            mime_type: file.mime_type,
        }
    }
}

/// Query for listing uploads
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListFilesQuery {
    /// Category to list: "projects" or "designs"
    #[serde(rename = "type")]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileEntryDto {
    pub filename: String,
    pub url: String,
    #[serde(rename = "type")]
    pub category: Category,
}

impl From<ListedFile> for FileEntryDto {
    fn from(file: ListedFile) -> Self {
        Self {
            filename: file.filename,
            url: file.url,
            category: file.category,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListFilesResponseDto {
    pub success: bool,
    pub files: Vec<FileEntryDto>,
}
