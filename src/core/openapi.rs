use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::activity::{dtos as activity_dtos, handlers as activity_handlers};
use crate::features::content::{
    dtos as content_dtos, handlers as content_handlers, models as content_models,
};
use crate::features::uploads::{dtos as uploads_dtos, handlers as uploads_handlers};
use crate::shared::types::{ApiResponse, Category, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Uploads
        uploads_handlers::upload_file,
        uploads_handlers::list_files,
        // Activity
        activity_handlers::track_activity,
        // Content (public)
        content_handlers::list_projects,
        content_handlers::get_project,
        content_handlers::list_certifications,
        content_handlers::list_organizations,
        // Content (admin)
        content_handlers::create_project,
        content_handlers::update_project,
        content_handlers::delete_project,
        content_handlers::create_certification,
        content_handlers::update_certification,
        content_handlers::delete_certification,
        content_handlers::create_organization,
        content_handlers::update_organization,
        content_handlers::delete_organization,
    ),
    components(
        schemas(
            Category,
            ErrorResponse,
            // Uploads
            uploads_dtos::UploadFileDto,
            uploads_dtos::UploadResponseDto,
            uploads_dtos::FileEntryDto,
            uploads_dtos::ListFilesResponseDto,
            // Activity
            activity_dtos::TrackActivityDto,
            activity_dtos::TrackActivityResponseDto,
            // Content
            content_models::PortfolioProject,
            content_models::RegularProject,
            content_models::DesignProject,
            content_models::Certification,
            content_models::Organization,
            content_models::OrganizationKind,
            content_dtos::DeleteContentResponseDto,
            ApiResponse<Vec<content_models::PortfolioProject>>,
            ApiResponse<content_models::PortfolioProject>,
            ApiResponse<Vec<content_models::Certification>>,
            ApiResponse<content_models::Certification>,
            ApiResponse<Vec<content_models::Organization>>,
            ApiResponse<content_models::Organization>,
            ApiResponse<content_dtos::DeleteContentResponseDto>,
        )
    ),
    tags(
        (name = "uploads", description = "Portfolio image uploads"),
        (name = "activity", description = "Visit and resume download notifications (public)"),
        (name = "content", description = "Projects, certifications and organizations (public)"),
        (name = "admin", description = "Content management (basic auth)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Portfolio API",
        version = "0.1.0",
        description = "API documentation for the portfolio backend",
    )
)]
pub struct ApiDoc;

/// Adds the HTTP basic security scheme used by admin routes
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
