use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::shared::constants::{DESIGN_ID_PREFIX, PROJECT_ID_PREFIX};
use crate::shared::types::Category;
use crate::shared::validation::CONTENT_ID_REGEX;

/// Engineering project shown in the featured section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegularProject {
    #[serde(default)]
    #[validate(regex(path = *CONTENT_ID_REGEX, message = "Invalid id"))]
    pub id: String,
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    pub description: String,
    /// Cover image path, usually under `/uploads/projects/`
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub duration: String,
    pub team: String,
    pub impact: String,
    /// Display category, e.g. "Industrial Design"
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Live URL must be a valid URL"))]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "GitHub URL must be a valid URL"))]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i32,
}

/// Mechanical design entry shown in the designs gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignProject {
    #[serde(default)]
    #[validate(regex(path = *CONTENT_ID_REGEX, message = "Invalid id"))]
    pub id: String,
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    /// Free text, e.g. "2024-2025"
    pub year: String,
    pub status: String,
    #[serde(default)]
    pub specifications: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i32,
}

/// Portfolio entry, discriminated by `type` ("projects" or "designs")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type")]
pub enum PortfolioProject {
    #[serde(rename = "projects")]
    Regular(RegularProject),
    #[serde(rename = "designs")]
    Design(DesignProject),
}

impl PortfolioProject {
    pub fn category(&self) -> Category {
        match self {
            PortfolioProject::Regular(_) => Category::Projects,
            PortfolioProject::Design(_) => Category::Designs,
        }
    }

    pub fn order(&self) -> i32 {
        match self {
            PortfolioProject::Regular(p) => p.order,
            PortfolioProject::Design(p) => p.order,
        }
    }
}

impl Validate for PortfolioProject {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            PortfolioProject::Regular(p) => p.validate(),
            PortfolioProject::Design(p) => p.validate(),
        }
    }
}

impl super::ContentItem for PortfolioProject {
    const COLLECTION: &'static str = "projects";
    const LABEL: &'static str = "Project";

    fn id(&self) -> &str {
        match self {
            PortfolioProject::Regular(p) => &p.id,
            PortfolioProject::Design(p) => &p.id,
        }
    }

    fn set_id(&mut self, id: String) {
        match self {
            PortfolioProject::Regular(p) => p.id = id,
            PortfolioProject::Design(p) => p.id = id,
        }
    }

    fn id_prefix(&self) -> &'static str {
        match self {
            PortfolioProject::Regular(_) => PROJECT_ID_PREFIX,
            PortfolioProject::Design(_) => DESIGN_ID_PREFIX,
        }
    }
}
