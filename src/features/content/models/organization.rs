use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::constants::ORGANIZATION_ID_PREFIX;
use crate::shared::validation::{CONTENT_ID_REGEX, YEAR_MONTH_REGEX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrganizationKind {
    Professional,
    Academic,
    Volunteer,
    Other,
}

/// Membership in a company, university or association
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default)]
    #[validate(regex(path = *CONTENT_ID_REGEX, message = "Invalid id"))]
    pub id: String,
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 200, message = "Role is required"))]
    pub role: String,
    #[serde(rename = "type")]
    pub kind: OrganizationKind,
    /// "YYYY-MM"
    #[validate(regex(path = *YEAR_MONTH_REGEX, message = "Start date must be YYYY-MM"))]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *YEAR_MONTH_REGEX, message = "End date must be YYYY-MM"))]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub current: bool,
}

impl super::ContentItem for Organization {
    const COLLECTION: &'static str = "organizations";
    const LABEL: &'static str = "Organization";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn id_prefix(&self) -> &'static str {
        ORGANIZATION_ID_PREFIX
    }
}
