use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::constants::CERTIFICATION_ID_PREFIX;
use crate::shared::validation::CONTENT_ID_REGEX;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(default)]
    #[validate(regex(path = *CONTENT_ID_REGEX, message = "Invalid id"))]
    pub id: String,
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 200, message = "Issuer is required"))]
    pub issuer: String,
    /// Issue date as displayed, e.g. "August 18, 2024"
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Credential URL must be a valid URL"))]
    pub credential_url: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl super::ContentItem for Certification {
    const COLLECTION: &'static str = "certifications";
    const LABEL: &'static str = "Certification";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn id_prefix(&self) -> &'static str {
        CERTIFICATION_ID_PREFIX
    }
}
