mod content_service;

pub use content_service::ContentService;

use std::path::Path;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::content::models::{Certification, Organization, PortfolioProject};
use crate::features::content::repository::JsonFileRepository;

/// One service per content collection
#[derive(Clone)]
pub struct ContentServices {
    pub projects: Arc<ContentService<PortfolioProject>>,
    pub certifications: Arc<ContentService<Certification>>,
    pub organizations: Arc<ContentService<Organization>>,
}

impl ContentServices {
    /// Open every collection stored as JSON under `data_dir`
    pub async fn open(data_dir: &Path) -> Result<Self> {
        let projects = JsonFileRepository::<PortfolioProject>::open(data_dir).await?;
        let certifications = JsonFileRepository::<Certification>::open(data_dir).await?;
        let organizations = JsonFileRepository::<Organization>::open(data_dir).await?;

        Ok(Self {
            projects: Arc::new(ContentService::new(Arc::new(projects))),
            certifications: Arc::new(ContentService::new(Arc::new(certifications))),
            organizations: Arc::new(ContentService::new(Arc::new(organizations))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::content::models::ContentItem;
    use crate::shared::types::Category;
    use validator::Validate;

    fn assert_valid<T: ContentItem>(items: &[T]) {
        assert!(!items.is_empty(), "{} is empty", T::COLLECTION);
        for item in items {
            assert!(
                item.validate().is_ok(),
                "{} '{}' is invalid",
                T::LABEL,
                item.id()
            );
        }
    }

    #[tokio::test]
    async fn test_shipped_data_dir_opens_with_valid_items() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let services = ContentServices::open(&data_dir).await.unwrap();

        let projects = services.projects.list().await.unwrap();
        assert_valid(&projects);
        assert_valid(&services.certifications.list().await.unwrap());
        assert_valid(&services.organizations.list().await.unwrap());

        let designs = services
            .projects
            .list_projects(Some(Category::Designs))
            .await
            .unwrap();
        assert!(!designs.is_empty());
        assert!(designs.len() < projects.len());
    }
}
