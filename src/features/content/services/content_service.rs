use std::sync::Arc;

use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::features::content::models::{ContentItem, PortfolioProject};
use crate::features::content::repository::ContentRepository;
use crate::shared::types::Category;

/// CRUD over one content collection
pub struct ContentService<T: ContentItem> {
    repository: Arc<dyn ContentRepository<T>>,
}

impl<T: ContentItem> ContentService<T> {
    pub fn new(repository: Arc<dyn ContentRepository<T>>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<T>> {
        self.repository.list().await
    }

    pub async fn get(&self, id: &str) -> Result<T> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found::<T>(id))
    }

    /// Any client-supplied id is replaced by a generated one
    pub async fn create(&self, item: T) -> Result<T> {
        self.repository.add(item).await
    }

    pub async fn update(&self, id: &str, patch: Value) -> Result<T> {
        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found::<T>(id))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(not_found::<T>(id))
        }
    }
}

impl ContentService<PortfolioProject> {
    /// Projects of one category, or all of them, ordered by `order` then id
    pub async fn list_projects(&self, category: Option<Category>) -> Result<Vec<PortfolioProject>> {
        let mut projects: Vec<PortfolioProject> = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|p| category.map_or(true, |c| p.category() == c))
            .collect();

        projects.sort_by(|a, b| {
            a.order()
                .cmp(&b.order())
                .then_with(|| a.id().cmp(b.id()))
        });

        Ok(projects)
    }
}

fn not_found<T: ContentItem>(id: &str) -> AppError {
    AppError::NotFound(format!("{} '{}' not found", T::LABEL, id))
}
