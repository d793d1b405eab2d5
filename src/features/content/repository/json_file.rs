use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use validator::Validate;

use super::ContentRepository;
use crate::core::error::{AppError, Result};
use crate::features::content::dtos::{CONTENT_LOAD_FAILED, CONTENT_SAVE_FAILED};
use crate::features::content::models::ContentItem;

/// Content collection kept in memory and mirrored to `<dir>/<collection>.json`
///
/// Every mutation rewrites the whole file through a temporary sibling and a
/// rename, and only touches the cache once the file is in place.
pub struct JsonFileRepository<T> {
    path: PathBuf,
    items: RwLock<Vec<T>>,
}

impl<T: ContentItem> JsonFileRepository<T> {
    /// Load the collection from `dir`. A missing file is an empty collection.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(format!("{}.json", T::COLLECTION));

        let items: Vec<T> = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::storage(
                    CONTENT_LOAD_FAILED,
                    io::Error::new(io::ErrorKind::InvalidData, e),
                )
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(AppError::storage(CONTENT_LOAD_FAILED, e)),
        };

        let count = items.len();
        let repository = Self {
            path,
            items: RwLock::new(items),
        };

        info!(
            collection = T::COLLECTION,
            count,
            path = %repository.path().display(),
            "Loaded content collection"
        );

        Ok(repository)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, items: &[T]) -> Result<()> {
        let json = serde_json::to_vec_pretty(items)
            .map_err(|e| AppError::storage(CONTENT_SAVE_FAILED, io::Error::other(e)))?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| AppError::storage(CONTENT_SAVE_FAILED, e))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        if let Err(e) = write_synced(&tmp_path, &json).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(AppError::storage(CONTENT_SAVE_FAILED, e));
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(AppError::storage(CONTENT_SAVE_FAILED, e));
        }

        debug!(collection = T::COLLECTION, count = items.len(), "Saved content collection");
        Ok(())
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

/// `<prefix>-<epoch-ms>`, moved forward one millisecond at a time while taken
fn next_id<T: ContentItem>(items: &[T], prefix: &str) -> String {
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let id = format!("{}-{}", prefix, millis);
        if !items.iter().any(|item| item.id() == id) {
            return id;
        }
        millis += 1;
    }
}

fn validate_item<T: ContentItem>(item: &T) -> Result<()> {
    item.validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}

#[async_trait]
impl<T: ContentItem> ContentRepository<T> for JsonFileRepository<T> {
    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<T>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn add(&self, mut item: T) -> Result<T> {
        let mut items = self.items.write().await;

        item.set_id(next_id(&items, item.id_prefix()));
        validate_item(&item)?;

        let mut next = items.clone();
        next.push(item.clone());
        self.persist(&next).await?;
        *items = next;

        info!(collection = T::COLLECTION, id = %item.id(), "Content item added");
        Ok(item)
    }

    async fn update(&self, id: &str, patch: Value) -> Result<Option<T>> {
        let Value::Object(patch) = patch else {
            return Err(AppError::Validation(
                "Update must be a JSON object".to_string(),
            ));
        };

        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|item| item.id() == id) else {
            return Ok(None);
        };

        let mut merged = serde_json::to_value(&items[index])
            .map_err(|e| AppError::Internal(format!("Failed to serialize content item: {}", e)))?;
        if let Value::Object(fields) = &mut merged {
            for (key, value) in patch {
                fields.insert(key, value);
            }
        }

        let mut updated: T = serde_json::from_value(merged)
            .map_err(|e| AppError::Validation(format!("Invalid update: {}", e)))?;
        updated.set_id(id.to_string());
        // The id prefix is tied to the variant the item was created as
        if updated.id_prefix() != items[index].id_prefix() {
            return Err(AppError::Validation(format!(
                "{} type cannot be changed",
                T::LABEL
            )));
        }
        validate_item(&updated)?;

        let mut next = items.clone();
        next[index] = updated.clone();
        self.persist(&next).await?;
        *items = next;

        info!(collection = T::COLLECTION, id = %id, "Content item updated");
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|item| item.id() == id) else {
            warn!(collection = T::COLLECTION, id = %id, "Delete of unknown content item");
            return Ok(false);
        };

        let mut next = items.clone();
        next.remove(index);
        self.persist(&next).await?;
        *items = next;

        info!(collection = T::COLLECTION, id = %id, "Content item deleted");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::content::models::{Certification, PortfolioProject};
    use serde_json::json;
    use tempfile::TempDir;

    fn certification(name: &str) -> Certification {
        serde_json::from_value(json!({
            "name": name,
            "issuer": "Dassault Systemes",
            "date": "August 18, 2024",
            "description": "CAD fundamentals"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_collection() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<Certification>::open(temp_dir.path())
            .await
            .unwrap();

        assert!(repo.list().await.unwrap().is_empty());
        assert!(!repo.path().exists());
    }

    #[tokio::test]
    async fn test_add_assigns_prefixed_id_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<Certification>::open(temp_dir.path())
            .await
            .unwrap();

        let first = repo.add(certification("CAD Associate")).await.unwrap();
        let second = repo.add(certification("AM Associate")).await.unwrap();

        assert!(first.id.starts_with("cert-"));
        assert_ne!(first.id, second.id);

        let reopened = JsonFileRepository::<Certification>::open(temp_dir.path())
            .await
            .unwrap();
        let items = reopened.list().await.unwrap();
        assert_eq!(items, vec![first, second]);
        assert!(!temp_dir.path().join("certifications.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_item() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<Certification>::open(temp_dir.path())
            .await
            .unwrap();

        let err = repo.add(certification("")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(repo.list().await.unwrap().is_empty());
        assert!(!repo.path().exists());
    }

    #[tokio::test]
    async fn test_update_merges_and_keeps_id() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<Certification>::open(temp_dir.path())
            .await
            .unwrap();
        let added = repo.add(certification("CAD Associate")).await.unwrap();

        let updated = repo
            .update(
                &added.id,
                json!({"issuer": "SOLIDWORKS", "id": "cert-other", "credentialId": "C-1"}),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, added.id);
        assert_eq!(updated.name, "CAD Associate");
        assert_eq!(updated.issuer, "SOLIDWORKS");
        assert_eq!(updated.credential_id.as_deref(), Some("C-1"));
        assert_eq!(repo.get(&added.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_result() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<Certification>::open(temp_dir.path())
            .await
            .unwrap();
        let added = repo.add(certification("CAD Associate")).await.unwrap();

        let err = repo
            .update(&added.id, json!({"credentialUrl": "not a url"}))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = repo.update(&added.id, json!(["name"])).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        assert_eq!(repo.get(&added.id).await.unwrap(), Some(added));
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<Certification>::open(temp_dir.path())
            .await
            .unwrap();

        assert!(repo
            .update("cert-missing", json!({"name": "x"}))
            .await
            .unwrap()
            .is_none());
        assert!(!repo.delete("cert-missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_removes_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<Certification>::open(temp_dir.path())
            .await
            .unwrap();
        let added = repo.add(certification("CAD Associate")).await.unwrap();

        assert!(repo.delete(&added.id).await.unwrap());

        let reopened = JsonFileRepository::<Certification>::open(temp_dir.path())
            .await
            .unwrap();
        assert!(reopened.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_project_prefix_follows_variant() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<PortfolioProject>::open(temp_dir.path())
            .await
            .unwrap();

        let design: PortfolioProject = serde_json::from_value(json!({
            "type": "designs",
            "title": "Stirling Engine",
            "description": "Flywheel engine",
            "image": "/photos/stirling.jpg",
            "category": "Mechanical Systems",
            "year": "2024",
            "status": "Completed"
        }))
        .unwrap();

        let added = repo.add(design).await.unwrap();
        assert!(added.id().starts_with("design-"));
        assert!(temp_dir.path().join("projects.json").exists());
    }

    #[tokio::test]
    async fn test_update_rejects_project_type_change() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::<PortfolioProject>::open(temp_dir.path())
            .await
            .unwrap();

        let design: PortfolioProject = serde_json::from_value(json!({
            "type": "designs",
            "title": "Stirling Engine",
            "description": "Flywheel engine",
            "image": "/photos/stirling.jpg",
            "category": "Mechanical Systems",
            "year": "2024",
            "status": "Completed"
        }))
        .unwrap();
        let added = repo.add(design).await.unwrap();

        let err = repo
            .update(
                added.id(),
                json!({
                    "type": "projects",
                    "duration": "3 months",
                    "team": "Solo",
                    "impact": "Prototype"
                }),
            )
            .await
            .unwrap_err();
        match err {
            AppError::Validation(message) => assert_eq!(message, "Project type cannot be changed"),
            other => panic!("unexpected error: {:?}", other),
        }

        let stored = repo.get(added.id()).await.unwrap().unwrap();
        assert_eq!(stored, added);
        assert!(matches!(stored, PortfolioProject::Design(_)));

        let renamed = repo
            .update(added.id(), json!({"type": "designs", "title": "Stirling Engine v2"}))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.id(), added.id());
    }

    #[tokio::test]
    async fn test_corrupt_file_fails_to_open() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("certifications.json"), b"{oops").unwrap();

        let result = JsonFileRepository::<Certification>::open(temp_dir.path()).await;
        assert!(matches!(result, Err(AppError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_adds_get_distinct_ids() {
        let temp_dir = TempDir::new().unwrap();
        let repo = std::sync::Arc::new(
            JsonFileRepository::<Certification>::open(temp_dir.path())
                .await
                .unwrap(),
        );

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.add(certification(&format!("Cert {}", i))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(repo.list().await.unwrap().len(), 8);
    }
}
