mod json_file;

pub use json_file::JsonFileRepository;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::error::Result;
use crate::features::content::models::ContentItem;

/// Storage seam for a content collection
///
/// `update` and `delete` report a missing id with `None`/`false`; callers
/// decide whether that is an error.
#[async_trait]
pub trait ContentRepository<T: ContentItem>: Send + Sync {
    /// All items in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    async fn get(&self, id: &str) -> Result<Option<T>>;

    /// Assign a fresh id to `item`, validate and persist it
    async fn add(&self, item: T) -> Result<T>;

    /// Shallow-merge a partial JSON object into an item and re-validate it
    async fn update(&self, id: &str, patch: Value) -> Result<Option<T>>;

    async fn delete(&self, id: &str) -> Result<bool>;
}
