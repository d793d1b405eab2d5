use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use axum::body::Bytes;
use chrono::Utc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::core::error::{AppError, Result};
use crate::features::uploads::dtos::{
    FILE_TOO_LARGE, INVALID_FILE_TYPE, LIST_FAILED, UPLOAD_FAILED,
};
use crate::features::uploads::models::{generate_filename, ListedFile, StoredFile};
use crate::shared::constants::{ALLOWED_IMAGE_MIME_TYPES, MAX_FILE_SIZE, PARTIAL_UPLOAD_SUFFIX};
use crate::shared::types::Category;
use crate::shared::validation::IMAGE_FILENAME_REGEX;

/// Attempts at finding an unused name before giving up
const NAME_ATTEMPTS: usize = 3;

/// An image received from a client, not yet validated
#[derive(Debug, Clone)]
pub struct NewUpload {
    pub original_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Category-partitioned image store on the local filesystem
///
/// The directory tree is the only source of truth: nothing is indexed, and
/// listings are computed from the directory at request time.
pub struct UploadService {
    root: PathBuf,
    url_prefix: String,
}

impl UploadService {
    /// `root` holds one sub-directory per category; `url_prefix` is where
    /// `root` is served (e.g. "/uploads")
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.as_str())
    }

    fn public_url(&self, category: Category, filename: &str) -> String {
        format!("{}/{}/{}", self.url_prefix, category, filename)
    }

    /// Check MIME type then size. Runs before any filesystem access.
    pub fn validate(upload: &NewUpload) -> Result<()> {
        let mime = normalize_mime(&upload.content_type);
        if !ALLOWED_IMAGE_MIME_TYPES.contains(&mime.as_str()) {
            return Err(AppError::Validation(INVALID_FILE_TYPE.to_string()));
        }

        if upload.data.len() > MAX_FILE_SIZE {
            return Err(AppError::Validation(FILE_TOO_LARGE.to_string()));
        }

        Ok(())
    }

    /// Validate and persist an image under its category directory
    ///
    /// The bytes are written to `<name>.part` and renamed into place, so a
    /// failed write never leaves a listable file behind.
    pub async fn store(&self, upload: NewUpload, category: Category) -> Result<StoredFile> {
        Self::validate(&upload)?;

        let dir = self.category_dir(category);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::storage(UPLOAD_FAILED, e))?;

        let mime = normalize_mime(&upload.content_type);
        let filename = self.unused_name(&dir, &upload.original_name, &mime).await?;
        let final_path = dir.join(&filename);
        let part_path = dir.join(format!("{}{}", filename, PARTIAL_UPLOAD_SUFFIX));

        if let Err(e) = write_new_file(&part_path, &upload.data).await {
            discard(&part_path).await;
            return Err(AppError::storage(UPLOAD_FAILED, e));
        }

        if let Err(e) = fs::rename(&part_path, &final_path).await {
            discard(&part_path).await;
            return Err(AppError::storage(UPLOAD_FAILED, e));
        }

        let stored = StoredFile {
            url: self.public_url(category, &filename),
            filename,
            category,
            size_bytes: upload.data.len() as u64,
            mime_type: upload.content_type,
        };

        info!(
            "File stored: category={}, filename={}, size={}, original={}",
            stored.category, stored.filename, stored.size_bytes, upload.original_name
        );

        Ok(stored)
    }

    async fn unused_name(&self, dir: &Path, original_name: &str, mime: &str) -> Result<String> {
        for _ in 0..NAME_ATTEMPTS {
            let candidate = generate_filename(original_name, mime, Utc::now());
            let taken = fs::try_exists(dir.join(&candidate))
                .await
                .map_err(|e| AppError::storage(UPLOAD_FAILED, e))?;
            if !taken {
                return Ok(candidate);
            }
            warn!("Generated file name already taken: {}", candidate);
        }

        Err(AppError::storage(
            UPLOAD_FAILED,
            std::io::Error::new(ErrorKind::AlreadyExists, "no unused file name available"),
        ))
    }

    /// Enumerate the images stored for a category
    ///
    /// A category that has never received an upload lists as empty. Order is
    /// whatever the filesystem yields.
    pub async fn list(&self, category: Category) -> Result<Vec<ListedFile>> {
        let dir = self.category_dir(category);

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Upload directory does not exist yet: {}", dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(AppError::storage(LIST_FAILED, e)),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AppError::storage(LIST_FAILED, e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| AppError::storage(LIST_FAILED, e))?;
            if !file_type.is_file() {
                continue;
            }

            let Ok(filename) = entry.file_name().into_string() else {
                continue;
            };
            if !IMAGE_FILENAME_REGEX.is_match(&filename) {
                continue;
            }

            files.push(ListedFile {
                url: self.public_url(category, &filename),
                filename,
                category,
            });
        }

        debug!("Listed {} files for category {}", files.len(), category);

        Ok(files)
    }
}

/// Lowercased MIME type without parameters
fn normalize_mime(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

async fn write_new_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(data).await?;
    file.sync_all().await?;
    Ok(())
}

async fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        if e.kind() != ErrorKind::NotFound {
            warn!("Failed to remove partial upload {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::collections::HashSet;
    use std::sync::Arc;

    /// `<epoch-ms>_<token>.<ext>`
    fn generated_name_regex() -> Regex {
        Regex::new(r"^\d+_[a-z0-9]+\.[a-z0-9]+$").unwrap()
    }

    fn png(name: &str, len: usize) -> NewUpload {
        NewUpload {
            original_name: name.to_string(),
            content_type: "image/png".to_string(),
            data: Bytes::from(vec![7u8; len]),
        }
    }

    fn service(dir: &tempfile::TempDir) -> UploadService {
        UploadService::new(dir.path().join("uploads"), "/uploads")
    }

    #[tokio::test]
    async fn test_store_writes_bytes_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let upload = NewUpload {
            original_name: "photo.png".to_string(),
            content_type: "image/png".to_string(),
            data: Bytes::from_static(b"\x89PNG\r\n\x1a\nrest-of-image"),
        };
        let stored = service
            .store(upload.clone(), Category::Projects)
            .await
            .unwrap();

        assert!(generated_name_regex().is_match(&stored.filename));
        assert!(stored.filename.ends_with(".png"));
        assert_eq!(stored.url, format!("/uploads/projects/{}", stored.filename));
        assert_eq!(stored.size_bytes, upload.data.len() as u64);
        assert_eq!(stored.mime_type, "image/png");

        let on_disk = fs::read(service.root().join("projects").join(&stored.filename))
            .await
            .unwrap();
        assert_eq!(on_disk, upload.data.to_vec());
    }

    #[tokio::test]
    async fn test_store_rejects_disallowed_mime_without_io() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let upload = NewUpload {
            original_name: "doc.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            data: Bytes::from_static(b"%PDF"),
        };
        let err = service.store(upload, Category::Projects).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(ref m) if m == INVALID_FILE_TYPE));
        assert!(!service.root().exists());
    }

    #[tokio::test]
    async fn test_store_rejects_type_before_size() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let upload = NewUpload {
            original_name: "big.bmp".to_string(),
            content_type: "image/bmp".to_string(),
            data: Bytes::from(vec![0u8; MAX_FILE_SIZE + 1]),
        };
        let err = service.store(upload, Category::Designs).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == INVALID_FILE_TYPE));
    }

    #[tokio::test]
    async fn test_store_rejects_oversized_file_without_io() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let err = service
            .store(png("huge.png", MAX_FILE_SIZE + 1), Category::Designs)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref m) if m == FILE_TOO_LARGE));
        assert!(!service.root().exists());
    }

    #[tokio::test]
    async fn test_store_accepts_file_at_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let stored = service
            .store(png("edge.png", MAX_FILE_SIZE), Category::Designs)
            .await
            .unwrap();
        assert_eq!(stored.size_bytes, MAX_FILE_SIZE as u64);
    }

    #[test]
    fn test_validate_normalizes_mime_parameters() {
        let upload = NewUpload {
            original_name: "a.jpg".to_string(),
            content_type: "Image/JPEG; charset=binary".to_string(),
            data: Bytes::from_static(b"x"),
        };
        assert!(UploadService::validate(&upload).is_ok());

        for mime in ["image/jpg", "image/webp", "image/gif", "image/png"] {
            let upload = NewUpload {
                content_type: mime.to_string(),
                ..upload.clone()
            };
            assert!(UploadService::validate(&upload).is_ok(), "{}", mime);
        }

        for mime in ["image/svg+xml", "text/plain", "", "application/octet-stream"] {
            let upload = NewUpload {
                content_type: mime.to_string(),
                ..upload.clone()
            };
            assert!(UploadService::validate(&upload).is_err(), "{}", mime);
        }
    }

    #[tokio::test]
    async fn test_list_missing_category_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let files = service.list(Category::Designs).await.unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_to_images_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        let projects = service.root().join("projects");
        fs::create_dir_all(projects.join("nested.png")).await.unwrap();
        for name in ["a.JPG", "b.webp", "notes.txt", "c.gif.part", "d.Jpeg"] {
            fs::write(projects.join(name), b"x").await.unwrap();
        }

        let mut names: Vec<String> = service
            .list(Category::Projects)
            .await
            .unwrap()
            .into_iter()
            .map(|f| {
                assert_eq!(f.url, format!("/uploads/projects/{}", f.filename));
                assert_eq!(f.category, Category::Projects);
                f.filename
            })
            .collect();
        names.sort();

        assert_eq!(names, vec!["a.JPG", "b.webp", "d.Jpeg"]);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_category() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let stored = service
            .store(png("p.png", 16), Category::Projects)
            .await
            .unwrap();

        let projects = service.list(Category::Projects).await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].filename, stored.filename);
        assert!(service.list(Category::Designs).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_stores_never_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let service = Arc::new(service(&dir));

        let handles: Vec<_> = (0..16u8)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    let upload = NewUpload {
                        original_name: format!("img{}.png", i),
                        content_type: "image/png".to_string(),
                        data: Bytes::from(vec![i; 64]),
                    };
                    let stored = service.store(upload, Category::Projects).await.unwrap();
                    (i, stored)
                })
            })
            .collect();

        let mut names = HashSet::new();
        for handle in handles {
            let (i, stored) = handle.await.unwrap();
            let bytes = fs::read(service.root().join("projects").join(&stored.filename))
                .await
                .unwrap();
            assert_eq!(bytes, vec![i; 64]);
            assert!(names.insert(stored.filename));
        }

        assert_eq!(service.list(Category::Projects).await.unwrap().len(), 16);
    }

    #[tokio::test]
    async fn test_trailing_slash_in_prefix_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadService::new(dir.path(), "/static/uploads/");
        let stored = service
            .store(png("x.png", 4), Category::Designs)
            .await
            .unwrap();
        assert!(stored.url.starts_with("/static/uploads/designs/"));
    }
}
