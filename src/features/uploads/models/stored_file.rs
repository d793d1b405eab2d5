use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::types::Category;

/// Image extensions that survive a directory listing
const LISTABLE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Length of the random part of a generated file name
const TOKEN_LEN: usize = 13;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A persisted upload. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub filename: String,
    pub url: String,
    pub category: Category,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// A file found while enumerating a category directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    pub filename: String,
    pub url: String,
    pub category: Category,
}

/// Build a collision-resistant name: `<epoch-ms>_<token>.<ext>`
pub fn generate_filename(original_name: &str, mime_type: &str, now: DateTime<Utc>) -> String {
    let extension = listable_extension(original_name)
        .unwrap_or_else(|| extension_for_mime(mime_type).to_string());

    format!(
        "{}_{}.{}",
        now.timestamp_millis(),
        random_token(),
        extension
    )
}

/// Lowercased extension of `name` when it is one we list back
fn listable_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    LISTABLE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Canonical extension for an allowed image MIME type
fn extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "bin",
    }
}

/// 13 lowercase base-36 characters taken from a v4 UUID
fn random_token() -> String {
    let mut value = Uuid::new_v4().as_u128();
    let mut token = String::with_capacity(TOKEN_LEN);
    for _ in 0..TOKEN_LEN {
        token.push(BASE36[(value % 36) as usize] as char);
        value /= 36;
    }
    token
}
