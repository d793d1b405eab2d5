/// Maximum accepted upload size in bytes (10MB)
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Extra body allowance for multipart framing on top of `MAX_FILE_SIZE`
pub const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Allowed MIME types for image uploads
pub const ALLOWED_IMAGE_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

/// Suffix of an upload still being written; never served
pub const PARTIAL_UPLOAD_SUFFIX: &str = ".part";

/// Sentinel used when the client address cannot be determined
pub const UNKNOWN_CLIENT_IP: &str = "unknown";

// =============================================================================
// CONTENT ID PREFIXES
// =============================================================================

pub const PROJECT_ID_PREFIX: &str = "proj";
pub const DESIGN_ID_PREFIX: &str = "design";
pub const CERTIFICATION_ID_PREFIX: &str = "cert";
pub const ORGANIZATION_ID_PREFIX: &str = "org";
