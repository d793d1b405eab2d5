use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub content: ContentConfig,
    pub notification: NotificationConfig,
    pub admin: AdminConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Local filesystem layout for uploaded images
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory served as static content (uploads live in `<public_dir>/uploads`)
    pub public_dir: PathBuf,
    /// URL prefix under which the uploads directory is served
    pub url_prefix: String,
}

#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Directory holding one JSON file per content collection
    pub data_dir: PathBuf,
}

/// Which backend delivers activity notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Log,
    Webhook,
}

#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub transport: TransportKind,
    /// Address the notification is meant for
    pub recipient: String,
    /// Name shown in the notification footer
    pub owner_name: String,
    pub webhook_url: Option<String>,
    pub webhook_token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            content: ContentConfig::from_env()?,
            notification: NotificationConfig::from_env()?,
            admin: AdminConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        let public_dir = env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());
        if public_dir.trim().is_empty() {
            return Err("PUBLIC_DIR must not be empty".to_string());
        }

        let url_prefix = env::var("UPLOADS_URL_PREFIX").unwrap_or_else(|_| "/uploads".to_string());
        let url_prefix = normalize_url_prefix(&url_prefix)
            .ok_or_else(|| "UPLOADS_URL_PREFIX must be a non-root path like /uploads".to_string())?;

        Ok(Self {
            public_dir: PathBuf::from(public_dir),
            url_prefix,
        })
    }

    /// Root directory for uploaded files
    pub fn uploads_dir(&self) -> PathBuf {
        self.public_dir.join("uploads")
    }
}

/// Turns "uploads", "/uploads/" and "/uploads" into "/uploads"; rejects the root
fn normalize_url_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

impl ContentConfig {
    pub fn from_env() -> Result<Self, String> {
        let data_dir = env::var("CONTENT_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        if data_dir.trim().is_empty() {
            return Err("CONTENT_DATA_DIR must not be empty".to_string());
        }

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
        })
    }
}

impl NotificationConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let transport = match env::var("NOTIFY_TRANSPORT")
            .unwrap_or_else(|_| "log".to_string())
            .to_lowercase()
            .as_str()
        {
            "log" | "" => TransportKind::Log,
            "webhook" => TransportKind::Webhook,
            other => {
                return Err(format!(
                    "NOTIFY_TRANSPORT must be 'log' or 'webhook', got '{}'",
                    other
                ))
            }
        };

        let recipient =
            env::var("NOTIFY_RECIPIENT").unwrap_or_else(|_| "owner@localhost".to_string());
        let owner_name =
            env::var("NOTIFY_OWNER_NAME").unwrap_or_else(|_| "Portfolio Owner".to_string());

        let webhook_url = env::var("NOTIFY_WEBHOOK_URL").ok().filter(|s| !s.is_empty());
        let webhook_token = env::var("NOTIFY_WEBHOOK_TOKEN")
            .ok()
            .filter(|s| !s.is_empty());

        if transport == TransportKind::Webhook && webhook_url.is_none() {
            return Err("NOTIFY_WEBHOOK_URL is required when NOTIFY_TRANSPORT=webhook".to_string());
        }

        let timeout_secs = env::var("NOTIFY_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "NOTIFY_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            transport,
            recipient,
            owner_name,
            webhook_url,
            webhook_token,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("ADMIN_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty());

        Ok(Self { username, password })
    }

    /// Returns credentials in "username:password" format if admin access is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Portfolio API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Uploads, activity tracking and portfolio content".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
