use crate::error::AppError;
use gallery_core::{ApiConfig, ImageHostConfig, ValidationRules};
use serde::Deserialize;
use std::io::ErrorKind;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "GALLERY_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "gallery.toml";

const API_URL_ENV: &str = "GALLERY_API_URL";
const IMGBB_KEY_ENV: &str = "GALLERY_IMGBB_KEY";

/// Application configuration, read from `gallery.toml`
///
/// ```toml
/// api_base_url = "http://localhost:3000"
/// request_timeout_secs = 30
///
/// [image_host]
/// endpoint = "https://api.imgbb.com/1/upload"
/// api_key = "..."
///
/// [upload]
/// max_file_size_bytes = 10000
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub image_host: ImageHostSettings,
    pub upload: UploadSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImageHostSettings {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UploadSettings {
    /// Picked files must be strictly smaller than this
    pub max_file_size_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            request_timeout_secs: 30,
            image_host: ImageHostSettings::default(),
            upload: UploadSettings::default(),
        }
    }
}

impl Default for ImageHostSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.imgbb.com/1/upload".to_string(),
            api_key: String::new(),
        }
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_file_size_bytes: ValidationRules::default().max_file_size_bytes,
        }
    }
}

impl AppConfig {
    /// Loads the configuration file if there is one, then applies environment overrides
    pub fn load() -> Result<Self, AppError> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut config = match std::fs::read_to_string(&path) {
            Ok(text) => {
                log::info!("Loading configuration from {}", path);
                Self::from_toml(&text)?
            }
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::Unsupported) => {
                log::info!("No configuration at {}, using defaults", path);
                Self::default()
            }
            Err(e) => return Err(e.into()),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(text)?)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV) {
            self.api_base_url = url;
        }
        if let Some(key) = lookup(IMGBB_KEY_ENV) {
            self.image_host.api_key = key;
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Config("api_base_url must not be empty".to_string()));
        }
        if self.upload.max_file_size_bytes == 0 {
            return Err(AppError::Config(
                "upload.max_file_size_bytes must be positive".to_string(),
            ));
        }
        if self.image_host.api_key.is_empty() {
            log::warn!("No image host API key configured; uploads will fail");
        }
        Ok(())
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base_url.clone(),
            timeout_secs: self.request_timeout_secs,
        }
    }

    pub fn image_host_config(&self) -> ImageHostConfig {
        ImageHostConfig {
            endpoint: self.image_host.endpoint.clone(),
            api_key: self.image_host.api_key.clone(),
            timeout_secs: self.request_timeout_secs,
        }
    }

    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules::default().with_max_file_size(self.upload.max_file_size_bytes)
    }
}
