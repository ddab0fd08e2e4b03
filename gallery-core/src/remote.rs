//! HTTP clients for the gallery API and the image host

use crate::error::ApiError;
use crate::models::{CreateImageRequest, GalleryPage, ImageFile};
use crate::store::{ImageHost, ImageStore};
use async_trait::async_trait;
use serde::Deserialize;

const USER_AGENT: &str = "ImageGallery/0.1.0";

/// Connection settings of the gallery API
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }
}

/// Connection settings of the image host
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHostConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

fn build_client(timeout_secs: u64) -> Result<reqwest::Client, ApiError> {
    let builder = reqwest::Client::builder();

    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .connect_timeout(std::time::Duration::from_secs(10))
        .user_agent(USER_AGENT);

    #[cfg(target_arch = "wasm32")]
    let _ = (timeout_secs, USER_AGENT);

    builder
        .build()
        .map_err(|e| ApiError::Config(format!("Client build failed: {}", e)))
}

fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

/// Gallery API client
#[derive(Debug, Clone)]
pub struct RestImageStore {
    client: reqwest::Client,
    images_url: String,
}

impl RestImageStore {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_client(config.timeout_secs)?,
            images_url: format!("{}/api/images", config.base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait(?Send)]
impl ImageStore for RestImageStore {
    async fn list_images(&self, after: Option<&str>) -> Result<GalleryPage, ApiError> {
        let mut request = self
            .client
            .get(&self.images_url)
            .header("Accept", "application/json");
        if let Some(cursor) = after {
            request = request.query(&[("after", cursor)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Request failed: {}", e)))?;
        check_status(&response)?;

        response
            .json::<GalleryPage>()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse page: {}", e)))
    }

    async fn create_image(&self, request: &CreateImageRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(&self.images_url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Request failed: {}", e)))?;

        check_status(&response)
    }
}

#[derive(Debug, Deserialize)]
struct HostResponse {
    data: HostedImage,
}

#[derive(Debug, Deserialize)]
struct HostedImage {
    url: String,
}

/// Client for imgbb-compatible image hosts
#[derive(Debug, Clone)]
pub struct ImgbbHost {
    client: reqwest::Client,
    config: ImageHostConfig,
}

impl ImgbbHost {
    pub fn new(config: ImageHostConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_client(config.timeout_secs)?,
            config,
        })
    }
}

#[async_trait(?Send)]
impl ImageHost for ImgbbHost {
    async fn host_image(&self, file: &ImageFile) -> Result<String, ApiError> {
        if self.config.api_key.is_empty() {
            return Err(ApiError::Config("No image host API key configured".to_string()));
        }

        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(file.mime_type())
            .map_err(|e| ApiError::Config(format!("Invalid mime type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(&self.config.endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Upload failed: {}", e)))?;
        check_status(&response)?;

        let hosted = response
            .json::<HostResponse>()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse host response: {}", e)))?;

        Ok(hosted.data.url)
    }
}
