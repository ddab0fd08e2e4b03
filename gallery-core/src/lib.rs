//! # Gallery Core
//!
//! UI-independent logic of the image gallery client.
//!
//! This crate provides:
//! - The image data model as served by the gallery REST API
//! - A cursor-based paginated query with an explicit, invalidatable cache
//! - Client-side validation of upload drafts
//! - The upload flow (hosting the file, creating the image, invalidating the gallery)
//! - `reqwest` clients for the gallery API and the image host (feature `remote`)
//!
//! ## Separation of Concerns
//!
//! Nothing in here renders anything. The Dioxus application drives the state
//! machines and translates [`Notification`] keys into text.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use gallery_core::{QueryCache, IMAGES_QUERY, RestImageStore, ApiConfig};
//!
//! let store = RestImageStore::new(ApiConfig::new("http://localhost:3000"))?;
//! let mut cache = QueryCache::new();
//!
//! if let Some(ticket) = cache.query_mut(&IMAGES_QUERY).begin_fetch() {
//!     let result = gallery_core::fetch_page(&store, &ticket).await;
//!     cache.query_mut(&IMAGES_QUERY).resolve(&ticket, result);
//! }
//! ```

pub mod error;
pub mod models;
pub mod query;
pub mod store;
pub mod upload;
pub mod validation;

#[cfg(feature = "remote")]
pub mod remote;

pub use error::{ApiError, UploadError};
pub use models::{
    CreateImageRequest, GalleryPage, Image, ImageFile, Notification, NotificationKind, UploadDraft,
};
pub use query::{FetchTicket, PaginatedQuery, QueryCache, QueryKey, QueryStatus, IMAGES_QUERY};
pub use store::{fetch_page, ImageHost, ImageStore};
pub use upload::UploadFlow;
pub use validation::{FieldError, FieldErrors, ValidatedDraft, ValidationRules};

#[cfg(feature = "remote")]
pub use remote::{ApiConfig, ImageHostConfig, ImgbbHost, RestImageStore};
