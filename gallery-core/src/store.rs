use crate::error::ApiError;
use crate::models::{CreateImageRequest, GalleryPage, ImageFile};
use crate::query::FetchTicket;
use async_trait::async_trait;

/// Remote collection of gallery images
///
/// Futures are not required to be `Send`; everything runs on the UI's
/// single-threaded executor (and the browser's on wasm).
#[async_trait(?Send)]
pub trait ImageStore {
    /// `GET /api/images`, passing `after` when present
    async fn list_images(&self, after: Option<&str>) -> Result<GalleryPage, ApiError>;

    /// `POST /api/images`
    async fn create_image(&self, request: &CreateImageRequest) -> Result<(), ApiError>;
}

/// Service that hosts a picked file and returns its public URL
#[async_trait(?Send)]
pub trait ImageHost {
    async fn host_image(&self, file: &ImageFile) -> Result<String, ApiError>;
}

/// Runs the request a ticket stands for
pub async fn fetch_page<S: ImageStore + ?Sized>(
    store: &S,
    ticket: &FetchTicket,
) -> Result<GalleryPage, ApiError> {
    log::debug!("Fetching gallery page after {:?}", ticket.cursor());
    store.list_images(ticket.cursor()).await
}
