//! Upload flow of the "add image" dialog
//!
//! Picking a file hosts it right away ([`UploadFlow::attach_file`]); the form
//! submit then only creates the gallery entry pointing at the hosted URL
//! ([`UploadFlow::submit`]).

use crate::error::UploadError;
use crate::models::{ImageFile, Notification, UploadDraft};
use crate::store::{ImageHost, ImageStore};
use crate::validation::{FieldError, FieldErrors, ValidatedDraft, ValidationRules};

pub struct UploadFlow<S> {
    store: S,
    rules: ValidationRules,
}

impl<S: ImageStore> UploadFlow<S> {
    pub fn new(store: S, rules: ValidationRules) -> Self {
        Self { store, rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validates a freshly picked file and hands it to the image host
    pub async fn attach_file<H: ImageHost + ?Sized>(
        &self,
        host: &H,
        file: &ImageFile,
    ) -> Result<String, FieldError> {
        self.rules.validate_file(Some(file))?;

        match host.host_image(file).await {
            Ok(url) => {
                log::info!("Image '{}' hosted at {}", file.name, url);
                Ok(url)
            }
            Err(e) => {
                log::error!("Hosting image '{}' failed: {}", file.name, e);
                Err(FieldError::UploadFailed)
            }
        }
    }

    /// Submits the draft.
    ///
    /// Field errors are returned without touching anything else. Once the
    /// fields are valid the dialog is closed exactly once via `close`, whatever
    /// the outcome, and `invalidate` runs only after the image was created.
    pub async fn submit<I, C>(
        &self,
        draft: UploadDraft,
        invalidate: I,
        close: C,
    ) -> Result<Notification, FieldErrors>
    where
        I: FnOnce(),
        C: FnOnce(),
    {
        let validated = self.rules.validate(&draft)?;

        let notification = match self.create(validated).await {
            Ok(()) => {
                invalidate();
                Notification::image_created()
            }
            Err(UploadError::ImageMissing) => {
                log::warn!("Submission without a hosted image");
                Notification::image_missing()
            }
            Err(e) => {
                log::error!("{}", e);
                Notification::submission_failed()
            }
        };

        close();
        Ok(notification)
    }

    async fn create(&self, validated: ValidatedDraft) -> Result<(), UploadError> {
        let request = validated.into_request()?;
        log::debug!("Creating image '{}'", request.title);
        self.store.create_image(&request).await?;
        log::info!("Image '{}' created", request.title);
        Ok(())
    }
}
