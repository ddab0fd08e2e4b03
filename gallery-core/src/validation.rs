use crate::error::UploadError;
use crate::models::{CreateImageRequest, ImageFile, UploadDraft};

/// Problem with a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooLarge { max_bytes: u64 },
    UnsupportedFormat,
    TooShort { min: usize },
    TooLong { max: usize },
    /// The image host rejected the file or was unreachable
    UploadFailed,
}

impl FieldError {
    /// Fluent message id for inline display
    pub fn message_key(&self) -> &'static str {
        match self {
            FieldError::Required => "field-required",
            FieldError::TooLarge { .. } => "field-too-large",
            FieldError::UnsupportedFormat => "field-unsupported-format",
            FieldError::TooShort { .. } => "field-too-short",
            FieldError::TooLong { .. } => "field-too-long",
            FieldError::UploadFailed => "field-upload-failed",
        }
    }
}

/// Validation result of the whole form, one slot per field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub image: Option<FieldError>,
    pub title: Option<FieldError>,
    pub description: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.title.is_none() && self.description.is_none()
    }
}

/// Limits applied to an upload draft before it may be submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Files must be strictly smaller than this
    pub max_file_size_bytes: u64,
    pub accepted_extensions: Vec<String>,
    pub title_min_len: usize,
    pub title_max_len: usize,
    pub description_max_len: usize,
}

impl Default for ValidationRules {
    /// The 10 000 byte ceiling is what the gallery always enforced, even
    /// though it reads like a 10 MB limit that lost three zeros. Override it
    /// through the configuration rather than here.
    fn default() -> Self {
        Self {
            max_file_size_bytes: 10_000,
            accepted_extensions: vec!["jpg".to_string(), "gif".to_string(), "png".to_string()],
            title_min_len: 2,
            title_max_len: 20,
            description_max_len: 65,
        }
    }
}

impl ValidationRules {
    pub fn with_max_file_size(mut self, max_file_size_bytes: u64) -> Self {
        self.max_file_size_bytes = max_file_size_bytes;
        self
    }

    pub fn validate_file(&self, file: Option<&ImageFile>) -> Result<(), FieldError> {
        let file = file.ok_or(FieldError::Required)?;

        if file.size() >= self.max_file_size_bytes {
            return Err(FieldError::TooLarge {
                max_bytes: self.max_file_size_bytes,
            });
        }

        let accepted = file
            .extension()
            .map_or(false, |ext| self.accepted_extensions.iter().any(|a| *a == ext));
        if !accepted {
            return Err(FieldError::UnsupportedFormat);
        }

        Ok(())
    }

    pub fn validate_title(&self, title: &str) -> Result<(), FieldError> {
        let len = title.chars().count();
        if len == 0 {
            Err(FieldError::Required)
        } else if len < self.title_min_len {
            Err(FieldError::TooShort {
                min: self.title_min_len,
            })
        } else if len > self.title_max_len {
            Err(FieldError::TooLong {
                max: self.title_max_len,
            })
        } else {
            Ok(())
        }
    }

    pub fn validate_description(&self, description: &str) -> Result<(), FieldError> {
        let len = description.chars().count();
        if len == 0 {
            Err(FieldError::Required)
        } else if len > self.description_max_len {
            Err(FieldError::TooLong {
                max: self.description_max_len,
            })
        } else {
            Ok(())
        }
    }

    /// Checks every field; the draft only passes when all of them do
    pub fn validate(&self, draft: &UploadDraft) -> Result<ValidatedDraft, FieldErrors> {
        let errors = FieldErrors {
            image: self.validate_file(draft.file.as_ref()).err(),
            title: self.validate_title(&draft.title).err(),
            description: self.validate_description(&draft.description).err(),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedDraft {
            title: draft.title.clone(),
            description: draft.description.clone(),
            hosted_url: draft.hosted_url.clone(),
        })
    }
}

/// A draft whose fields passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    title: String,
    description: String,
    hosted_url: Option<String>,
}

impl ValidatedDraft {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Builds the create request; fails while the file has no hosted URL
    pub fn into_request(self) -> Result<CreateImageRequest, UploadError> {
        let url = self
            .hosted_url
            .filter(|url| !url.is_empty())
            .ok_or(UploadError::ImageMissing)?;

        Ok(CreateImageRequest {
            title: self.title,
            description: self.description,
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: usize) -> ImageFile {
        ImageFile::new(name, vec![0u8; size])
    }

    fn valid_draft() -> UploadDraft {
        UploadDraft {
            file: Some(file("cat.jpg", 512)),
            hosted_url: Some("https://i.example/cat.jpg".to_string()),
            title: "Cat".to_string(),
            description: "A cat on a sofa".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let rules = ValidationRules::default();
        let validated = rules.validate(&valid_draft()).unwrap();
        let request = validated.into_request().unwrap();
        assert_eq!(request.title, "Cat");
        assert_eq!(request.url, "https://i.example/cat.jpg");
    }

    #[test]
    fn test_missing_file_is_an_image_error() {
        let rules = ValidationRules::default();
        let mut draft = valid_draft();
        draft.clear_file();

        let errors = rules.validate(&draft).unwrap_err();
        assert_eq!(errors.image, Some(FieldError::Required));
        assert_eq!(errors.title, None);
        assert_eq!(errors.description, None);
    }

    #[test]
    fn test_file_size_must_be_strictly_below_limit() {
        let rules = ValidationRules::default();
        assert!(rules.validate_file(Some(&file("a.png", 9_999))).is_ok());
        assert_eq!(
            rules.validate_file(Some(&file("a.png", 10_000))),
            Err(FieldError::TooLarge { max_bytes: 10_000 })
        );
    }

    #[test]
    fn test_file_size_limit_is_configurable() {
        let rules = ValidationRules::default().with_max_file_size(10_000_000);
        assert!(rules.validate_file(Some(&file("a.png", 50_000))).is_ok());
    }

    #[test]
    fn test_extensions_case_insensitive() {
        let rules = ValidationRules::default();
        for name in ["a.jpg", "a.JPG", "a.gif", "a.GIF", "a.png", "a.PnG"] {
            assert!(rules.validate_file(Some(&file(name, 10))).is_ok(), "{}", name);
        }
        for name in ["a.jpeg", "a.webp", "a.png.txt", "png", "a"] {
            assert_eq!(
                rules.validate_file(Some(&file(name, 10))),
                Err(FieldError::UnsupportedFormat),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_bad_file_never_blames_other_fields() {
        let rules = ValidationRules::default();
        let mut draft = valid_draft();
        draft.file = Some(file("huge.bmp", 20_000));

        let errors = rules.validate(&draft).unwrap_err();
        assert!(errors.image.is_some());
        assert_eq!(errors.title, None);
        assert_eq!(errors.description, None);
    }

    #[test]
    fn test_title_length_bounds() {
        let rules = ValidationRules::default();
        assert_eq!(rules.validate_title(""), Err(FieldError::Required));
        assert_eq!(rules.validate_title("a"), Err(FieldError::TooShort { min: 2 }));
        assert!(rules.validate_title("ab").is_ok());
        assert!(rules.validate_title(&"t".repeat(20)).is_ok());
        assert_eq!(
            rules.validate_title(&"t".repeat(21)),
            Err(FieldError::TooLong { max: 20 })
        );
    }

    #[test]
    fn test_title_counts_characters() {
        let rules = ValidationRules::default();
        assert!(rules.validate_title(&"ã".repeat(20)).is_ok());
    }

    #[test]
    fn test_description_length_bounds() {
        let rules = ValidationRules::default();
        assert_eq!(rules.validate_description(""), Err(FieldError::Required));
        assert!(rules.validate_description(&"d".repeat(65)).is_ok());
        assert_eq!(
            rules.validate_description(&"d".repeat(66)),
            Err(FieldError::TooLong { max: 65 })
        );
    }

    #[test]
    fn test_all_fields_reported_together() {
        let rules = ValidationRules::default();
        let errors = rules.validate(&UploadDraft::new()).unwrap_err();
        assert_eq!(errors.image, Some(FieldError::Required));
        assert_eq!(errors.title, Some(FieldError::Required));
        assert_eq!(errors.description, Some(FieldError::Required));
    }

    #[test]
    fn test_validated_without_hosted_url_is_image_missing() {
        let rules = ValidationRules::default();
        let mut draft = valid_draft();
        draft.hosted_url = None;

        let validated = rules.validate(&draft).unwrap();
        assert_eq!(validated.into_request(), Err(UploadError::ImageMissing));
    }
}
