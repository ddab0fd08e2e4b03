use serde::{Deserialize, Serialize};

/// An uploaded image as served by the gallery API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Location of the hosted asset
    pub url: String,
    /// Creation timestamp, used as the list key
    pub ts: i64,
}

/// One response of the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GalleryPage {
    pub data: Vec<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl GalleryPage {
    /// Cursor of the next page, if the server announced one
    pub fn next_cursor(&self) -> Option<&str> {
        self.after.as_deref().filter(|cursor| !cursor.is_empty())
    }
}

/// Body of `POST /api/images`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateImageRequest {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// A file picked by the user, held in memory until submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Lowercased extension of the file name, without the dot
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            _ => "image/jpeg",
        }
    }

    /// Data URL for showing the picked file before it is hosted
    pub fn preview_data_url(&self) -> String {
        use base64::{engine::general_purpose, Engine as _};

        let encoded = general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.mime_type(), encoded)
    }
}

/// Form state of the upload dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadDraft {
    pub file: Option<ImageFile>,
    /// Set once the image host accepted `file`
    pub hosted_url: Option<String>,
    pub title: String,
    pub description: String,
}

impl UploadDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the picked file; any earlier hosted URL belongs to the old file
    pub fn set_file(&mut self, file: ImageFile) {
        self.file = Some(file);
        self.hosted_url = None;
    }

    pub fn clear_file(&mut self) {
        self.file = None;
        self.hosted_url = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Toast to show after a submission; title and description are i18n keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title_key: &'static str,
    pub description_key: &'static str,
}

impl Notification {
    pub fn image_created() -> Self {
        Self {
            kind: NotificationKind::Success,
            title_key: "toast-created-title",
            description_key: "toast-created-description",
        }
    }

    pub fn image_missing() -> Self {
        Self {
            kind: NotificationKind::Error,
            title_key: "toast-image-missing-title",
            description_key: "toast-image-missing-description",
        }
    }

    pub fn submission_failed() -> Self {
        Self {
            kind: NotificationKind::Error,
            title_key: "toast-submit-failed-title",
            description_key: "toast-submit-failed-description",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserializes_without_cursor() {
        let json = r#"{"data":[{"id":"a","title":"Sky","description":"Blue","url":"https://i.example/a.png","ts":1}]}"#;
        let page: GalleryPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "a");
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn test_empty_cursor_means_last_page() {
        let page = GalleryPage {
            data: vec![],
            after: Some(String::new()),
        };
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn test_file_extension_is_lowercased() {
        let file = ImageFile::new("Holiday.PNG", vec![1, 2, 3]);
        assert_eq!(file.extension().as_deref(), Some("png"));
        assert_eq!(file.mime_type(), "image/png");
        assert_eq!(file.size(), 3);
    }

    #[test]
    fn test_file_without_extension() {
        assert_eq!(ImageFile::new("README", vec![]).extension(), None);
        assert_eq!(ImageFile::new(".png", vec![]).extension(), None);
        assert_eq!(ImageFile::new("photo.", vec![]).extension(), None);
    }

    #[test]
    fn test_preview_data_url() {
        let file = ImageFile::new("dot.gif", b"GIF".to_vec());
        assert_eq!(file.preview_data_url(), "data:image/gif;base64,R0lG");
    }

    #[test]
    fn test_new_file_drops_hosted_url() {
        let mut draft = UploadDraft::new();
        draft.set_file(ImageFile::new("a.png", vec![0]));
        draft.hosted_url = Some("https://i.example/a.png".to_string());

        draft.set_file(ImageFile::new("b.png", vec![0]));
        assert_eq!(draft.hosted_url, None);
    }
}
