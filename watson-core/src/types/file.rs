//! File payloads for multipart uploads.

use bytes::Bytes;

/// A file part: contents plus the name and media type sent with it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileWithMetadata {
    pub data: Bytes,
    pub filename: String,
    /// Media type. Guessed from the contents or the file name when absent.
    pub content_type: Option<String>,
}

impl FileWithMetadata {
    pub fn new(data: impl Into<Bytes>, filename: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            filename: filename.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// The declared media type, or the best guess for this file.
    pub fn resolved_content_type(&self) -> String {
        self.content_type.clone().unwrap_or_else(|| {
            crate::utils::mime::guess_mime(Some(&self.data), Some(&self.filename))
        })
    }
}
