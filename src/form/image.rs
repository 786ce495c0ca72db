use serde::Serialize;
use std::sync::Arc;

/// An uploaded photo held by one form.
///
/// The bytes are reference-counted so cloning a form state does not copy
/// image data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    file_name: String,
    content_type: String,
    data: Arc<[u8]>,
}

/// What a submission carries about an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSummary {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: usize,
}

impl ImageAttachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn summary(&self) -> ImageSummary {
        ImageSummary {
            file_name: self.file_name.clone(),
            content_type: self.content_type.clone(),
            size_bytes: self.size(),
        }
    }
}
