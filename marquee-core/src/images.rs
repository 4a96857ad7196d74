use async_trait::async_trait;
use marquee_catalog::ImageRef;
use uuid::Uuid;

use crate::{CoreError, CoreResult};

/// A raw file chosen by the organizer. Bytes are opaque to the core.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Stores uploaded files and returns stable references
#[async_trait]
pub trait ImageIntake: Send + Sync {
    async fn store(&self, upload: ImageUpload) -> CoreResult<ImageRef>;
}

pub struct MockImageIntake {
    base_url: String,
}

impl MockImageIntake {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ImageIntake for MockImageIntake {
    async fn store(&self, upload: ImageUpload) -> CoreResult<ImageRef> {
        if upload.bytes.is_empty() {
            return Err(CoreError::Collaborator(format!("{} is empty", upload.file_name)));
        }

        let reference = format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            Uuid::new_v4(),
            upload.file_name
        );
        tracing::debug!(file = %upload.file_name, size = upload.bytes.len(), %reference, "Image stored");
        Ok(ImageRef(reference))
    }
}
