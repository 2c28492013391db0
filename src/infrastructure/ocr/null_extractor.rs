//! No-op text extractor for deployments without OCR.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::document::{Document, DocumentError, TextExtractor};

/// A text extractor that never produces text.
///
/// Used when `TESSERACT_CMD` is not configured. Documents are still decoded
/// and size-checked, but the name/CPF cross-check is reported as skipped.
pub struct NullExtractor;

impl NullExtractor {
    /// Creates a new NullExtractor instance.
    pub fn new() -> Self {
        debug!("Using NullExtractor (document text extraction disabled)");
        Self
    }
}

impl Default for NullExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for NullExtractor {
    async fn extract_text(&self, _document: &Document) -> Result<Option<String>, DocumentError> {
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "none"
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
