//! Text extraction through the `tesseract` command line tool.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::domain::document::{Document, DocumentError, DocumentKind, TextExtractor};

/// Upper bound for a single OCR run.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs `tesseract <image> stdout` and returns what it prints.
///
/// The document is written to a temporary file that keeps the original
/// extension so tesseract can pick the right image decoder. PDF documents
/// are rejected: rasterizing pages is outside this extractor's job.
pub struct TesseractExtractor {
    command: PathBuf,
    timeout: Duration,
}

impl TesseractExtractor {
    /// Creates an extractor invoking the given executable.
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    fn suffix(document: &Document) -> String {
        std::path::Path::new(&document.filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextExtractor for TesseractExtractor {
    async fn extract_text(&self, document: &Document) -> Result<Option<String>, DocumentError> {
        if document.kind == DocumentKind::Pdf {
            return Err(DocumentError::UnsupportedByExtractor(document.kind.label()));
        }

        let file = tempfile::Builder::new()
            .prefix("fan-document-")
            .suffix(&Self::suffix(document))
            .tempfile()
            .map_err(|e| DocumentError::Extraction(e.to_string()))?;

        tokio::fs::write(file.path(), &document.bytes)
            .await
            .map_err(|e| DocumentError::Extraction(e.to_string()))?;

        debug!(
            command = %self.command.display(),
            filename = %document.filename,
            size = document.bytes.len(),
            "Running OCR"
        );

        let run = Command::new(&self.command)
            .arg(file.path())
            .arg("stdout")
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| {
                DocumentError::Extraction(format!("timed out after {}s", self.timeout.as_secs()))
            })?
            .map_err(|e| {
                DocumentError::Extraction(format!(
                    "failed to run {}: {}",
                    self.command.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, "OCR command failed: {}", stderr.trim());
            return Err(DocumentError::Extraction(format!(
                "{} exited with {}",
                self.command.display(),
                output.status
            )));
        }

        Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
    }

    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> Document {
        Document::from_bytes("rg.PNG", vec![137, 80, 78, 71], 1024).unwrap()
    }

    #[test]
    fn test_suffix_keeps_extension() {
        assert_eq!(TesseractExtractor::suffix(&image()), ".png");
    }

    #[tokio::test]
    async fn test_pdf_rejected() {
        let extractor = TesseractExtractor::new("tesseract");
        let pdf = Document::from_bytes("cnh.pdf", vec![1], 1024).unwrap();

        assert!(matches!(
            extractor.extract_text(&pdf).await,
            Err(DocumentError::UnsupportedByExtractor("PDF"))
        ));
    }

    #[tokio::test]
    async fn test_missing_command_is_extraction_error() {
        let extractor = TesseractExtractor::new("/nonexistent/tesseract-binary");

        assert!(matches!(
            extractor.extract_text(&image()).await,
            Err(DocumentError::Extraction(_))
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stdout_is_returned() {
        // `echo <file> stdout` stands in for tesseract
        let extractor = TesseractExtractor::new("echo");

        let text = extractor.extract_text(&image()).await.unwrap().unwrap();

        assert!(text.contains("fan-document-"));
        assert!(text.trim_end().ends_with("stdout"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_command_is_extraction_error() {
        let extractor = TesseractExtractor::new("false");

        assert!(matches!(
            extractor.extract_text(&image()).await,
            Err(DocumentError::Extraction(_))
        ));
    }
}
