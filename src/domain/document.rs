//! Identity document model and declared-data cross-check.
//!
//! A fan may attach the front of an RG or CNH. Text is pulled out of the
//! document by a [`TextExtractor`] and searched for the declared name and CPF.

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use regex::RegexBuilder;
use std::path::Path;

/// Errors raised while decoding or reading an identity document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Unsupported document type: {0}")]
    UnsupportedType(String),

    #[error("Document too large: {size} bytes (max: {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Document content is not valid base64")]
    InvalidEncoding,

    #[error("Document is empty")]
    Empty,

    #[error("{0} documents are not supported by the configured text extractor")]
    UnsupportedByExtractor(&'static str),

    #[error("Text extraction failed: {0}")]
    Extraction(String),
}

/// File family of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Image,
    Pdf,
}

impl DocumentKind {
    /// Detects the kind from a file name extension (`jpg`, `jpeg`, `png`, `pdf`).
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnsupportedType`] for any other extension.
    pub fn from_filename(filename: &str) -> Result<Self, DocumentError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "jpg" | "jpeg" | "png" => Ok(Self::Image),
            "pdf" => Ok(Self::Pdf),
            _ => Err(DocumentError::UnsupportedType(filename.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Pdf => "PDF",
        }
    }
}

/// A decoded identity document.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

impl Document {
    /// Builds a document from raw bytes, enforcing type and size limits.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnsupportedType`], [`DocumentError::Empty`]
    /// or [`DocumentError::TooLarge`].
    pub fn from_bytes(
        filename: impl Into<String>,
        bytes: Vec<u8>,
        max_bytes: usize,
    ) -> Result<Self, DocumentError> {
        let filename = filename.into();
        let kind = DocumentKind::from_filename(&filename)?;

        if bytes.is_empty() {
            return Err(DocumentError::Empty);
        }
        if bytes.len() > max_bytes {
            return Err(DocumentError::TooLarge {
                size: bytes.len(),
                max: max_bytes,
            });
        }

        Ok(Self {
            filename,
            kind,
            bytes,
        })
    }

    /// Decodes a base64 payload as sent by API clients.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidEncoding`] for malformed base64, plus
    /// anything [`Document::from_bytes`] rejects.
    pub fn from_base64(
        filename: impl Into<String>,
        content_base64: &str,
        max_bytes: usize,
    ) -> Result<Self, DocumentError> {
        let bytes = STANDARD
            .decode(content_base64.trim())
            .map_err(|_| DocumentError::InvalidEncoding)?;
        Self::from_bytes(filename, bytes, max_bytes)
    }
}

/// Source of text for identity documents (OCR engine or similar).
///
/// # Implementations
///
/// - [`crate::infrastructure::ocr::TesseractExtractor`] - `tesseract` CLI
/// - [`crate::infrastructure::ocr::NullExtractor`] - extraction disabled
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extracts the document text.
    ///
    /// Returns `Ok(None)` when the extractor is disabled and no text can be
    /// produced.
    async fn extract_text(&self, document: &Document) -> Result<Option<String>, DocumentError>;

    /// Short name for health checks and logs.
    fn name(&self) -> &'static str;

    /// Whether the extractor actually produces text.
    fn is_enabled(&self) -> bool;
}

/// Outcome of comparing declared data with document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentCheck {
    Verified,
    NameNotFound,
    CpfNotFound,
    Skipped,
}

impl DocumentCheck {
    /// Message describing a mismatch, `None` for `Verified` and `Skipped`.
    pub fn mismatch_message(self) -> Option<&'static str> {
        match self {
            Self::NameNotFound => Some("Name not found in document"),
            Self::CpfNotFound => Some("CPF not found in document"),
            Self::Verified | Self::Skipped => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::NameNotFound => "name_not_found",
            Self::CpfNotFound => "cpf_not_found",
            Self::Skipped => "skipped",
        }
    }
}

/// Searches the extracted text for the declared name and CPF.
///
/// The name is matched literally and case-insensitively; the CPF is matched
/// literally, exactly as the fan typed it. Name is checked first.
pub fn check_document_text(text: &str, name: &str, cpf: &str) -> DocumentCheck {
    let name_found = RegexBuilder::new(&regex::escape(name.trim()))
        .case_insensitive(true)
        .build()
        .map(|re| re.is_match(text))
        .unwrap_or(false);

    if !name_found {
        return DocumentCheck::NameNotFound;
    }

    if !text.contains(cpf.trim()) {
        return DocumentCheck::CpfNotFound;
    }

    DocumentCheck::Verified
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "REPUBLICA FEDERATIVA DO BRASIL\nNOME: MARIA DA SILVA\nCPF 529.982.247-25";

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(DocumentKind::from_filename("rg.JPG").unwrap(), DocumentKind::Image);
        assert_eq!(DocumentKind::from_filename("cnh.jpeg").unwrap(), DocumentKind::Image);
        assert_eq!(DocumentKind::from_filename("scan.png").unwrap(), DocumentKind::Image);
        assert_eq!(DocumentKind::from_filename("doc.pdf").unwrap(), DocumentKind::Pdf);
        assert!(matches!(
            DocumentKind::from_filename("doc.gif"),
            Err(DocumentError::UnsupportedType(_))
        ));
        assert!(DocumentKind::from_filename("noextension").is_err());
    }

    #[test]
    fn test_from_base64_decodes() {
        let doc = Document::from_base64("rg.png", "aGVsbG8=", 1024).unwrap();
        assert_eq!(doc.bytes, b"hello");
        assert_eq!(doc.kind, DocumentKind::Image);
    }

    #[test]
    fn test_from_base64_invalid() {
        assert!(matches!(
            Document::from_base64("rg.png", "not base64!!", 1024),
            Err(DocumentError::InvalidEncoding)
        ));
    }

    #[test]
    fn test_from_bytes_limits() {
        assert!(matches!(
            Document::from_bytes("rg.png", vec![], 10),
            Err(DocumentError::Empty)
        ));
        assert!(matches!(
            Document::from_bytes("rg.png", vec![0; 11], 10),
            Err(DocumentError::TooLarge { size: 11, max: 10 })
        ));
        assert!(Document::from_bytes("rg.png", vec![0; 10], 10).is_ok());
    }

    #[test]
    fn test_check_verified_case_insensitive_name() {
        assert_eq!(
            check_document_text(TEXT, "Maria da Silva", "529.982.247-25"),
            DocumentCheck::Verified
        );
    }

    #[test]
    fn test_check_name_missing() {
        assert_eq!(
            check_document_text(TEXT, "João Souza", "529.982.247-25"),
            DocumentCheck::NameNotFound
        );
    }

    #[test]
    fn test_check_cpf_matched_as_typed() {
        assert_eq!(
            check_document_text(TEXT, "Maria da Silva", "52998224725"),
            DocumentCheck::CpfNotFound
        );
    }

    #[test]
    fn test_check_name_is_literal() {
        assert_eq!(
            check_document_text("NOME: MARIA", "M.RIA", "x"),
            DocumentCheck::NameNotFound
        );
    }

    #[test]
    fn test_mismatch_messages() {
        assert!(DocumentCheck::Verified.mismatch_message().is_none());
        assert!(DocumentCheck::Skipped.mismatch_message().is_none());
        assert_eq!(
            DocumentCheck::CpfNotFound.mismatch_message(),
            Some("CPF not found in document")
        );
    }
}
