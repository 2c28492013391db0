//! Text extraction backends for identity documents.
//!
//! - [`TesseractExtractor`] - runs the `tesseract` command line tool
//! - [`NullExtractor`] - extraction disabled

mod null_extractor;
mod tesseract;

pub use null_extractor::NullExtractor;
pub use tesseract::TesseractExtractor;
