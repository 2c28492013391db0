//! Infrastructure layer: concrete record store and text extraction backends.
//!
//! - [`persistence`] - CSV implementation of [`crate::domain::repositories::FanRepository`]
//! - [`ocr`] - implementations of [`crate::domain::document::TextExtractor`]

pub mod ocr;
pub mod persistence;
