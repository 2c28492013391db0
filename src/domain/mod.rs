//! Domain layer: entities, repository contracts and document checks.
//!
//! - [`entities`] - Fan records
//! - [`repositories`] - Record store trait definitions
//! - [`document`] - Identity documents, text extraction contract and cross-check
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; business rules live in [`crate::application::services`].

pub mod document;
pub mod entities;
pub mod repositories;
