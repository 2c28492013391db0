//! # Fan Registry
//!
//! Registration service for eSports fans: validates a Brazilian CPF and
//! social profile links, cross-checks an uploaded identity document against
//! the declared name and CPF, and appends the record to a CSV file.
//!
//! ## Architecture
//!
//! - **Utilities** ([`utils`]) - Pure CPF and social link validators
//! - **Domain Layer** ([`domain`]) - Fan entity, repository and text extraction traits
//! - **Application Layer** ([`application`]) - Registration workflow
//! - **Infrastructure Layer** ([`infrastructure`]) - CSV record store, OCR backends
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export FANS_CSV_PATH="dados_fas.csv"
//! export TESSERACT_CMD="/usr/bin/tesseract"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
pub use utils::{validate_cpf, validate_social_link};

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{FanService, Registration, RegistrationOptions};
    pub use crate::domain::entities::{Fan, NewFan};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::{validate_cpf, validate_social_link};
}
