//! Application layer services implementing business logic.
//!
//! Services consume repository and extractor traits and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! - [`services::registration_service::FanService`] - Fan registration and listing

pub mod services;
