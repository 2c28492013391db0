//! Pure validation helpers shared by the API, the services and the CLI.
//!
//! - [`cpf`] - CPF normalization, formatting and check-digit validation
//! - [`social_link`] - Instagram / Twitter / TikTok profile link validation

pub mod cpf;
pub mod social_link;

pub use cpf::{format_cpf, normalize_cpf, validate_cpf};
pub use social_link::{SocialPlatform, validate_social_link};
