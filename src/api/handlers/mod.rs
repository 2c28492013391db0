//! HTTP request handlers for API endpoints.

pub mod fans;
pub mod health;
pub mod validate;

pub use fans::{list_fans_handler, register_fan_handler};
pub use health::health_handler;
pub use validate::{validate_cpf_handler, validate_social_link_handler};
