//! Business logic services for the application layer.

pub mod registration_service;

pub use registration_service::{
    DocumentUpload, FanService, Registered, Registration, RegistrationOptions,
};
