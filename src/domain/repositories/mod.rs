//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for testing.

pub mod fan_repository;

pub use fan_repository::FanRepository;

#[cfg(test)]
pub use fan_repository::MockFanRepository;
