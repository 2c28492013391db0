//! Repository trait for fan records.

use crate::domain::entities::{Fan, NewFan};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the fan record store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::CsvFanRepository`] - CSV file implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FanRepository: Send + Sync {
    /// Returns every stored fan in insertion order.
    ///
    /// An absent store is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    async fn list(&self) -> Result<Vec<Fan>, AppError>;

    /// Checks whether a fan with the same CPF digits is already stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool, AppError>;

    /// Appends a new fan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the CPF is already registered.
    /// Returns [`AppError::Internal`] if the store cannot be written.
    async fn insert(&self, new_fan: NewFan) -> Result<Fan, AppError>;
}
