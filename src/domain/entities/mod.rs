//! Core domain entities.
//!
//! - [`Fan`] - A registered fan as held by the record store
//! - [`NewFan`] - A validated registration waiting to be stored

pub mod fan;

pub use fan::{Fan, NewFan};
