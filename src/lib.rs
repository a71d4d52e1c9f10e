//! Storage and validation core for a quiz application.
//!
//! Questions are stored together with their candidate answers. Every stored
//! question has unique text and exactly one answer marked as correct; the
//! [`QuestionService`] enforces both rules and delegates storage to the
//! [`repository`] layer, which ships MongoDB-backed and in-memory
//! implementations.

pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;

pub use config::Config;
pub use error::{Error, Result};
pub use service::QuestionService;
