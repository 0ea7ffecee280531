/// Domain module containing the core data types and their rules
///
/// This module defines the Habit entity with its per-day completion set, the
/// classification enums, the insight value object, and the first-run seed
/// data. These types are what every other layer operates on.

pub mod defaults;
pub mod display;
pub mod habit;
pub mod insight;
pub mod types;

// Re-export public types for easy access
pub use defaults::*;
pub use habit::*;
pub use insight::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),
}
