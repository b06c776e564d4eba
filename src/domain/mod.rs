/// Domain module containing core business entities and their validation rules
///
/// This module defines the types the analytics engine operates on (Habit,
/// CompletionRecord, Repetition). The entities themselves are owned by the
/// caller's persistence layer; the engine treats them as read-only input
/// apart from the two streak fields it recommends be written back.

pub mod habit;
pub mod record;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use record::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
///
/// The analytics computations themselves are total functions and never fail;
/// these errors surface from entity validation and from parsing caller input
/// at the string boundary.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid repetition: {0}")]
    InvalidRepetition(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },
}
