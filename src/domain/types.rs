/// Core types used throughout the domain layer
///
/// This module defines the fundamental types like HabitId and Repetition
/// that are used by Habit, CompletionRecord, and the analytics engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Unique identifier for a habit
///
/// This is a wrapper around UUID to provide type safety - you can't accidentally
/// pass a habit ID where some other string is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string (useful when loading stored documents)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Convert to string representation
    pub fn to_string(&self) -> String {
        self.0.to_string()
    }
}

/// How often a habit should be performed
///
/// The recurrence rule decides which calendar dates a habit is "due" on,
/// which in turn drives every streak and rate calculation. Day semantics
/// depend on the variant: weekday indices (0=Sunday..6=Saturday) for
/// weekly habits, days of the month (1..31) for monthly ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repetition {
    /// Due every single day
    Daily,
    /// Due on specific weekdays, 0=Sunday through 6=Saturday
    Weekly { days: BTreeSet<u8> },
    /// Due on specific days of the month, 1 through 31
    Monthly { days: BTreeSet<u8> },
}

impl Repetition {
    /// Validate that the day set is in range for this variant
    ///
    /// An empty day set is accepted: such a habit is simply never due.
    pub fn validate(&self) -> Result<(), crate::domain::DomainError> {
        match self {
            Repetition::Daily => {}
            Repetition::Weekly { days } => {
                if let Some(day) = days.iter().find(|d| **d > 6) {
                    return Err(crate::domain::DomainError::InvalidRepetition(
                        format!("Weekday index must be 0-6, got {}", day)
                    ));
                }
            }
            Repetition::Monthly { days } => {
                if let Some(day) = days.iter().find(|d| **d < 1 || **d > 31) {
                    return Err(crate::domain::DomainError::InvalidRepetition(
                        format!("Day of month must be 1-31, got {}", day)
                    ));
                }
            }
        }
        Ok(())
    }

    /// The maximum allowed gap in days between two records before a
    /// streak is considered broken
    pub fn grace_window_days(&self) -> i64 {
        match self {
            Repetition::Daily => 1,
            Repetition::Weekly { .. } => 7,
            Repetition::Monthly { .. } => 31,
        }
    }
}
