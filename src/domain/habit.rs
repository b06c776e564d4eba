/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a user's habit
/// they want to track, along with validation rules.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{DomainError, HabitId, Repetition};

/// A habit represents something the user wants to do regularly
///
/// Each habit has a name, a recurrence rule, and a creation date. No date
/// strictly before `created_at` is ever considered due. The two streak
/// fields are maintained by the analytics engine's output; everything else
/// is owned by the caller's persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Which calendar dates this habit is due on
    pub repetition: Repetition,
    /// When this habit was created
    pub created_at: NaiveDate,
    /// Consecutive successes ending at (or near) today
    pub current_streak: u32,
    /// Best streak ever achieved; never regresses across recomputes
    pub best_streak: u32,
}

impl Habit {
    /// Create a new habit with validation
    pub fn new(
        name: String,
        repetition: Repetition,
        created_at: NaiveDate,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        repetition.validate()?;

        Ok(Self {
            id: HabitId::new(),
            name,
            repetition,
            created_at,
            current_streak: 0,
            best_streak: 0,
        })
    }

    /// Create a habit from existing data (used when loading stored documents)
    ///
    /// This constructor assumes data is already validated and is mainly used
    /// by the caller's storage layer.
    pub fn from_existing(
        id: HabitId,
        name: String,
        repetition: Repetition,
        created_at: NaiveDate,
        current_streak: u32,
        best_streak: u32,
    ) -> Self {
        Self {
            id,
            name,
            repetition,
            created_at,
            current_streak,
            best_streak,
        }
    }

    /// Write recomputed streak values back onto the habit
    ///
    /// Enforces the two streak-field invariants: `best_streak` never
    /// decreases across recomputes, and `best_streak >= current_streak`
    /// holds afterwards.
    pub fn apply_streaks(&mut self, current_streak: u32, best_streak: u32) {
        self.current_streak = current_streak;
        self.best_streak = best_streak.max(self.best_streak).max(current_streak);
    }

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string()
            ));
        }

        Ok(())
    }
}
