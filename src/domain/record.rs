/// CompletionRecord entity for tracking per-date habit outcomes
///
/// This module defines the CompletionRecord struct that represents the
/// outcome of a habit on a specific day. A record with `completed == false`
/// means "explicitly marked not done", which is distinct from no record
/// existing for that date.

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, Utc};
use crate::domain::{DomainError, HabitId};

/// The recorded outcome of a habit on a specific day
///
/// One record per habit per date; deduplication is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Which habit this record is for
    pub habit_id: HabitId,
    /// Which calendar day this outcome is for
    pub date: NaiveDate,
    /// Whether the habit was done that day
    pub completed: bool,
}

impl CompletionRecord {
    /// Create a new completion record with validation
    pub fn new(
        habit_id: HabitId,
        date: NaiveDate,
        completed: bool,
    ) -> Result<Self, DomainError> {
        Self::validate_date(&date)?;

        Ok(Self {
            habit_id,
            date,
            completed,
        })
    }

    /// Create a record from existing data (used when loading stored documents)
    pub fn from_existing(habit_id: HabitId, date: NaiveDate, completed: bool) -> Self {
        Self {
            habit_id,
            date,
            completed,
        }
    }

    /// Validate that the record date is not in the future
    fn validate_date(date: &NaiveDate) -> Result<(), DomainError> {
        let today = Utc::now().naive_utc().date();

        if *date > today {
            return Err(DomainError::InvalidDate(
                "Cannot log habits for future dates".to_string()
            ));
        }

        Ok(())
    }
}
