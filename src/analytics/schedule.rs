/// Schedule evaluation: is a habit due on a given calendar date?
///
/// This is the predicate every other analytics component builds on. It is a
/// total function over its domain and knows nothing about the habit's
/// creation date; callers apply the `date >= created_at` floor themselves.

use chrono::{Datelike, NaiveDate};
use crate::domain::Repetition;

/// Whether the recurrence rule says the habit should be performed on `date`
///
/// Weekly and monthly habits with an empty day set are never due.
pub fn is_due(date: NaiveDate, repetition: &Repetition) -> bool {
    match repetition {
        Repetition::Daily => true,
        Repetition::Weekly { days } => {
            days.contains(&(date.weekday().num_days_from_sunday() as u8))
        }
        Repetition::Monthly { days } => days.contains(&(date.day() as u8)),
    }
}
