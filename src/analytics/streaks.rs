/// Streak calculation over sparse completion histories
///
/// All three computations here (current streak, best/all streaks, streak
/// periods) share the same two break rules: a record explicitly marked not
/// done closes the run without counting, and a gap between two adjacent
/// records larger than the recurrence's grace window closes it as well,
/// even when both neighbouring records were completed.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::analytics::CompletionHistory;
use crate::domain::Repetition;

/// A historical run of consecutive successes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub length: u32,
}

/// Accumulates one success run during an ascending replay
///
/// The single close-on-false-or-gap primitive shared by the all-streaks and
/// streak-period computations.
#[derive(Debug, Default)]
struct RunBuilder {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    length: u32,
}

impl RunBuilder {
    fn record_success(&mut self, date: NaiveDate) {
        if self.start.is_none() {
            self.start = Some(date);
        }
        self.end = Some(date);
        self.length += 1;
    }

    /// Push the open run (if any) and reset
    fn close_into(&mut self, runs: &mut Vec<StreakPeriod>) {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            runs.push(StreakPeriod {
                start_date: start,
                end_date: end,
                length: self.length,
            });
        }
        *self = Self::default();
    }
}

/// The current streak, anchored to `today`
///
/// Zero when the history is empty or when the most recent record (completed
/// or not) is further from `today` than the grace window: stale histories
/// reset progress even if the old records form a perfect chain. Otherwise
/// records are walked newest to oldest, counting successes until the first
/// not-done record or a gap exceeding the window.
pub fn current_streak(
    history: &CompletionHistory,
    repetition: &Repetition,
    today: NaiveDate,
) -> u32 {
    let Some(most_recent) = history.most_recent() else {
        return 0;
    };

    let window = repetition.grace_window_days();
    if (today - most_recent).num_days() > window {
        return 0;
    }

    let mut streak = 0;
    let mut newer: Option<NaiveDate> = None;

    for (date, completed) in history.iter().rev() {
        if let Some(newer) = newer {
            if (newer - date).num_days() > window {
                break;
            }
        }
        if !completed {
            break;
        }
        streak += 1;
        newer = Some(date);
    }

    streak
}

/// Every closed success run, in chronological (discovery) order
pub fn streak_runs(history: &CompletionHistory, repetition: &Repetition) -> Vec<StreakPeriod> {
    let window = repetition.grace_window_days();
    let mut runs = Vec::new();
    let mut run = RunBuilder::default();
    let mut previous: Option<NaiveDate> = None;

    for (date, completed) in history.iter() {
        if let Some(previous) = previous {
            if (date - previous).num_days() > window {
                run.close_into(&mut runs);
            }
        }

        if completed {
            run.record_success(date);
        } else {
            run.close_into(&mut runs);
        }

        previous = Some(date);
    }

    run.close_into(&mut runs);
    runs
}

/// Lengths of every success run, in chronological order
pub fn all_streaks(history: &CompletionHistory, repetition: &Repetition) -> Vec<u32> {
    streak_runs(history, repetition).iter().map(|r| r.length).collect()
}

/// The best streak ever observed
///
/// The previously stored best is always included, so a recompute over an
/// edited-down history can never lower the stored value.
pub fn best_streak(
    history: &CompletionHistory,
    repetition: &Repetition,
    previous_best: u32,
) -> u32 {
    all_streaks(history, repetition)
        .into_iter()
        .max()
        .unwrap_or(0)
        .max(previous_best)
}

/// Historical runs with boundary dates, sorted by length descending
///
/// Ties keep chronological discovery order (stable sort).
pub fn streak_periods(history: &CompletionHistory, repetition: &Repetition) -> Vec<StreakPeriod> {
    let mut periods = streak_runs(history, repetition);
    periods.sort_by(|a, b| b.length.cmp(&a.length));
    periods
}
