/// Analytics engine for streaks, success rates, and time-bucketed aggregates
///
/// This module is the computation surface the calling service layer uses:
/// it is handed a Habit plus that habit's completion records (in any order),
/// and produces streak numbers and report series. Everything is synchronous,
/// side-effect-free, and total - degenerate input yields explicit defaults
/// rather than errors.

pub mod history;
pub mod rates;
pub mod schedule;
pub mod streaks;

pub use history::CompletionHistory;
pub use rates::{BestWorstDays, DayOfWeekStat, MonthlyTrend};
pub use schedule::is_due;
pub use streaks::StreakPeriod;

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::domain::{CompletionRecord, DomainError, Habit};

/// Refreshed streak fields to write back onto a habit after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakUpdate {
    pub current_streak: u32,
    pub best_streak: u32,
}

/// Stateless facade over the analytics computations
///
/// All methods take the habit and its record slice explicitly, so calls for
/// different habits share no state and can run in parallel from the caller.
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    /// Create a new analytics engine
    pub fn new() -> Self {
        Self
    }

    /// Recompute both streak fields, anchored to an explicit `today`
    ///
    /// The returned `best_streak` already folds in the habit's stored value,
    /// so applying the update can never lower it.
    pub fn recompute_streaks_at(
        &self,
        habit: &Habit,
        records: &[CompletionRecord],
        today: NaiveDate,
    ) -> StreakUpdate {
        let history = CompletionHistory::from_records(records);
        let current_streak = streaks::current_streak(&history, &habit.repetition, today);
        let best_streak = streaks::best_streak(&history, &habit.repetition, habit.best_streak)
            .max(current_streak);

        debug!(
            habit = %habit.id.to_string(),
            current_streak,
            best_streak,
            "recomputed streaks"
        );

        StreakUpdate { current_streak, best_streak }
    }

    /// Recompute both streak fields anchored to the current date
    pub fn recompute_streaks(&self, habit: &Habit, records: &[CompletionRecord]) -> StreakUpdate {
        self.recompute_streaks_at(habit, records, Utc::now().naive_utc().date())
    }

    /// Current streak anchored to an explicit `today`
    pub fn current_streak_at(
        &self,
        habit: &Habit,
        records: &[CompletionRecord],
        today: NaiveDate,
    ) -> u32 {
        let history = CompletionHistory::from_records(records);
        streaks::current_streak(&history, &habit.repetition, today)
    }

    /// Lengths of every historical success run, in chronological order
    pub fn all_streaks(&self, habit: &Habit, records: &[CompletionRecord]) -> Vec<u32> {
        let history = CompletionHistory::from_records(records);
        streaks::all_streaks(&history, &habit.repetition)
    }

    /// Historical runs with boundary dates, longest first
    pub fn streak_periods(&self, habit: &Habit, records: &[CompletionRecord]) -> Vec<StreakPeriod> {
        let history = CompletionHistory::from_records(records);
        streaks::streak_periods(&history, &habit.repetition)
    }

    /// The `n` longest historical runs, for "top N streaks" display
    pub fn top_streak_periods(
        &self,
        habit: &Habit,
        records: &[CompletionRecord],
        n: usize,
    ) -> Vec<StreakPeriod> {
        let mut periods = self.streak_periods(habit, records);
        periods.truncate(n);
        periods
    }

    /// Successful completions divided by due dates over `[start, end]`
    pub fn success_rate(
        &self,
        habit: &Habit,
        records: &[CompletionRecord],
        start: NaiveDate,
        end: NaiveDate,
    ) -> f64 {
        let history = CompletionHistory::from_records(records);
        rates::success_rate(habit, &history, start, end)
    }

    /// Per-weekday stats over `[start, end]`, all seven buckets
    pub fn day_of_week_stats(
        &self,
        habit: &Habit,
        records: &[CompletionRecord],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<DayOfWeekStat> {
        let history = CompletionHistory::from_records(records);
        rates::day_of_week_stats(habit, &history, start, end)
    }

    /// Best/worst weekday over `[start, end]`, -1 sentinels when nothing is due
    pub fn find_best_and_worst_days(
        &self,
        habit: &Habit,
        records: &[CompletionRecord],
        start: NaiveDate,
        end: NaiveDate,
    ) -> BestWorstDays {
        let history = CompletionHistory::from_records(records);
        rates::find_best_and_worst_days(habit, &history, start, end)
    }

    /// Monthly success-rate series for one year
    pub fn monthly_trend(
        &self,
        habit: &Habit,
        records: &[CompletionRecord],
        year: i32,
    ) -> Vec<MonthlyTrend> {
        let history = CompletionHistory::from_records(records);
        rates::monthly_trend(habit, &history, year)
    }

    /// Success rate with ISO `YYYY-MM-DD` string bounds
    ///
    /// This is the string boundary the calling controller layer would
    /// otherwise implement itself: format and ordering problems surface as
    /// DomainError before any computation runs.
    pub fn success_rate_between(
        &self,
        habit: &Habit,
        records: &[CompletionRecord],
        start: &str,
        end: &str,
    ) -> Result<f64, DomainError> {
        let (start, end) = parse_range(start, end)?;
        Ok(self.success_rate(habit, records, start, end))
    }

    /// Day-of-week stats with ISO `YYYY-MM-DD` string bounds
    pub fn day_of_week_stats_between(
        &self,
        habit: &Habit,
        records: &[CompletionRecord],
        start: &str,
        end: &str,
    ) -> Result<Vec<DayOfWeekStat>, DomainError> {
        let (start, end) = parse_range(start, end)?;
        Ok(self.day_of_week_stats(habit, records, start, end))
    }

    /// Best/worst weekday with ISO `YYYY-MM-DD` string bounds
    pub fn find_best_and_worst_days_between(
        &self,
        habit: &Habit,
        records: &[CompletionRecord],
        start: &str,
        end: &str,
    ) -> Result<BestWorstDays, DomainError> {
        let (start, end) = parse_range(start, end)?;
        Ok(self.find_best_and_worst_days(habit, records, start, end))
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an ISO `YYYY-MM-DD` date string
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(format!("Expected YYYY-MM-DD, got '{}'", s)))
}

fn parse_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), DomainError> {
    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;

    if start_date > end_date {
        return Err(DomainError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok((start_date, end_date))
}
