/// Success rates and time-bucketed aggregates
///
/// Everything here measures completions against due dates over an explicit
/// date window. The due-date denominator applies the habit's creation-date
/// floor; the success numerator deliberately does not filter on due-ness,
/// so a completion logged on a non-scheduled date still counts. That
/// asymmetry is long-standing observed behavior and is kept as-is.

use serde::{Deserialize, Serialize};
use chrono::{Datelike, Duration, NaiveDate};
use crate::analytics::{is_due, CompletionHistory};
use crate::domain::Habit;

/// Per-weekday aggregate over a date window, indexed 0=Sunday..6=Saturday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOfWeekStat {
    pub day_of_week: u8,
    pub total_days: u32,
    pub completed_days: u32,
    pub success_rate: f64,
}

/// One month of a year's trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// Month number, 1 through 12
    pub month: u32,
    pub success_rate: f64,
    pub completions: u32,
}

/// Best and worst weekday indices; -1 means no weekday had any due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestWorstDays {
    pub best: i32,
    pub worst: i32,
}

/// Dates in `[start, end]` the habit is due on, honoring the creation floor
fn due_dates(habit: &Habit, start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> + '_ {
    start
        .iter_days()
        .take_while(move |d| *d <= end)
        .filter(move |d| *d >= habit.created_at && is_due(*d, &habit.repetition))
}

/// Successful completions divided by due dates over `[start, end]`
///
/// Returns 0.0 when no date in the window is due. The numerator counts every
/// completed record in the window, scheduled or not (see module docs).
pub fn success_rate(
    habit: &Habit,
    history: &CompletionHistory,
    start: NaiveDate,
    end: NaiveDate,
) -> f64 {
    let due = due_dates(habit, start, end).count() as u32;
    if due == 0 {
        return 0.0;
    }

    let successes = history.successes_in(start, end);
    successes as f64 / due as f64
}

/// Per-weekday due/completed counts over `[start, end]`
///
/// All seven buckets are always returned, including ones with no due dates;
/// callers that want only active days filter on `total_days > 0`.
pub fn day_of_week_stats(
    habit: &Habit,
    history: &CompletionHistory,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DayOfWeekStat> {
    let mut total_days = [0u32; 7];
    let mut completed_days = [0u32; 7];

    for date in due_dates(habit, start, end) {
        let index = date.weekday().num_days_from_sunday() as usize;
        total_days[index] += 1;
        if history.completed_on(date) == Some(true) {
            completed_days[index] += 1;
        }
    }

    (0..7)
        .map(|index| DayOfWeekStat {
            day_of_week: index as u8,
            total_days: total_days[index],
            completed_days: completed_days[index],
            success_rate: if total_days[index] == 0 {
                0.0
            } else {
                completed_days[index] as f64 / total_days[index] as f64
            },
        })
        .collect()
}

/// The weekday indices with the strictly highest and lowest success rates
///
/// Buckets with no due dates are skipped. Left-to-right scan with strict
/// comparisons, so the first index wins ties for both best and worst.
/// Returns -1 sentinels when no weekday had a due date in the window.
pub fn find_best_and_worst_days(
    habit: &Habit,
    history: &CompletionHistory,
    start: NaiveDate,
    end: NaiveDate,
) -> BestWorstDays {
    let mut best = -1;
    let mut worst = -1;
    let mut best_rate = f64::NEG_INFINITY;
    let mut worst_rate = f64::INFINITY;

    for stat in day_of_week_stats(habit, history, start, end) {
        if stat.total_days == 0 {
            continue;
        }
        if stat.success_rate > best_rate {
            best_rate = stat.success_rate;
            best = stat.day_of_week as i32;
        }
        if stat.success_rate < worst_rate {
            worst_rate = stat.success_rate;
            worst = stat.day_of_week as i32;
        }
    }

    BestWorstDays { best, worst }
}

/// Success rate and completion count for each month of `year`
pub fn monthly_trend(
    habit: &Habit,
    history: &CompletionHistory,
    year: i32,
) -> Vec<MonthlyTrend> {
    let mut trend = Vec::with_capacity(12);

    for month in 1..=12 {
        let Some(start) = NaiveDate::from_ymd_opt(year, month, 1) else {
            continue;
        };
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let Some(end) = next_month.map(|d| d - Duration::days(1)) else {
            continue;
        };

        trend.push(MonthlyTrend {
            month,
            success_rate: success_rate(habit, history, start, end),
            completions: history.successes_in(start, end),
        });
    }

    trend
}
