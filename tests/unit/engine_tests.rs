/// Engine-level scenarios driven through the public AnalyticsEngine surface
use habit_analytics::*;
use chrono::NaiveDate;
use std::collections::BTreeSet;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn weekly(days: &[u8]) -> Repetition {
    Repetition::Weekly { days: days.iter().copied().collect::<BTreeSet<u8>>() }
}

fn habit(repetition: Repetition, created_at: &str) -> Habit {
    Habit::from_existing(
        HabitId::new(),
        "Test Habit".to_string(),
        repetition,
        date(created_at),
        0,
        0,
    )
}

fn records(habit: &Habit, entries: &[(&str, bool)]) -> Vec<CompletionRecord> {
    entries
        .iter()
        .map(|(d, c)| CompletionRecord::from_existing(habit.id.clone(), date(d), *c))
        .collect()
}

#[test]
fn daily_chain_of_three_yields_current_streak_three() {
    let engine = AnalyticsEngine::new();
    let habit = habit(Repetition::Daily, "2024-01-01");
    let records = records(&habit, &[
        ("2024-01-01", true),
        ("2024-01-02", true),
        ("2024-01-03", true),
    ]);

    let streak = engine.current_streak_at(&habit, &records, date("2024-01-03"));
    assert_eq!(streak, 3);
}

#[test]
fn four_sundays_give_best_streak_four_and_perfect_rate() {
    let engine = AnalyticsEngine::new();
    let habit = habit(weekly(&[0]), "2024-01-01");
    let records = records(&habit, &[
        ("2024-01-07", true),
        ("2024-01-14", true),
        ("2024-01-21", true),
        ("2024-01-28", true),
    ]);

    let update = engine.recompute_streaks_at(&habit, &records, date("2024-01-28"));
    assert_eq!(update.best_streak, 4);

    let rate = engine.success_rate(&habit, &records, date("2024-01-07"), date("2024-01-28"));
    assert_eq!(rate, 1.0);
}

#[test]
fn gap_beyond_grace_window_splits_streak_periods() {
    let engine = AnalyticsEngine::new();
    let habit = habit(Repetition::Daily, "2024-01-01");
    let records = records(&habit, &[
        ("2024-01-01", true),
        ("2024-01-02", true),
        ("2024-01-05", true),
    ]);

    let periods = engine.streak_periods(&habit, &records);
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].length, 2);
    assert_eq!(periods[0].start_date, date("2024-01-01"));
    assert_eq!(periods[0].end_date, date("2024-01-02"));
    assert_eq!(periods[1].length, 1);
    assert_eq!(periods[1].start_date, date("2024-01-05"));
}

#[test]
fn weekly_habit_with_no_days_is_never_due() {
    let engine = AnalyticsEngine::new();
    let habit = habit(weekly(&[]), "2024-01-01");
    let records = records(&habit, &[("2024-03-10", true)]);

    for offset in 0..30 {
        let d = date("2024-01-01") + chrono::Duration::days(offset);
        assert!(!is_due(d, &habit.repetition));
    }

    let rate = engine.success_rate(&habit, &records, date("2024-01-01"), date("2024-12-31"));
    assert_eq!(rate, 0.0);
}

#[test]
fn only_active_day_is_both_best_and_worst() {
    let engine = AnalyticsEngine::new();
    let habit = habit(weekly(&[2]), "2024-01-01");
    // Three observed Tuesdays, all completed
    let records = records(&habit, &[
        ("2024-01-02", true),
        ("2024-01-09", true),
        ("2024-01-16", true),
    ]);

    let result = engine.find_best_and_worst_days(&habit, &records, date("2024-01-01"), date("2024-01-16"));
    assert_eq!(result.best, 2);
    assert_eq!(result.worst, 2);
}

#[test]
fn success_rate_stays_in_unit_interval_for_on_schedule_histories() {
    let engine = AnalyticsEngine::new();
    let habit = habit(Repetition::Daily, "2024-01-01");
    let records = records(&habit, &[
        ("2024-01-01", true),
        ("2024-01-02", false),
        ("2024-01-05", true),
        ("2024-01-09", true),
    ]);

    for (start, end) in [
        ("2024-01-01", "2024-01-01"),
        ("2024-01-01", "2024-01-09"),
        ("2024-01-03", "2024-01-04"),
        ("2023-12-01", "2024-02-01"),
    ] {
        let rate = engine.success_rate(&habit, &records, date(start), date(end));
        assert!((0.0..=1.0).contains(&rate), "rate {} out of range for {}..{}", rate, start, end);
    }
}

#[test]
fn identical_input_yields_identical_output() {
    let engine = AnalyticsEngine::new();
    let habit = habit(Repetition::Daily, "2024-01-01");
    let records = records(&habit, &[
        ("2024-01-03", true),
        ("2024-01-01", true),
        ("2024-01-02", false),
    ]);
    let today = date("2024-01-03");

    assert_eq!(
        engine.current_streak_at(&habit, &records, today),
        engine.current_streak_at(&habit, &records, today),
    );
    assert_eq!(
        engine.all_streaks(&habit, &records),
        engine.all_streaks(&habit, &records),
    );
    assert_eq!(
        engine.streak_periods(&habit, &records),
        engine.streak_periods(&habit, &records),
    );
}

#[test]
fn recompute_never_lowers_stored_best_streak() {
    let engine = AnalyticsEngine::new();
    let mut habit = habit(Repetition::Daily, "2024-01-01");
    habit.best_streak = 20;

    // History edited down to a single day
    let records = records(&habit, &[("2024-01-01", true)]);
    let update = engine.recompute_streaks_at(&habit, &records, date("2024-01-01"));

    assert_eq!(update.best_streak, 20);

    habit.apply_streaks(update.current_streak, update.best_streak);
    assert_eq!(habit.best_streak, 20);
    assert!(habit.best_streak >= habit.current_streak);
}

#[test]
fn stale_history_resets_current_but_not_best() {
    let engine = AnalyticsEngine::new();
    let habit = habit(Repetition::Daily, "2024-01-01");
    let records = records(&habit, &[
        ("2024-01-01", true),
        ("2024-01-02", true),
        ("2024-01-03", true),
    ]);

    let update = engine.recompute_streaks_at(&habit, &records, date("2024-02-01"));
    assert_eq!(update.current_streak, 0);
    assert_eq!(update.best_streak, 3);
}

#[test]
fn unordered_records_produce_the_same_results() {
    let engine = AnalyticsEngine::new();
    let habit = habit(Repetition::Daily, "2024-01-01");
    let ordered = records(&habit, &[
        ("2024-01-01", true),
        ("2024-01-02", true),
        ("2024-01-03", true),
    ]);
    let shuffled = records(&habit, &[
        ("2024-01-02", true),
        ("2024-01-03", true),
        ("2024-01-01", true),
    ]);

    let today = date("2024-01-03");
    assert_eq!(
        engine.current_streak_at(&habit, &ordered, today),
        engine.current_streak_at(&habit, &shuffled, today),
    );
    assert_eq!(
        engine.streak_periods(&habit, &ordered),
        engine.streak_periods(&habit, &shuffled),
    );
}

#[test]
fn monthly_habit_tolerates_month_long_gaps() {
    let engine = AnalyticsEngine::new();
    let habit = habit(
        Repetition::Monthly { days: [1].into_iter().collect::<BTreeSet<u8>>() },
        "2024-01-01",
    );
    let records = records(&habit, &[
        ("2024-01-01", true),
        ("2024-02-01", true),
        ("2024-03-01", true),
    ]);

    let streak = engine.current_streak_at(&habit, &records, date("2024-03-01"));
    assert_eq!(streak, 3);

    // The Jan 1 -> Feb 1 gap is exactly 31 days, right at the window boundary
    let update = engine.recompute_streaks_at(&habit, &records, date("2024-03-01"));
    assert_eq!(update.best_streak, 3);
}
