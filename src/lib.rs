/// Habit analytics and streak engine
///
/// This library turns a habit's recurrence rule plus a sparse set of
/// per-date completion records into streaks, success rates, and
/// time-bucketed aggregates. It owns no persistence and performs no I/O;
/// the calling service layer loads habits and records, invokes the engine,
/// and writes the refreshed streak fields back.

// Internal modules
mod analytics;
mod domain;

// Re-export public modules and types
pub use analytics::*;
pub use domain::*;
