/// Public library interface for the habit-pulse application core
///
/// This crate is the data and logic layer of a habit tracker: the habit
/// model, the owned store with its persistence boundary, pure statistics
/// over completion history, and the daily-insight service. A presentation
/// layer sits on top of these types; nothing here renders or blocks on IO
/// beyond the storage adapter and the insight fetch.

// Internal modules
mod advice;
mod domain;
mod stats;
mod storage;
mod store;

// Re-export public modules and types
pub use advice::{AdviceError, AdviceProvider, GeminiAdvice, InsightService};
pub use domain::*;
pub use stats::{
    best_streak, completion_rate, current_streak, daily_completion_percentage, habit_stats,
    longest_streak, overall_completion_rate, weekly_overview, DayCompletion, HabitStats,
    RATE_WINDOW_DAYS,
};
pub use storage::{
    KeyValueStorage, MemoryStorage, SqliteStorage, StorageError, HABITS_KEY, PROFILE_IMAGE_KEY,
};
pub use store::HabitStore;
