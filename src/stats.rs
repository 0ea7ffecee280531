/// Derived statistics over habit completion history
///
/// Every function here is pure: it reads completion sets and an explicit
/// reference date, never the system clock. The store passes its selected
/// date down, which keeps each number reproducible in tests and honest in
/// the UI (no placeholder or randomized figures).

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::domain::Habit;

/// Days covered by the completion-rate window
pub const RATE_WINDOW_DAYS: i64 = 30;

/// Completion summary for one calendar day across the whole collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCompletion {
    /// Which day this entry describes
    pub date: NaiveDate,
    /// How many habits were completed on that day
    pub completed: u32,
    /// How many habits existed in the collection
    pub total: u32,
    /// completed/total as a rounded percentage
    pub percent: u8,
}

/// Statistics bundle for a single habit, as shown on its detail surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitStats {
    /// Consecutive completed days ending at the reference date
    pub current_streak: u32,
    /// Longest run of consecutive days anywhere in the history
    pub longest_streak: u32,
    /// Most recent completed day, if any
    pub last_completed: Option<NaiveDate>,
    /// Total days ever completed
    pub total_completions: u32,
    /// Share of the trailing 30 days that were completed
    pub completion_rate: u8,
}

/// Percentage of habits completed on the given date
///
/// Rounds half-up to the nearest integer and returns 0 for an empty
/// collection rather than dividing by zero.
pub fn daily_completion_percentage(habits: &[Habit], date: NaiveDate) -> u8 {
    let completed = habits.iter().filter(|h| h.is_completed_on(date)).count();
    percentage(completed, habits.len())
}

/// Consecutive completed days ending at as_of
///
/// Walks backward one day at a time and stops at the first gap. If as_of
/// itself is not completed the streak is 0, even when earlier days are.
pub fn current_streak(habit: &Habit, as_of: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = as_of;

    while habit.is_completed_on(cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }

    streak
}

/// Longest run of consecutive completed days anywhere in the history
pub fn longest_streak(habit: &Habit) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &day in &habit.completed_days {
        run = match previous {
            Some(prev) if prev.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}

/// Best longest-streak across the whole collection
pub fn best_streak(habits: &[Habit]) -> u32 {
    habits.iter().map(longest_streak).max().unwrap_or(0)
}

/// Full statistics bundle for one habit's detail surface
pub fn habit_stats(habit: &Habit, as_of: NaiveDate) -> HabitStats {
    HabitStats {
        current_streak: current_streak(habit, as_of),
        longest_streak: longest_streak(habit),
        last_completed: habit.last_completed(),
        total_completions: habit.total_completions(),
        completion_rate: completion_rate(habit, as_of),
    }
}

/// Share of the trailing 30 days (ending at as_of) this habit was completed
pub fn completion_rate(habit: &Habit, as_of: NaiveDate) -> u8 {
    let completed = days_completed_in_window(habit, as_of);
    percentage(completed, RATE_WINDOW_DAYS as usize)
}

/// Collection-wide completion rate over the trailing 30 days
///
/// Counts completed (habit, day) cells against the full 30-day grid.
pub fn overall_completion_rate(habits: &[Habit], as_of: NaiveDate) -> u8 {
    let completed: usize = habits
        .iter()
        .map(|h| days_completed_in_window(h, as_of))
        .sum();
    percentage(completed, habits.len() * RATE_WINDOW_DAYS as usize)
}

/// Per-day completion summary for the 7 days ending at as_of, oldest first
pub fn weekly_overview(habits: &[Habit], as_of: NaiveDate) -> Vec<DayCompletion> {
    (0..7)
        .rev()
        .map(|offset| {
            let date = as_of - Duration::days(offset);
            let completed = habits.iter().filter(|h| h.is_completed_on(date)).count();
            DayCompletion {
                date,
                completed: completed as u32,
                total: habits.len() as u32,
                percent: percentage(completed, habits.len()),
            }
        })
        .collect()
}

// Shared helpers

/// Round-half-up integer percentage, 0 when the denominator is 0
///
/// Computed in integer arithmetic so exact halves never drift the way they
/// can through floating point.
fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u8
}

fn days_completed_in_window(habit: &Habit, as_of: NaiveDate) -> usize {
    (0..RATE_WINDOW_DAYS)
        .filter(|offset| habit.is_completed_on(as_of - Duration::days(*offset)))
        .count()
}
