/// Habit entity and the draft payload used to author one
///
/// This module defines the core Habit struct with its per-day completion set,
/// plus HabitDraft, the id-less shape that creation and edit forms submit.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, Frequency, HabitId};

/// A habit represents one tracked recurring behavior
///
/// The completion history lives directly on the habit as a set of calendar
/// days. Membership in that set is the only notion of "done" in the system;
/// every statistic is derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier, assigned at creation, immutable
    pub id: HabitId,
    /// Display name (e.g., "Morning Workout"); never empty after trimming
    pub name: String,
    /// Optional detailed description
    pub description: Option<String>,
    /// Life area this habit belongs to
    pub category: Category,
    /// Free-text target description (e.g., "30 mins", "10 pages")
    pub goal: String,
    /// Optional numeric target companion to the goal (e.g., 3000 for ml of water)
    pub target_value: Option<u32>,
    /// Optional progress toward target_value
    pub current_value: Option<u32>,
    /// Calendar days on which this habit was marked done
    ///
    /// A sorted set: no day can appear twice, and serialization is stable.
    pub completed_days: BTreeSet<NaiveDate>,
    /// Display accent, either a semantic token ("orange") or a literal value
    pub color: String,
    /// How often the habit is meant to happen (informational)
    pub frequency: Frequency,
    /// Optional reminder time of day; stored but nothing fires
    pub reminder_time: Option<NaiveTime>,
}

impl Habit {
    /// Build a habit from a draft, assigning identity and history
    ///
    /// Creation passes a fresh id and an empty day set; edit passes the
    /// existing habit's id and day set so both survive the field replacement.
    /// Callers are responsible for rejecting drafts with empty names first.
    pub fn from_draft(id: HabitId, completed_days: BTreeSet<NaiveDate>, draft: HabitDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            goal: draft.goal,
            target_value: draft.target_value,
            current_value: draft.current_value,
            completed_days,
            color: draft.color,
            frequency: draft.frequency,
            reminder_time: draft.reminder_time,
        }
    }

    /// Check whether this habit was marked done on the given day
    ///
    /// This is the single definition of "completed" shared by every surface
    /// and every statistic.
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_days.contains(&date)
    }

    /// Flip the completion state for one day
    ///
    /// Removes the day if present, inserts it otherwise - exactly one of the
    /// two happens per call, so toggling twice restores the original state.
    /// Returns whether the day is completed after the call.
    pub fn toggle_day(&mut self, date: NaiveDate) -> bool {
        if self.completed_days.remove(&date) {
            false
        } else {
            self.completed_days.insert(date);
            true
        }
    }

    /// Total number of days this habit was ever completed
    pub fn total_completions(&self) -> u32 {
        self.completed_days.len() as u32
    }

    /// The most recent day this habit was completed, if any
    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.completed_days.iter().next_back().copied()
    }
}

/// The fields a user supplies when creating or editing a habit
///
/// Everything on Habit except id and completed_days, which the store owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitDraft {
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub goal: String,
    pub target_value: Option<u32>,
    pub current_value: Option<u32>,
    pub color: String,
    pub frequency: Frequency,
    pub reminder_time: Option<NaiveTime>,
}

impl HabitDraft {
    /// Check whether this draft can become a habit (non-empty trimmed name)
    pub fn has_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
