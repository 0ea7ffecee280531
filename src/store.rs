/// The habit store: owned application state and every mutation on it
///
/// One store instance owns the ordered habit collection, the selected date,
/// and the profile image reference. Presentation surfaces borrow it and go
/// through the methods here; nothing else mutates the collection. Every
/// mutation writes state back through the storage adapter before returning.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};

use crate::domain::{starter_habits, Habit, HabitDraft, HabitId, DEFAULT_PROFILE_IMAGE};
use crate::stats;
use crate::storage::{KeyValueStorage, HABITS_KEY, PROFILE_IMAGE_KEY};

/// Owned store over the habit collection and session state
///
/// Generic over the storage adapter so tests can run against the in-memory
/// adapter while real installs use SQLite.
pub struct HabitStore<S: KeyValueStorage> {
    storage: S,
    habits: Vec<Habit>,
    selected_date: NaiveDate,
    profile_image: String,
}

impl<S: KeyValueStorage> HabitStore<S> {
    /// Load the store from persisted state
    ///
    /// Never fails: a first run (or an unreadable blob) seeds the starter
    /// habits and default avatar instead. The selected date starts at today
    /// in local time; this is the only place the store reads the clock.
    pub fn load(storage: S) -> Self {
        let habits = match storage.load(HABITS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(habits) => habits,
                Err(e) => {
                    tracing::error!("Stored habit collection is unreadable, reseeding: {}", e);
                    starter_habits()
                }
            },
            Ok(None) => {
                tracing::info!("No stored habits found, seeding starter set");
                starter_habits()
            }
            Err(e) => {
                tracing::error!("Failed to read stored habits, seeding starter set: {}", e);
                starter_habits()
            }
        };

        let profile_image = match storage.load(PROFILE_IMAGE_KEY) {
            Ok(Some(reference)) => reference,
            Ok(None) => DEFAULT_PROFILE_IMAGE.to_string(),
            Err(e) => {
                tracing::error!("Failed to read profile image reference: {}", e);
                DEFAULT_PROFILE_IMAGE.to_string()
            }
        };

        tracing::info!("Habit store loaded with {} habits", habits.len());

        Self {
            storage,
            habits,
            selected_date: Local::now().date_naive(),
            profile_image,
        }
    }

    // Accessors

    /// The ordered habit collection
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Look up one habit by id
    pub fn habit(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == *id)
    }

    /// The date completion is currently evaluated against
    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// The avatar reference (a URL or inline-encoded capture)
    pub fn profile_image(&self) -> &str {
        &self.profile_image
    }

    /// Get a reference to the storage adapter (useful for testing)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, handing the storage adapter back
    pub fn into_storage(self) -> S {
        self.storage
    }

    // Mutations

    /// Create a habit from a draft and append it to the collection
    ///
    /// A draft whose name trims to empty is ignored: nothing is added,
    /// nothing is persisted, and None is returned so the form can stay open.
    /// Otherwise the new habit gets a fresh random id and an empty completion
    /// history, and a reference to it is returned.
    pub fn create(&mut self, draft: HabitDraft) -> Option<&Habit> {
        if !draft.has_valid_name() {
            tracing::debug!("Ignoring habit creation with empty name");
            return None;
        }

        let habit = Habit::from_draft(HabitId::new(), BTreeSet::new(), draft);
        tracing::info!("Created habit: {} ({})", habit.name, habit.id);

        self.habits.push(habit);
        self.persist_habits();
        self.habits.last()
    }

    /// Replace a stored habit wholesale, matching on its id
    ///
    /// Every field is taken from the argument, including the completion
    /// history, and the habit keeps its position in the collection. An id
    /// that matches nothing leaves the store untouched - callers rely on
    /// replace-or-ignore, never an error.
    pub fn update(&mut self, habit: Habit) {
        if habit.name.trim().is_empty() {
            tracing::debug!("Ignoring update with empty name for habit {}", habit.id);
            return;
        }

        match self.habits.iter_mut().find(|h| h.id == habit.id) {
            Some(slot) => {
                *slot = habit;
                self.persist_habits();
            }
            None => {
                tracing::debug!("Ignoring update for unknown habit {}", habit.id);
            }
        }
    }

    /// Apply edit-form changes to a habit, keeping its id and history
    ///
    /// This is the authoring-surface counterpart to update(): the draft
    /// replaces every field except id and completed_days. Empty names and
    /// unknown ids are ignored the same way create() and update() ignore them.
    pub fn edit(&mut self, id: &HabitId, draft: HabitDraft) {
        if !draft.has_valid_name() {
            tracing::debug!("Ignoring edit with empty name for habit {}", id);
            return;
        }

        let Some(habit) = self.habits.iter_mut().find(|h| h.id == *id) else {
            tracing::debug!("Ignoring edit for unknown habit {}", id);
            return;
        };

        let completed_days = std::mem::take(&mut habit.completed_days);
        *habit = Habit::from_draft(id.clone(), completed_days, draft);
        self.persist_habits();
    }

    /// Remove a habit by id; absent ids are a benign no-op
    pub fn delete(&mut self, id: &HabitId) {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != *id);

        if self.habits.len() == before {
            tracing::debug!("Ignoring delete for unknown habit {}", id);
            return;
        }

        tracing::info!("Deleted habit {}", id);
        self.persist_habits();
    }

    /// Toggle completion of a habit for the selected date
    pub fn toggle_completion(&mut self, id: &HabitId) {
        self.toggle_completion_on(id, self.selected_date);
    }

    /// Toggle completion of a habit for an explicit date
    ///
    /// Adds the date to the habit's completion set if absent, removes it if
    /// present - exactly one of the two, so calling twice restores the
    /// original state. Unknown ids are ignored.
    pub fn toggle_completion_on(&mut self, id: &HabitId, date: NaiveDate) {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == *id) else {
            tracing::debug!("Ignoring toggle for unknown habit {}", id);
            return;
        };

        let done = habit.toggle_day(date);
        tracing::debug!(
            "Habit {} marked {} for {}",
            id,
            if done { "done" } else { "not done" },
            date
        );
        self.persist_habits();
    }

    /// Change the date completion is evaluated against
    ///
    /// Purely a view concern: nothing is persisted and no habit changes.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Replace the avatar reference and persist it
    pub fn set_profile_image(&mut self, reference: impl Into<String>) {
        self.profile_image = reference.into();
        self.persist_profile_image();
    }

    // Derived values

    /// Percentage of habits completed on the selected date
    pub fn daily_completion_percentage(&self) -> u8 {
        stats::daily_completion_percentage(&self.habits, self.selected_date)
    }

    // Persistence
    //
    // Writes are fire-and-forget: a failed write is logged and the in-memory
    // state stays authoritative, so a storage hiccup never interrupts a tap.

    fn persist_habits(&self) {
        let blob = match serde_json::to_string(&self.habits) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!("Failed to serialize habit collection: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.save(HABITS_KEY, &blob) {
            tracing::error!("Failed to persist habit collection: {}", e);
        }
    }

    fn persist_profile_image(&self) {
        if let Err(e) = self.storage.save(PROFILE_IMAGE_KEY, &self.profile_image) {
            tracing::error!("Failed to persist profile image reference: {}", e);
        }
    }
}
