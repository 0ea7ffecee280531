/// First-run seed data
///
/// A fresh install starts with a small set of ready-made habits instead of an
/// empty dashboard. Each call produces new ids and clean completion history.

use std::collections::BTreeSet;

use crate::domain::{Category, Frequency, Habit, HabitId};

/// Avatar reference used until the user sets their own
pub const DEFAULT_PROFILE_IMAGE: &str = "https://picsum.photos/200";

/// The habits seeded on first run
pub fn starter_habits() -> Vec<Habit> {
    vec![
        starter(
            "Morning Workout",
            "30 mins cardio",
            Category::Fitness,
            "30 mins",
            None,
            None,
            "orange",
        ),
        starter(
            "Read 10 pages",
            "Atomic Habits",
            Category::Reading,
            "10 pages",
            None,
            None,
            "blue",
        ),
        starter(
            "Drink Water",
            "Goal: 3000ml",
            Category::Hydration,
            "3000ml",
            Some(3000),
            Some(2000),
            "indigo",
        ),
        starter(
            "Meditate",
            "15 mins mindfulness",
            Category::Meditation,
            "15 mins",
            None,
            None,
            "purple",
        ),
        starter(
            "Sleep Early",
            "Before 11:00 PM",
            Category::Sleep,
            "11:00 PM",
            None,
            None,
            "yellow",
        ),
    ]
}

fn starter(
    name: &str,
    description: &str,
    category: Category,
    goal: &str,
    target_value: Option<u32>,
    current_value: Option<u32>,
    color: &str,
) -> Habit {
    Habit {
        id: HabitId::new(),
        name: name.to_string(),
        description: Some(description.to_string()),
        category,
        goal: goal.to_string(),
        target_value,
        current_value,
        completed_days: BTreeSet::new(),
        color: color.to_string(),
        frequency: Frequency::Daily,
        reminder_time: None,
    }
}
