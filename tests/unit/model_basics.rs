/// Basic unit tests for the habit model and its supporting types
use habit_pulse::*;

#[cfg(test)]
mod model_basics_tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sample_draft() -> HabitDraft {
        HabitDraft {
            name: "Evening Walk".to_string(),
            description: Some("Around the block".to_string()),
            category: Category::Fitness,
            goal: "20 mins".to_string(),
            target_value: None,
            current_value: None,
            color: "orange".to_string(),
            frequency: Frequency::Daily,
            reminder_time: None,
        }
    }

    #[test]
    fn test_habit_creation_from_draft() {
        let id = HabitId::new();
        let habit = Habit::from_draft(id.clone(), BTreeSet::new(), sample_draft());

        assert_eq!(habit.id, id);
        assert_eq!(habit.name, "Evening Walk");
        assert_eq!(habit.category, Category::Fitness);
        assert!(habit.completed_days.is_empty());
    }

    #[test]
    fn test_habit_id_string_round_trip() {
        let id = HabitId::new();
        let parsed = HabitId::parse(&id.to_string()).expect("Failed to parse id");

        assert_eq!(parsed, id);
        assert!(HabitId::parse("definitely-not-a-uuid").is_err());
    }

    #[test]
    fn test_category_surface() {
        assert_eq!(Category::ALL.len(), 5);

        for category in Category::ALL {
            let parsed: Category = category.to_string().parse().expect("Failed to parse");
            assert_eq!(parsed, category);
        }

        assert!("gardening".parse::<Category>().is_err());
    }

    #[test]
    fn test_frequency_surface() {
        assert_eq!(Frequency::ALL.len(), 3);

        for frequency in Frequency::ALL {
            let parsed: Frequency = frequency.to_string().parse().expect("Failed to parse");
            assert_eq!(parsed, frequency);
        }

        assert!("hourly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_every_category_has_display_lookups() {
        for category in Category::ALL {
            assert!(!display::category_icon(category).is_empty());
            assert!(!display::category_accent(category).is_empty());
        }
    }

    #[test]
    fn test_starter_habits_are_well_formed() {
        let habits = starter_habits();

        assert_eq!(habits.len(), 5);
        for habit in &habits {
            assert!(!habit.name.trim().is_empty());
            assert!(habit.completed_days.is_empty());
            assert_eq!(habit.frequency, Frequency::Daily);
        }

        let ids: std::collections::HashSet<_> = habits.iter().map(|h| h.id.clone()).collect();
        assert_eq!(ids.len(), habits.len());
    }

    #[test]
    fn test_fallback_insight_has_content() {
        let insight = DailyInsight::fallback();

        assert!(!insight.quote.is_empty());
        assert!(!insight.advice.is_empty());
    }

    #[test]
    fn test_habit_survives_json_round_trip() {
        let mut habit = Habit::from_draft(HabitId::new(), BTreeSet::new(), sample_draft());
        habit.toggle_day(chrono::NaiveDate::from_ymd_opt(2024, 5, 20).expect("valid date"));

        let json = serde_json::to_string(&habit).expect("Failed to serialize");
        assert!(json.contains("\"2024-05-20\""));
        assert!(json.contains("\"fitness\""));

        let back: Habit = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(back, habit);
    }
}
