/// End-to-end store workflows over the SQLite adapter
use habit_pulse::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod store_flow_tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("test date must be valid")
    }

    fn draft(name: &str) -> HabitDraft {
        HabitDraft {
            name: name.to_string(),
            description: None,
            category: Category::Reading,
            goal: "10 pages".to_string(),
            target_value: None,
            current_value: None,
            color: "blue".to_string(),
            frequency: Frequency::Daily,
            reminder_time: None,
        }
    }

    #[test]
    fn test_sqlite_adapter_key_value_contract() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path().to_path_buf())
            .expect("Failed to create storage");

        // A fresh database has nothing stored
        assert_eq!(storage.load(HABITS_KEY).expect("load works"), None);

        storage.save(HABITS_KEY, "[]").expect("save works");
        assert_eq!(
            storage.load(HABITS_KEY).expect("load works"),
            Some("[]".to_string())
        );

        // Saving again overwrites rather than duplicating
        storage.save(HABITS_KEY, "[1]").expect("save works");
        assert_eq!(
            storage.load(HABITS_KEY).expect("load works"),
            Some("[1]".to_string())
        );
    }

    #[test]
    fn test_first_run_seeds_and_mutations_survive_reopen() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let storage = SqliteStorage::new(db_path.clone()).expect("Failed to create storage");
        let mut store = HabitStore::load(storage);

        // First run seeds the starter set
        assert_eq!(store.habits().len(), 5);
        assert_eq!(store.profile_image(), DEFAULT_PROFILE_IMAGE);

        let id = store.habits()[0].id.clone();
        store.toggle_completion_on(&id, date("2024-02-01"));
        store.toggle_completion_on(&id, date("2024-02-02"));
        drop(store);

        // A second open of the same database sees the recorded days
        let storage = SqliteStorage::new(db_path).expect("Failed to reopen storage");
        let reloaded = HabitStore::load(storage);

        assert_eq!(reloaded.habits().len(), 5);
        let habit = reloaded.habit(&id).expect("habit survived reopen");
        assert!(habit.is_completed_on(date("2024-02-01")));
        assert!(habit.is_completed_on(date("2024-02-02")));
        assert_eq!(current_streak(habit, date("2024-02-02")), 2);
    }

    #[test]
    fn test_first_run_seeding_writes_nothing_back() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let storage = SqliteStorage::new(db_path.clone()).expect("Failed to create storage");
        let store = HabitStore::load(storage);
        assert_eq!(store.habits().len(), 5);
        drop(store);

        // Seeds live in memory until the first real mutation; opening and
        // closing the store leaves the database empty
        let storage = SqliteStorage::new(db_path).expect("Failed to reopen storage");
        assert_eq!(storage.load(HABITS_KEY).expect("load works"), None);
        assert_eq!(storage.load(PROFILE_IMAGE_KEY).expect("load works"), None);
    }

    #[test]
    fn test_created_and_deleted_habits_survive_reopen() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let storage = SqliteStorage::new(db_path.clone()).expect("Failed to create storage");
        let mut store = HabitStore::load(storage);

        let seeded = store.habits()[0].id.clone();
        store.delete(&seeded);
        let created = store.create(draft("Journal")).expect("valid draft").id.clone();
        drop(store);

        let storage = SqliteStorage::new(db_path).expect("Failed to reopen storage");
        let reloaded = HabitStore::load(storage);

        assert!(reloaded.habit(&seeded).is_none());
        let habit = reloaded.habit(&created).expect("created habit survived");
        assert_eq!(habit.name, "Journal");
        assert_eq!(reloaded.habits().len(), 5);
    }

    #[test]
    fn test_profile_image_survives_reopen() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let storage = SqliteStorage::new(db_path.clone()).expect("Failed to create storage");
        let mut store = HabitStore::load(storage);
        store.set_profile_image("file://custom-avatar.png");
        drop(store);

        let storage = SqliteStorage::new(db_path).expect("Failed to reopen storage");
        let reloaded = HabitStore::load(storage);

        assert_eq!(reloaded.profile_image(), "file://custom-avatar.png");
    }

    #[test]
    fn test_corrupt_blob_reseeds_and_next_write_recovers() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let storage = SqliteStorage::new(db_path.clone()).expect("Failed to create storage");
        storage
            .save(HABITS_KEY, "{definitely not json")
            .expect("save works");

        let mut store = HabitStore::load(storage);
        assert_eq!(store.habits().len(), 5);

        // The first mutation writes a valid blob over the corrupt one
        let id = store.habits()[0].id.clone();
        store.toggle_completion_on(&id, date("2024-02-01"));
        drop(store);

        let storage = SqliteStorage::new(db_path).expect("Failed to reopen storage");
        let reloaded = HabitStore::load(storage);
        assert!(reloaded
            .habit(&id)
            .expect("reseeded habit survived")
            .is_completed_on(date("2024-02-01")));
    }

    #[test]
    fn test_reseeding_leaves_the_stored_blob_in_place() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let storage = SqliteStorage::new(db_path.clone()).expect("Failed to create storage");
        storage
            .save(HABITS_KEY, "{definitely not json")
            .expect("save works");

        let store = HabitStore::load(storage);
        assert_eq!(store.habits().len(), 5);
        drop(store);

        // Without a mutation the reseed never touches the database; the
        // unreadable blob is still there
        let storage = SqliteStorage::new(db_path).expect("Failed to reopen storage");
        assert_eq!(
            storage.load(HABITS_KEY).expect("load works").as_deref(),
            Some("{definitely not json")
        );
    }

    #[test]
    fn test_week_of_usage_produces_consistent_statistics() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let storage = SqliteStorage::new(db_path.clone()).expect("Failed to create storage");
        let mut store = HabitStore::load(storage);

        let reading = store.create(draft("Journal")).expect("valid draft").id.clone();
        for day in ["2024-03-04", "2024-03-05", "2024-03-06", "2024-03-08"] {
            store.toggle_completion_on(&reading, date(day));
        }

        let habit = store.habit(&reading).expect("present");
        let stats = habit_stats(habit, date("2024-03-08"));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 3);
        assert_eq!(stats.total_completions, 4);
        assert_eq!(stats.last_completed, Some(date("2024-03-08")));

        let week = weekly_overview(store.habits(), date("2024-03-08"));
        assert_eq!(week.len(), 7);
        assert_eq!(week[6].date, date("2024-03-08"));
        assert_eq!(week[6].completed, 1);

        // The same numbers come back after a reopen
        drop(store);
        let storage = SqliteStorage::new(db_path).expect("Failed to reopen storage");
        let reloaded = HabitStore::load(storage);
        let habit = reloaded.habit(&reading).expect("present after reopen");
        assert_eq!(habit_stats(habit, date("2024-03-08")), stats);
    }
}
