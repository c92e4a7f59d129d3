use chrono::NaiveDate;
use habitz::error::HabitzError;
use habitz::model::{Habit, Habits};
use habitz::store::fs::FileStore;
use habitz::store::DataStore;
use habitz::streak::streak;
use std::fs;
use tempfile::TempDir;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("habits.jsonl"));
    (dir, store)
}

fn read(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("habits.jsonl")).unwrap()
}

#[test]
fn save_load_save_round_trip_is_byte_identical() {
    let (dir, mut store) = setup();
    let habits: Habits = [
        Habit::new("Stretch").with_dates([d("2024-06-10"), d("2024-06-09")]),
        Habit::new("journal"),
        Habit::new("Água").with_dates([d("2023-12-31")]),
    ]
    .into_iter()
    .collect();

    store.save(&habits).unwrap();
    let first = read(&dir);

    let loaded = store.load().unwrap();
    assert_eq!(loaded, habits);
    store.save(&loaded).unwrap();
    assert_eq!(read(&dir), first);
}

#[test]
fn tombstone_after_definition_removes_it() {
    let (dir, store) = setup();
    fs::write(
        dir.path().join("habits.jsonl"),
        "{\"habit_name\":\"X\",\"dates\":[\"2024-06-10\"]}\n{\"habit_name\":\"X\",\"deleted\":true}\n",
    )
    .unwrap();

    assert!(store.load().unwrap().get("X").is_none());
}

#[test]
fn garbage_lines_and_dates_are_dropped() {
    let (dir, store) = setup();
    fs::write(
        dir.path().join("habits.jsonl"),
        "{\"habit_name\": \"Broken\"\n\
         {\"habit_name\": \"Typed\", \"dates\": [true]}\n\
         {\"habit_name\": \"Valid\", \"dates\": [\"2024-06-10\"]}\n",
    )
    .unwrap();

    let habits = store.load().unwrap();
    assert_eq!(habits.names(), vec!["Typed", "Valid"]);
    assert!(habits.get("Typed").unwrap().dates.is_empty());
    assert!(habits.get("Valid").unwrap().is_done_on(d("2024-06-10")));
}

#[test]
fn blank_upsert_leaves_file_unchanged() {
    let (dir, mut store) = setup();
    store.upsert(Habit::new("Walk")).unwrap();
    let before = read(&dir);

    let err = store.upsert(Habit::new(" \t ")).unwrap_err();
    assert!(matches!(err, HabitzError::Validation(_)));
    assert_eq!(read(&dir), before);
}

#[test]
fn compact_twice_is_byte_identical() {
    let (dir, mut store) = setup();
    fs::write(
        dir.path().join("habits.jsonl"),
        "{\"habit_name\": \"b\", \"dates\": [\"2024-06-02\", \"2024-06-01\"], \"strike\": 2}\n\
         {\"habit_name\": \"B\", \"dates\": []}\n\
         {\"habit_name\": \"a\"}\n",
    )
    .unwrap();

    store.compact().unwrap();
    let first = read(&dir);
    assert_eq!(
        first,
        "{\"habit_name\":\"a\",\"dates\":[]}\n{\"habit_name\":\"B\",\"dates\":[]}\n"
    );

    let report = store.compact().unwrap();
    assert!(!report.rewritten);
    assert_eq!(read(&dir), first);
}

#[test]
fn streak_from_loaded_dates() {
    let (_dir, mut store) = setup();
    store
        .upsert(Habit::new("Read").with_dates([
            d("2024-06-10"),
            d("2024-06-09"),
            d("2024-06-08"),
            d("2024-06-06"),
        ]))
        .unwrap();

    let habits = store.load().unwrap();
    let dates = &habits.get("read").unwrap().dates;
    assert_eq!(streak(dates, d("2024-06-10")), 3);
    assert_eq!(streak(dates, d("2024-06-11")), 3);
    assert_eq!(streak(dates, d("2024-06-12")), 0);
}
