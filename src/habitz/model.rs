use chrono::NaiveDate;
use serde::Serialize;
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Identity of a habit: its trimmed, lower-cased name.
///
/// Names keep the casing they were written with, but two names that differ
/// only in case refer to the same habit. Ordering by key is the canonical
/// listing order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HabitKey(String);

impl HabitKey {
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }
}

impl fmt::Display for HabitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tracked habit and the days it was completed on.
///
/// Serializes to the on-disk line format. The streak is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Habit {
    #[serde(rename = "habit_name")]
    pub name: String,
    pub dates: BTreeSet<NaiveDate>,
}

impl Habit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dates: BTreeSet::new(),
        }
    }

    pub fn with_dates<I: IntoIterator<Item = NaiveDate>>(mut self, dates: I) -> Self {
        self.dates.extend(dates);
        self
    }

    pub fn key(&self) -> HabitKey {
        HabitKey::new(&self.name)
    }

    pub fn is_done_on(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Records a completion. Returns false if the date was already recorded.
    pub fn mark_done(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    pub fn clear(&mut self) {
        self.dates.clear();
    }
}

/// The full habit set, at most one entry per case-insensitive name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Habits {
    entries: BTreeMap<HabitKey, Habit>,
}

impl Habits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Habit> {
        self.entries.get(&HabitKey::new(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&HabitKey::new(name))
    }

    /// Inserts or replaces the habit sharing `habit`'s key. The new casing wins.
    pub fn insert(&mut self, habit: Habit) -> Option<Habit> {
        self.entries.insert(habit.key(), habit)
    }

    pub fn remove_key(&mut self, key: &HabitKey) -> Option<Habit> {
        self.entries.remove(key)
    }

    /// Removes the habit whose stored name is exactly `name` (after trimming).
    pub fn remove_exact(&mut self, name: &str) -> Option<Habit> {
        let name = name.trim();
        let key = HabitKey::new(name);
        match self.entries.get(&key) {
            Some(habit) if habit.name == name => self.entries.remove(&key),
            _ => None,
        }
    }

    /// Habits in canonical (case-insensitive name) order.
    pub fn iter(&self) -> impl Iterator<Item = &Habit> {
        self.entries.values()
    }

    pub fn names(&self) -> Vec<String> {
        self.iter().map(|h| h.name.clone()).collect()
    }
}

impl FromIterator<Habit> for Habits {
    fn from_iter<I: IntoIterator<Item = Habit>>(iter: I) -> Self {
        let mut habits = Habits::new();
        for habit in iter {
            habits.insert(habit);
        }
        habits
    }
}

impl IntoIterator for Habits {
    type Item = Habit;
    type IntoIter = btree_map::IntoValues<HabitKey, Habit>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}
