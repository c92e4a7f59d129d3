use super::habit_store::HabitStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = HabitStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        HabitStore::with_backend(MemBackend::new())
    }

    /// A store whose "file" already holds `contents`.
    pub fn from_contents(contents: impl AsRef<[u8]>) -> Self {
        HabitStore::with_backend(MemBackend::with_contents(contents))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Habit;
    use crate::store::DataStore;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds a habit completed on each of `dates` (`YYYY-MM-DD`).
        pub fn with_habit(mut self, name: &str, dates: &[&str]) -> Self {
            let dates = dates.iter().map(|s| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture date")
            });
            self.store
                .upsert(Habit::new(name).with_dates(dates))
                .expect("fixture upsert");
            self
        }
    }
}
