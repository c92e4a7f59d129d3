//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients.
//!
//! It owns the two external inputs the core needs: the store and the clock.
//! Every call asks the clock once, so "today" is fixed for the duration of
//! an operation. Returns structured types, never strings for the terminal.
//!
//! `HabitzApi<S: DataStore, C: Clock>` is generic over both:
//! - Production: `HabitzApi<FileStore, SystemClock>`
//! - Testing: `HabitzApi<InMemoryStore, FixedClock>`

use crate::clock::{Clock, SystemClock};
use crate::commands;
use crate::error::Result;
use crate::store::DataStore;
use crate::streak::{self, TimeRemaining};
use std::path::PathBuf;

pub struct HabitzApi<S: DataStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
}

impl<S: DataStore> HabitzApi<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: SystemClock,
        }
    }
}

impl<S: DataStore, C: Clock> HabitzApi<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// All habits in case-insensitive name order, with streaks as of today.
    pub fn list_habits(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, self.clock.today())
    }

    pub fn habit_streak(&self, name: &str) -> Result<u32> {
        let habit = commands::helpers::find_habit(&self.store, name)?;
        Ok(streak::streak(&habit.dates, self.clock.today()))
    }

    pub fn time_remaining_in_day(&self) -> TimeRemaining {
        streak::time_remaining_in_day(self.clock.now())
    }

    pub fn create_habit(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, name)
    }

    pub fn mark_done_today(&mut self, name: &str) -> Result<commands::CmdResult> {
        let today = self.clock.today();
        commands::done::run(&mut self.store, name, today)
    }

    pub fn clear_progress(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store, name)
    }

    pub fn remove_habit(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, name)
    }

    pub fn time_left(&self, name: &str) -> Result<commands::CmdResult> {
        commands::clock::run(&self.store, name, self.clock.now())
    }

    pub fn doctor(&mut self) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.store)
    }

    pub fn location(&self) -> PathBuf {
        self.store.location()
    }
}

pub use commands::{CmdMessage, CmdResult, HabitRow, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::HabitzError;
    use crate::store::memory::InMemoryStore;
    use chrono::{Days, NaiveDate};

    fn api_on(date: NaiveDate) -> HabitzApi<InMemoryStore, FixedClock> {
        HabitzApi::with_clock(InMemoryStore::new(), FixedClock::on(date))
    }

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn create_then_list() {
        let mut api = api_on(june(10));
        api.create_habit("walk").unwrap();
        api.create_habit("Bike").unwrap();

        let rows = api.list_habits().unwrap().listed_habits;
        let names: Vec<_> = rows.iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Bike", "walk"]);
    }

    #[test]
    fn create_blank_is_a_validation_error() {
        let mut api = api_on(june(10));
        let err = api.create_habit("   ").unwrap_err();
        assert!(matches!(err, HabitzError::Validation(_)));
        assert!(api.list_habits().unwrap().listed_habits.is_empty());
    }

    #[test]
    fn streak_follows_the_clock() {
        let mut api = api_on(june(8));
        api.create_habit("Read").unwrap();
        api.mark_done_today("Read").unwrap();

        let mut api = HabitzApi::with_clock(api.store, FixedClock::on(june(9)));
        assert_eq!(api.habit_streak("read").unwrap(), 1);
        api.mark_done_today("read").unwrap();
        assert_eq!(api.habit_streak("read").unwrap(), 2);

        let api = HabitzApi::with_clock(
            api.store,
            FixedClock::on(june(9).checked_add_days(Days::new(2)).unwrap()),
        );
        assert_eq!(api.habit_streak("read").unwrap(), 0);
    }

    #[test]
    fn clear_and_remove_resolve_names() {
        let mut api = api_on(june(10));
        api.create_habit("Read").unwrap();
        api.mark_done_today("READ").unwrap();

        api.clear_progress("read").unwrap();
        assert_eq!(api.habit_streak("Read").unwrap(), 0);

        api.remove_habit("rEAD").unwrap();
        assert!(matches!(
            api.habit_streak("Read"),
            Err(HabitzError::HabitNotFound(_))
        ));
    }

    #[test]
    fn time_remaining_uses_the_clock() {
        let api = api_on(june(10));
        assert_eq!(
            api.time_remaining_in_day(),
            TimeRemaining {
                hours: 11,
                minutes: 59
            }
        );
    }

    #[test]
    fn doctor_compacts_the_store() {
        let store = InMemoryStore::from_contents(
            "{\"habit_name\":\"b\",\"dates\":[],\"strike\":0}\n{\"habit_name\":\"a\",\"dates\":[]}\n",
        );
        let mut api = HabitzApi::with_clock(store, FixedClock::on(june(10)));
        let report = api.doctor().unwrap().compact_report.unwrap();

        assert!(report.rewritten);
        assert_eq!(report.habits, 2);
    }
}
