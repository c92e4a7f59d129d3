//! # Storage Layer
//!
//! The habit file is the single source of truth. Nothing is cached between
//! operations: every operation loads the whole file, and every mutation
//! rewrites the whole file.
//!
//! ## Layers
//!
//! - [`DataStore`]: what the rest of the crate talks to. `load` and `save`
//!   are the only primitives; `upsert`, `delete` and `compact` are built on
//!   them as full load-then-save cycles.
//! - [`habit_store::HabitStore`]: the line format and sanitization on top of
//!   a raw [`backend::StorageBackend`].
//! - Backends: [`fs_backend::FsBackend`] (production, atomic tmp+rename
//!   writes) and [`mem_backend::MemBackend`] (tests).
//!
//! ## Storage Format
//!
//! One JSON object per line, sorted by case-insensitive name:
//!
//! ```text
//! {"habit_name":"Read","dates":["2024-06-08","2024-06-09"]}
//! {"habit_name":"stretch","dates":[]}
//! ```
//!
//! Older files may also hold tombstones (`{"habit_name":"X","deleted":true}`)
//! which remove earlier lines for `X`, and stored streak values. Both are
//! understood on load and never written back.

use crate::error::Result;
use crate::model::{Habit, Habits};
use crate::sanitize::{sanitize_habit, Repairs};
use std::path::PathBuf;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod habit_store;
pub mod mem_backend;
pub mod memory;

/// What sanitization had to fix while loading.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines that were not a JSON object.
    pub skipped_lines: usize,
    /// Records dropped for a missing, non-string or blank name.
    pub rejected_records: usize,
    pub tombstones: usize,
    /// Later lines that replaced an earlier one with the same name.
    pub merged_records: usize,
    pub dropped_dates: usize,
    pub duplicate_dates: usize,
    pub reformatted_dates: usize,
    pub legacy_fields: usize,
    pub trimmed_names: usize,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        *self == LoadReport::default()
    }

    pub(crate) fn absorb(&mut self, repairs: &Repairs) {
        self.dropped_dates += repairs.dropped_dates;
        self.duplicate_dates += repairs.duplicate_dates;
        self.reformatted_dates += repairs.reformatted_dates;
        self.legacy_fields += repairs.legacy_fields;
        if repairs.trimmed_name {
            self.trimmed_names += 1;
        }
    }
}

/// Report from the `compact` operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompactReport {
    pub repairs: LoadReport,
    pub habits: usize,
    /// True if the file on disk was not already in canonical form.
    pub rewritten: bool,
}

/// Abstract interface for habit storage.
pub trait DataStore {
    /// Load and sanitize every record, reporting what was repaired.
    fn load_with_report(&self) -> Result<(Habits, LoadReport)>;

    /// Sanitize every record and replace the stored set with it.
    fn save(&mut self, habits: &Habits) -> Result<()>;

    /// Load, then rewrite in canonical form.
    fn compact(&mut self) -> Result<CompactReport>;

    /// Where the habits are stored.
    fn location(&self) -> PathBuf;

    fn load(&self) -> Result<Habits> {
        self.load_with_report().map(|(habits, _)| habits)
    }

    /// Create or replace a habit by case-insensitive name.
    ///
    /// The habit is sanitized first; a blank name fails before anything is
    /// read or written. Returns the habit as stored.
    fn upsert(&mut self, habit: Habit) -> Result<Habit> {
        let habit = sanitize_habit(habit)?;
        let mut habits = self.load()?;
        habits.insert(habit.clone());
        self.save(&habits)?;
        log::info!("saved habit '{}' ({} dates)", habit.name, habit.dates.len());
        Ok(habit)
    }

    /// Remove the habit stored under exactly `name`.
    ///
    /// Resolving a differently-cased name is up to the caller. Returns
    /// whether a habit was removed; the file is rewritten either way.
    fn delete(&mut self, name: &str) -> Result<bool> {
        let mut habits = self.load()?;
        let removed = habits.remove_exact(name).is_some();
        self.save(&habits)?;
        if removed {
            log::info!("deleted habit '{}'", name.trim());
        }
        Ok(removed)
    }
}
