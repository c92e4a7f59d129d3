use super::backend::StorageBackend;
use super::{CompactReport, DataStore, LoadReport};
use crate::error::Result;
use crate::model::Habits;
use crate::sanitize::{sanitize_habit, sanitize_line, LineOutcome, Rejection};
use std::path::PathBuf;

pub struct HabitStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> HabitStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Parses the habit file, sanitizing line by line. Never fails.
///
/// Later lines win: a record replaces any earlier one with the same
/// case-insensitive name, and a tombstone removes it. Lines that are not
/// valid UTF-8 are skipped like any other malformed line.
pub fn parse_habits(contents: &[u8]) -> (Habits, LoadReport) {
    let mut habits = Habits::new();
    let mut report = LoadReport::default();

    for (idx, bytes) in contents.split(|&b| b == b'\n').enumerate() {
        let outcome = match std::str::from_utf8(bytes) {
            Ok(line) => sanitize_line(line),
            Err(_) => LineOutcome::Rejected(Rejection::MalformedLine),
        };
        match outcome {
            LineOutcome::Blank => {}
            LineOutcome::Rejected(reason) => {
                log::debug!("skipping line {}: {:?}", idx + 1, reason);
                match reason {
                    Rejection::MalformedLine | Rejection::NotAnObject => {
                        report.skipped_lines += 1
                    }
                    Rejection::MissingName | Rejection::NameNotString | Rejection::BlankName => {
                        report.rejected_records += 1
                    }
                }
            }
            LineOutcome::Tombstone(key) => {
                log::debug!("line {}: tombstone for '{}'", idx + 1, key);
                report.tombstones += 1;
                habits.remove_key(&key);
            }
            LineOutcome::Record { habit, repairs } => {
                report.absorb(&repairs);
                if habits.insert(habit).is_some() {
                    report.merged_records += 1;
                }
            }
        }
    }

    (habits, report)
}

/// Renders the canonical file: one sanitized record per line, in name order.
pub fn render_habits(habits: &Habits) -> Result<String> {
    let mut out = String::new();
    for habit in habits.iter() {
        let habit = sanitize_habit(habit.clone())?;
        out.push_str(&serde_json::to_string(&habit)?);
        out.push('\n');
    }
    Ok(out)
}

impl<B: StorageBackend> DataStore for HabitStore<B> {
    fn load_with_report(&self) -> Result<(Habits, LoadReport)> {
        match self.backend.read()? {
            Some(contents) => Ok(parse_habits(&contents)),
            None => Ok((Habits::new(), LoadReport::default())),
        }
    }

    fn save(&mut self, habits: &Habits) -> Result<()> {
        // Render fully before touching storage so a bad record writes nothing.
        let contents = render_habits(habits)?;
        self.backend.write(&contents)
    }

    fn compact(&mut self) -> Result<CompactReport> {
        let Some(original) = self.backend.read()? else {
            return Ok(CompactReport::default());
        };

        let (habits, repairs) = parse_habits(&original);
        let contents = render_habits(&habits)?;
        let rewritten = contents.as_bytes() != original.as_slice();
        self.backend.write(&contents)?;

        if !repairs.is_clean() {
            log::warn!(
                "repaired {}: {:?}",
                self.backend.location().display(),
                repairs
            );
        } else if rewritten {
            log::info!("rewrote {} in canonical order", self.backend.location().display());
        }

        Ok(CompactReport {
            repairs,
            habits: habits.len(),
            rewritten,
        })
    }

    fn location(&self) -> PathBuf {
        self.backend.location()
    }
}
