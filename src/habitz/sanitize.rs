//! # Sanitization Policy
//!
//! Every record passes through this module on the way in (load) and on the
//! way out (save). The policy has two tiers:
//!
//! - **Fatal**: only on the write path. A habit whose name trims to nothing
//!   is refused with [`HabitzError::Validation`] and nothing is written.
//! - **Tolerated**: everything else. On the read path a bad line or a bad
//!   name drops that one record ([`Rejection`]); bad dates and legacy fields
//!   are filtered out of an otherwise good record and counted in [`Repairs`].
//!
//! Field rules for a line `{"habit_name": .., "dates": [..], ..}`:
//!
//! | Field        | Accepted                         | Otherwise                 |
//! |--------------|----------------------------------|---------------------------|
//! | `habit_name` | string, non-blank once trimmed   | record rejected           |
//! | `dates`      | array                            | treated as empty          |
//! | `dates[i]`   | string parsing as `YYYY-MM-DD`   | entry dropped             |
//! | `deleted`    | `true` marks a tombstone         | stripped as legacy        |
//! | anything else| never                            | stripped as legacy        |
//!
//! Dates come out de-duplicated, sorted, and re-formatted zero-padded, so a
//! sanitized record is a fixed point: sanitizing it again changes nothing.

use crate::error::{HabitzError, Result};
use crate::model::{Habit, HabitKey};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One line of the habit file, before any validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    habit_name: Option<Value>,
    #[serde(default)]
    dates: Option<Value>,
    #[serde(default)]
    deleted: Option<Value>,
    #[serde(flatten)]
    legacy: Map<String, Value>,
}

/// Why a whole line was dropped on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Not valid JSON.
    MalformedLine,
    /// Valid JSON, but not an object.
    NotAnObject,
    MissingName,
    NameNotString,
    BlankName,
}

/// Field-level fixes applied to a record that was kept.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Repairs {
    pub dropped_dates: usize,
    pub duplicate_dates: usize,
    pub reformatted_dates: usize,
    pub legacy_fields: usize,
    pub trimmed_name: bool,
}

impl Repairs {
    pub fn is_clean(&self) -> bool {
        *self == Repairs::default()
    }
}

/// Result of sanitizing one line of the habit file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Blank,
    Record { habit: Habit, repairs: Repairs },
    /// Legacy `{"habit_name": .., "deleted": true}` marker.
    Tombstone(HabitKey),
    Rejected(Rejection),
}

/// Parses a stored date: four-digit year, then month and day of one or two
/// digits each. Signs, padding and whitespace are refused.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !has_date_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

fn has_date_shape(s: &str) -> bool {
    let mut parts = s.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
}

/// Sanitizes a single line read from storage. Never fails.
pub fn sanitize_line(line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(_) => return LineOutcome::Rejected(Rejection::MalformedLine),
    };
    if !value.is_object() {
        return LineOutcome::Rejected(Rejection::NotAnObject);
    }
    let raw: RawRecord = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(_) => return LineOutcome::Rejected(Rejection::MalformedLine),
    };

    let raw_name = match raw.habit_name {
        None => return LineOutcome::Rejected(Rejection::MissingName),
        Some(Value::String(name)) => name,
        Some(_) => return LineOutcome::Rejected(Rejection::NameNotString),
    };
    let name = raw_name.trim();
    if name.is_empty() {
        return LineOutcome::Rejected(Rejection::BlankName);
    }

    if raw.deleted == Some(Value::Bool(true)) {
        return LineOutcome::Tombstone(HabitKey::new(name));
    }

    let mut repairs = Repairs {
        trimmed_name: name.len() != raw_name.len(),
        legacy_fields: raw.legacy.len() + usize::from(raw.deleted.is_some()),
        ..Repairs::default()
    };
    let dates = sanitize_dates(raw.dates, &mut repairs);

    if !repairs.is_clean() {
        log::debug!("repaired habit '{}': {:?}", name, repairs);
    }

    LineOutcome::Record {
        habit: Habit {
            name: name.to_string(),
            dates,
        },
        repairs,
    }
}

fn sanitize_dates(raw: Option<Value>, repairs: &mut Repairs) -> BTreeSet<NaiveDate> {
    let entries = match raw {
        None => return BTreeSet::new(),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            repairs.dropped_dates += 1;
            return BTreeSet::new();
        }
    };

    let mut dates = BTreeSet::new();
    for entry in entries {
        let text = match entry {
            Value::String(text) => text,
            _ => {
                repairs.dropped_dates += 1;
                continue;
            }
        };
        match parse_date(&text) {
            Some(date) => {
                if date.format(DATE_FORMAT).to_string() != text {
                    repairs.reformatted_dates += 1;
                }
                if !dates.insert(date) {
                    repairs.duplicate_dates += 1;
                }
            }
            None => repairs.dropped_dates += 1,
        }
    }
    dates
}

/// Write-path sanitization: trims the name and refuses blank ones.
pub fn sanitize_habit(habit: Habit) -> Result<Habit> {
    let name = habit.name.trim();
    if name.is_empty() {
        return Err(HabitzError::Validation(
            "habit name cannot be empty".to_string(),
        ));
    }
    if name.len() == habit.name.len() {
        return Ok(habit);
    }
    Ok(Habit {
        name: name.to_string(),
        dates: habit.dates,
    })
}
