//! # Streak Engine
//!
//! Pure functions over a set of completion dates. Nothing here reads the
//! clock: the reference date (or time) is always passed in.
//!
//! A streak counts consecutive completed days ending today if today is
//! recorded, otherwise ending yesterday. So a streak survives the current
//! day until a day is actually missed, but today only counts once done.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeSet;
use std::fmt;

/// Length of the consecutive-day run anchored at `reference`.
///
/// Walks backwards one day at a time, so the cost is the streak length.
/// Dates after `reference` are never reached.
pub fn streak(dates: &BTreeSet<NaiveDate>, reference: NaiveDate) -> u32 {
    let mut cursor = if dates.contains(&reference) {
        Some(reference)
    } else {
        reference.checked_sub_days(Days::new(1))
    };

    let mut count = 0;
    while let Some(day) = cursor.filter(|day| dates.contains(day)) {
        count += 1;
        cursor = day.checked_sub_days(Days::new(1));
    }
    count
}

/// Hours and minutes left in a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRemaining {
    pub hours: u32,
    pub minutes: u32,
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Time left until 23:59:59 on `now`'s date, floored to the minute.
pub fn time_remaining_in_day(now: NaiveDateTime) -> TimeRemaining {
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or_default();
    let end = now.date().and_time(end_of_day);
    let secs = (end - now).num_seconds().max(0);
    let secs = u32::try_from(secs).unwrap_or(0);
    TimeRemaining {
        hours: secs / 3600,
        minutes: (secs % 3600) / 60,
    }
}

/// Where a habit's streak stands on the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakStatus {
    /// Today is recorded.
    Active,
    /// Alive through yesterday; lost unless today gets recorded.
    AtRisk,
    Broken,
}

impl StreakStatus {
    pub fn of(dates: &BTreeSet<NaiveDate>, reference: NaiveDate) -> Self {
        if dates.contains(&reference) {
            StreakStatus::Active
        } else if streak(dates, reference) > 0 {
            StreakStatus::AtRisk
        } else {
            StreakStatus::Broken
        }
    }
}
