use crate::model::Habit;
use crate::store::CompactReport;
use crate::streak::{StreakStatus, TimeRemaining};
use chrono::NaiveDate;

pub mod clear;
pub mod clock;
pub mod create;
pub mod doctor;
pub mod done;
pub mod helpers;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A habit as shown to the user: its stored data plus the derived streak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitRow {
    pub name: String,
    pub dates: Vec<NaiveDate>,
    pub streak: u32,
    pub status: StreakStatus,
}

impl HabitRow {
    pub fn new(habit: &Habit, today: NaiveDate) -> Self {
        Self {
            name: habit.name.clone(),
            dates: habit.dates.iter().copied().collect(),
            streak: crate::streak::streak(&habit.dates, today),
            status: StreakStatus::of(&habit.dates, today),
        }
    }

    pub fn done_today(&self) -> bool {
        self.status == StreakStatus::Active
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_habits: Vec<Habit>,
    pub listed_habits: Vec<HabitRow>,
    pub time_remaining: Option<TimeRemaining>,
    pub compact_report: Option<CompactReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_habits(mut self, habits: Vec<Habit>) -> Self {
        self.affected_habits = habits;
        self
    }

    pub fn with_listed_habits(mut self, habits: Vec<HabitRow>) -> Self {
        self.listed_habits = habits;
        self
    }

    pub fn with_time_remaining(mut self, remaining: TimeRemaining) -> Self {
        self.time_remaining = Some(remaining);
        self
    }

    pub fn with_compact_report(mut self, report: CompactReport) -> Self {
        self.compact_report = Some(report);
        self
    }
}
