use crate::commands::{CmdResult, HabitRow};
use crate::error::Result;
use crate::store::DataStore;
use chrono::NaiveDate;

pub fn run<S: DataStore>(store: &S, today: NaiveDate) -> Result<CmdResult> {
    let rows = store
        .load()?
        .iter()
        .map(|habit| HabitRow::new(habit, today))
        .collect();
    Ok(CmdResult::default().with_listed_habits(rows))
}
