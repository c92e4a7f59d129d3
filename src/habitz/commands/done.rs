use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use crate::streak::streak;
use chrono::NaiveDate;

use super::helpers::find_habit;

/// Records `today` as a completion. Already-recorded days are left alone.
pub fn run<S: DataStore>(store: &mut S, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let mut habit = find_habit(store, name)?;
    let mut result = CmdResult::default();

    if !habit.mark_done(today) {
        result.add_message(CmdMessage::info(format!(
            "'{}' is already recorded for today.",
            habit.name
        )));
        return Ok(result.with_affected_habits(vec![habit]));
    }

    let habit = store.upsert(habit)?;
    result.add_message(CmdMessage::success(format!(
        "'{}' done for {} (streak: {})",
        habit.name,
        today,
        streak(&habit.dates, today)
    )));
    Ok(result.with_affected_habits(vec![habit]))
}
