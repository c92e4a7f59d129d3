use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::find_habit;

/// Forgets every recorded day of a habit but keeps tracking it.
pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut habit = find_habit(store, name)?;
    let cleared = habit.dates.len();
    habit.clear();

    let habit = store.upsert(habit)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Progress reset for '{}' ({} day(s) cleared)",
        habit.name, cleared
    )));
    Ok(result.with_affected_habits(vec![habit]))
}
