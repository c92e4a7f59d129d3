use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::find_habit;

pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    // The store deletes by stored name, so resolve the casing first.
    let habit = find_habit(store, name)?;
    store.delete(&habit.name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Habit removed: {}",
        habit.name
    )));
    Ok(result.with_affected_habits(vec![habit]))
}
