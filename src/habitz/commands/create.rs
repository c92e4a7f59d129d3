use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HabitzError, Result};
use crate::model::Habit;
use crate::sanitize::sanitize_habit;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let habit = sanitize_habit(Habit::new(name))?;
    if let Some(existing) = store.load()?.get(&habit.name) {
        return Err(HabitzError::HabitExists(existing.name.clone()));
    }

    let habit = store.upsert(habit)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Habit created: {}",
        habit.name
    )));
    Ok(result.with_affected_habits(vec![habit]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_with_trimmed_name_and_no_dates() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "  Meditate ").unwrap();

        assert_eq!(result.affected_habits[0].name, "Meditate");
        let habits = store.load().unwrap();
        assert!(habits.get("meditate").unwrap().dates.is_empty());
    }

    #[test]
    fn rejects_blank_names_without_writing() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Read").unwrap();
        let before = store.backend().contents();

        let err = run(&mut store, "   ").unwrap_err();
        assert!(matches!(err, HabitzError::Validation(_)));
        assert_eq!(store.backend().contents(), before);
    }

    #[test]
    fn rejects_existing_name_in_any_case() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Read").unwrap();

        let err = run(&mut store, "READ").unwrap_err();
        assert!(matches!(err, HabitzError::HabitExists(name) if name == "Read"));
        assert_eq!(store.load().unwrap().names(), vec!["Read"]);
    }
}
