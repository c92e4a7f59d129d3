use crate::error::{HabitzError, Result};
use crate::model::Habit;
use crate::store::DataStore;

/// Loads the habit named `name`, matching case-insensitively.
pub fn find_habit<S: DataStore>(store: &S, name: &str) -> Result<Habit> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HabitzError::Validation(
            "habit name cannot be empty".to_string(),
        ));
    }
    store
        .load()?
        .get(name)
        .cloned()
        .ok_or_else(|| HabitzError::HabitNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_regardless_of_case() {
        let fixture = StoreFixture::new().with_habit("Read", &[]);
        let habit = find_habit(&fixture.store, " rEAD ").unwrap();
        assert_eq!(habit.name, "Read");
    }

    #[test]
    fn unknown_and_blank_names_fail() {
        let fixture = StoreFixture::new().with_habit("Read", &[]);
        assert!(matches!(
            find_habit(&fixture.store, "Walk"),
            Err(HabitzError::HabitNotFound(name)) if name == "Walk"
        ));
        assert!(matches!(
            find_habit(&fixture.store, "  "),
            Err(HabitzError::Validation(_))
        ));
    }
}
