use crate::commands::{CmdMessage, CmdResult, HabitRow};
use crate::error::Result;
use crate::store::DataStore;
use crate::streak::time_remaining_in_day;
use chrono::NaiveDateTime;

use super::helpers::find_habit;

/// How long is left today to keep (or restart) a habit's streak.
pub fn run<S: DataStore>(store: &S, name: &str, now: NaiveDateTime) -> Result<CmdResult> {
    let habit = find_habit(store, name)?;
    let row = HabitRow::new(&habit, now.date());
    let remaining = time_remaining_in_day(now);

    let message = if row.streak >= 1 {
        format!(
            "You still have {} remaining before the streak resets.",
            remaining
        )
    } else {
        format!(
            "Your streak has been reset, but you still have {} to make today count!",
            remaining
        )
    };

    let mut result = CmdResult::default()
        .with_listed_habits(vec![row])
        .with_time_remaining(remaining);
    result.add_message(CmdMessage::info(message));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::streak::TimeRemaining;

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-06-10 20:15:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn live_streak_reports_time_before_reset() {
        let fixture = StoreFixture::new().with_habit("Read", &["2024-06-09"]);
        let result = run(&fixture.store, "read", now()).unwrap();

        assert_eq!(
            result.time_remaining,
            Some(TimeRemaining { hours: 3, minutes: 44 })
        );
        assert_eq!(result.listed_habits[0].streak, 1);
        assert_eq!(
            result.messages[0].content,
            "You still have 03:44 remaining before the streak resets."
        );
    }

    #[test]
    fn broken_streak_encourages_today() {
        let fixture = StoreFixture::new().with_habit("Read", &["2024-06-01"]);
        let result = run(&fixture.store, "Read", now()).unwrap();

        assert_eq!(
            result.messages[0].content,
            "Your streak has been reset, but you still have 03:44 to make today count!"
        );
    }
}
