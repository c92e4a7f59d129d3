use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Rewrites the habit file in canonical form and explains what changed.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let report = store.compact()?;
    let repairs = &report.repairs;
    let mut result = CmdResult::default();

    if !report.rewritten {
        result.add_message(CmdMessage::success(format!(
            "No inconsistencies found ({} habit(s)).",
            report.habits
        )));
        return Ok(result.with_compact_report(report));
    }

    if repairs.is_clean() {
        result.add_message(CmdMessage::info(
            "Habit file rewritten in canonical order.",
        ));
        return Ok(result.with_compact_report(report));
    }

    result.add_message(CmdMessage::warning("Inconsistencies found and fixed:"));
    let lines = [
        (repairs.skipped_lines, "unreadable line(s) dropped"),
        (repairs.rejected_records, "record(s) without a usable name dropped"),
        (repairs.tombstones, "deletion marker(s) applied"),
        (repairs.merged_records, "duplicate habit record(s) merged"),
        (repairs.trimmed_names, "habit name(s) trimmed"),
        (repairs.dropped_dates, "invalid date(s) dropped"),
        (repairs.duplicate_dates, "duplicate date(s) merged"),
        (repairs.reformatted_dates, "date(s) reformatted"),
        (repairs.legacy_fields, "legacy field(s) removed"),
    ];
    for (count, what) in lines {
        if count > 0 {
            result.add_message(CmdMessage::info(format!("  - {} {}", count, what)));
        }
    }

    Ok(result.with_compact_report(report))
}
