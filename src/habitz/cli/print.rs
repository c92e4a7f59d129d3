use colored::Colorize;
use habitz::api::{CmdMessage, HabitRow, MessageLevel};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_NAME_WIDTH: usize = 30;
const FILLED_CELL: &str = "■";
const EMPTY_CELL: &str = "·";
const DONE_MARKER: &str = "✓";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_habits(rows: &[HabitRow], bar_days: usize) {
    if rows.is_empty() {
        println!("No habits yet. Start one with `habitz create <name>`.");
        return;
    }

    let name_width = rows
        .iter()
        .map(|row| row.name.width())
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);

    for row in rows {
        let name = truncate_to_width(&row.name, name_width);
        let padding = name_width.saturating_sub(name.width());
        let marker = if row.done_today() {
            DONE_MARKER.green().to_string()
        } else {
            " ".to_string()
        };

        println!(
            "  {} {}{}  {}  {}",
            marker,
            name.bold(),
            " ".repeat(padding),
            render_bar(row, bar_days),
            format!("streak: {}, days: {}", row.streak, row.dates.len()).dimmed()
        );
    }
}

/// One cell per day of the current streak, capped at `bar_days`.
/// Today's cell stands out when it is recorded.
fn render_bar(row: &HabitRow, bar_days: usize) -> String {
    let filled = (row.streak as usize).min(bar_days);
    let mut bar = String::new();
    for i in 0..bar_days {
        let cell = if i >= filled {
            EMPTY_CELL.bright_black()
        } else if row.done_today() && i + 1 == filled {
            FILLED_CELL.bright_green().bold()
        } else {
            FILLED_CELL.green()
        };
        bar.push_str(&cell.to_string());
    }
    bar
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
