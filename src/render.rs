//! Plain-text rendering of query results for the terminal.

use crate::calendar::CalendarEntry;
use crate::constants::DISPLAY_DATE_FORMAT;
use crate::dates::DateKey;
use crate::readings::DayReadings;
use serde_json::Value;
use std::fmt::Write;

const ROMAN_WEEKS: [&str; 4] = ["I", "II", "III", "IV"];

/// Formats a date for people, e.g. `January 6, 2025`.
pub fn format_date(date: DateKey) -> String {
    date.date().format(DISPLAY_DATE_FORMAT).to_string()
}

/// Turns an identifier such as `mary_mother_of_god` or `SOLEMNITY` into
/// title-cased words.
pub fn humanize(s: &str) -> String {
    s.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Turns a camelCase key such as `psalterWeek` into `Psalter Week`.
pub fn humanize_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    humanize(&spaced)
}

/// Formats a liturgical cycle value: `YEAR_C` becomes `Year C`, `WEEK_2`
/// becomes `Week II`.
pub fn format_cycle_value(value: &str) -> String {
    let words = humanize(value);
    match words.strip_prefix("Week ") {
        Some(number) => match number.parse::<usize>() {
            Ok(n) if (1..=ROMAN_WEEKS.len()).contains(&n) => {
                format!("Week {}", ROMAN_WEEKS[n - 1])
            }
            _ => words,
        },
        None => words,
    }
}

fn entry_title(entry: &CalendarEntry) -> String {
    entry
        .id()
        .map(humanize)
        .or_else(|| entry.text("name").map(str::to_string))
        .unwrap_or_else(|| "Untitled entry".to_string())
}

/// Renders a day's calendar entries.
pub fn render_calendar(date: DateKey, entries: &[CalendarEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format_date(date));

    if entries.is_empty() {
        let _ = writeln!(out, "  No entries for this day.");
        return out;
    }

    for entry in entries {
        let _ = writeln!(out, "  {}", entry_title(entry));
        if let Some(rank) = entry.text("rank") {
            let _ = writeln!(out, "    Rank: {}", humanize(rank));
        }
        let seasons = entry.list("seasons");
        if !seasons.is_empty() {
            let seasons: Vec<String> = seasons.into_iter().map(humanize).collect();
            let _ = writeln!(out, "    Season: {}", seasons.join(", "));
        }
        let colors = entry.list("colors");
        if !colors.is_empty() {
            let colors: Vec<String> = colors.into_iter().map(humanize).collect();
            let _ = writeln!(out, "    Colors: {}", colors.join(", "));
        }
        if let Some(cycles) = entry.object("cycles") {
            for (key, value) in cycles {
                if let Value::String(value) = value {
                    let _ = writeln!(
                        out,
                        "    {}: {}",
                        humanize_key(key),
                        format_cycle_value(value)
                    );
                }
            }
        }
        if !entry.citations.is_empty() {
            let _ = writeln!(out, "    Citations: {}", entry.citations.join("; "));
        }
    }

    out
}

/// Renders a day's readings, one block per calendar entry.
pub fn render_readings(date: DateKey, days: &[DayReadings<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format_date(date));

    if days.is_empty() {
        let _ = writeln!(out, "  No readings for this day.");
        return out;
    }

    for day in days {
        let _ = writeln!(out, "  {}", entry_title(day.entry));
        if day.readings.is_empty() {
            let _ = writeln!(out, "    No readings.");
        }
        for reading in &day.readings {
            let _ = writeln!(out, "    {}", reading.citation);
            for (translation, text) in &reading.texts {
                let _ = writeln!(
                    out,
                    "      {}: {}",
                    translation,
                    text.as_deref().unwrap_or("(not found)")
                );
            }
        }
    }

    out
}
