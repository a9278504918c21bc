//! Formatting utilities for terminal output
//!
//! Plain-text helpers; colour is applied by [`display`](super::display).

use crate::core::LetterStatus;
use std::time::Duration;

/// Label for a letter on the board
///
/// Required letters carry a marker for where they must appear: `^a` at the
/// start, `*a` anywhere, `a$` at the end.
#[must_use]
pub fn letter_label(letter: char, status: LetterStatus) -> String {
    match status {
        LetterStatus::Excluded | LetterStatus::Available => letter.to_string(),
        LetterStatus::RequiredStart => format!("^{letter}"),
        LetterStatus::RequiredAnywhere => format!("*{letter}"),
        LetterStatus::RequiredEnd => format!("{letter}$"),
    }
}

/// Numbered group list, e.g. `1:ab 2:c`
#[must_use]
pub fn format_groups(groups: &[String]) -> String {
    if groups.is_empty() {
        return "(none)".to_string();
    }

    groups
        .iter()
        .enumerate()
        .map(|(i, group)| format!("{}:{group}", i + 1))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lay words out in left-aligned columns, `per_row` to a line
#[must_use]
pub fn format_word_rows<S: AsRef<str>>(words: &[S], per_row: usize) -> Vec<String> {
    let width = words
        .iter()
        .map(|word| word.as_ref().len())
        .max()
        .unwrap_or(0);

    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|word| format!("{:<width$}", word.as_ref()))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Duration in milliseconds with two decimals
#[must_use]
pub fn format_millis(duration: Duration) -> String {
    format!("{:.2} ms", duration.as_secs_f64() * 1000.0)
}

/// `"1 word"`, `"3 words"`
#[must_use]
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
