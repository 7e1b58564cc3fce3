//! Formatting utilities for terminal output

use crate::core::Hint;

/// Show revealed letters in place, e.g. `D _ _ R`
#[must_use]
pub fn letter_mask(hint: &Hint) -> String {
    let mut slots = vec!['_'; hint.length()];
    for letter in hint.letters() {
        if let Some(slot) = slots.get_mut(letter.position - 1) {
            *slot = letter.letter.to_ascii_uppercase();
        }
    }

    slots
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remaining attempts as filled and empty dots
#[must_use]
pub fn attempts_meter(remaining: u32, total: u32) -> String {
    let remaining = remaining.min(total) as usize;
    let used = total as usize - remaining;
    format!("{}{}", "●".repeat(remaining), "○".repeat(used))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
