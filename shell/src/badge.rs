//! Nav-entry count badge formatting.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

/// Largest count shown literally; anything above renders as `99+`.
pub const MAX_BADGE_COUNT: i64 = 99;

/// Label for a badge showing `count`, or `None` when the badge should be removed.
#[must_use]
pub fn badge_label(count: i64) -> Option<String> {
    if count <= 0 {
        None
    } else if count > MAX_BADGE_COUNT {
        Some(format!("{MAX_BADGE_COUNT}+"))
    } else {
        Some(count.to_string())
    }
}
