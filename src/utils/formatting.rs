//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Drop ANSI escape sequences so width math sees only printable text.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Terminal cell width of `s`, ignoring ANSI coloring.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Spell a minute count out the way the log list reads it,
/// e.g. `7 hours and 30 min`.
///
/// Euclidean split, so a negative count keeps the sign on the hours and a
/// remainder in 0..60.
pub fn hours_and_minutes(mins: i64) -> String {
    format!("{} hours and {} min", mins.div_euclid(60), mins.rem_euclid(60))
}

/// Compact metric form, e.g. `7h • 30m`.
pub fn hm_compact(mins: i64) -> String {
    format!("{}h • {}m", mins.div_euclid(60), mins.rem_euclid(60))
}
