/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Completion color bands for the progress dashboard:
/// \>75% → green
/// \>50% → yellow
/// otherwise → red
pub fn color_for_percentage(pct: f64) -> &'static str {
    if pct > 75.0 {
        GREEN
    } else if pct > 50.0 {
        YELLOW
    } else {
        RED
    }
}

/// Bars with logged hours are drawn colored, idle days greyed out.
pub fn color_for_bar(hours: f64) -> &'static str {
    if hours > 0.0 { MAGENTA } else { GREY }
}
