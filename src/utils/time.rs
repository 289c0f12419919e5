//! Time utilities: parsing clock readings off the 12-hour dial.

use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;

/// Parse `H:MM` into a dial reading. The dial offers hours 0..=12 and
/// minutes 0..=59; anything else is rejected.
pub fn parse_clock(t: &str) -> Option<TimeOfDay> {
    let (h, m) = t.split_once(':')?;
    let hour: u32 = h.trim().parse().ok()?;
    let minute: u32 = m.trim().parse().ok()?;

    if hour > 12 || minute > 59 {
        return None;
    }

    Some(TimeOfDay::new(hour, minute))
}

/// Parse an optional CLI clock argument; a missing value reads 0:00, like a
/// picker that was never touched.
pub fn parse_optional_clock(input: Option<&String>) -> AppResult<TimeOfDay> {
    match input {
        Some(s) => parse_clock(s).ok_or_else(|| AppError::InvalidTime(s.to_string())),
        None => Ok(TimeOfDay::MIDNIGHT),
    }
}
