//! One candidate day's attendance, held only while an entry is being created.

use crate::core::shift::compute_minutes;
use crate::models::time_of_day::TimeOfDay;

/// Up to two in/out ranges for a single day: morning and afternoon.
/// Pickers left untouched read 0:00, which contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftEntry {
    pub morning_in: TimeOfDay,
    pub morning_out: TimeOfDay,
    pub afternoon_in: TimeOfDay,
    pub afternoon_out: TimeOfDay,
}

impl ShiftEntry {
    /// Total minutes worked for the day described by this entry.
    pub fn total_minutes(&self) -> i64 {
        compute_minutes(
            self.morning_in,
            self.morning_out,
            self.afternoon_in,
            self.afternoon_out,
        )
    }
}
