//! Clock readings as the shift pickers produce them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One reading of a 12-hour dial with no AM/PM flag.
///
/// The dial offers hours 0..=12 and minutes 0..=59; nothing here enforces
/// that range, so arithmetic on out-of-range values stays plain and
/// deterministic. Input validation belongs to the parsing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// True when `self` reads strictly later on the dial than `other`.
    pub fn is_after(&self, other: &TimeOfDay) -> bool {
        self.hour > other.hour || (self.hour == other.hour && self.minute > other.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}
