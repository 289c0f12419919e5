//! Report models produced by the progress calculators.

/// Aggregate progress toward the required-hours target.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub total_minutes: i64,
    pub day_count: usize,
    pub required_hours: f64,
    /// Completion percentage, clamped to 0..=100. Zero when no target is set.
    pub percentage: f64,
    /// Required minus logged minutes; negative once the target is exceeded.
    pub remaining_minutes_raw: i64,
    /// Euclidean split of the raw remainder: hours carry the sign,
    /// minutes stay in 0..60.
    pub remaining_hours: i64,
    pub remaining_minutes: i64,
}

/// One bar of the seven-day summary.
#[derive(Debug, Clone, PartialEq)]
pub struct DayHours {
    /// Weekday label, e.g. `Mon`.
    pub day: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Hours worked that day, rounded to one decimal place.
    pub hours: f64,
}
