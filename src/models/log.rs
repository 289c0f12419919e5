//! The persistent log aggregate: parallel date/minutes sequences.

/// One logged day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub date: String,
    pub minutes: i64,
}

/// Parallel sequences with one record per calendar date.
///
/// Position `i` in `dates` corresponds to position `i` in `minutes`, and no
/// date appears twice. Records keep their insertion order; any chronological
/// ordering happens at presentation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Log {
    dates: Vec<String>,
    minutes: Vec<i64>,
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from the two persisted sequences.
    pub fn from_parts(dates: Vec<String>, minutes: Vec<i64>) -> Self {
        Self { dates, minutes }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn contains(&self, date: &str) -> bool {
        self.dates.iter().any(|d| d == date)
    }

    pub fn minutes_for(&self, date: &str) -> Option<i64> {
        self.dates
            .iter()
            .position(|d| d == date)
            .map(|i| self.minutes[i])
    }

    /// Append a record. The caller guarantees `date` is not already present.
    pub fn push(&mut self, date: String, minutes: i64) {
        self.dates.push(date);
        self.minutes.push(minutes);
    }

    /// Remove the record for `date` from both sequences at the same index.
    pub fn remove(&mut self, date: &str) -> Option<LogRecord> {
        let idx = self.dates.iter().position(|d| d == date)?;
        let date = self.dates.remove(idx);
        let minutes = self.minutes.remove(idx);
        Some(LogRecord { date, minutes })
    }

    pub fn total_minutes(&self) -> i64 {
        self.minutes.iter().sum()
    }

    pub fn records(&self) -> impl Iterator<Item = LogRecord> + '_ {
        self.dates
            .iter()
            .zip(self.minutes.iter())
            .map(|(date, minutes)| LogRecord {
                date: date.clone(),
                minutes: *minutes,
            })
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn minutes(&self) -> &[i64] {
        &self.minutes
    }
}
