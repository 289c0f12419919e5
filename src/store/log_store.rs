//! The log aggregate and its persistence choreography.

use crate::core::{progress, week};
use crate::errors::{AppError, AppResult};
use crate::models::log::{Log, LogRecord};
use crate::models::progress::{DayHours, ProgressSummary};
use crate::store::kv::{KEY_DAYS, KEY_REQUIRED_HOURS, KEY_TOTAL_MINUTES, KvStore};
use crate::ui::messages;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Owns the in-memory log plus the required-hours target, loaded once from a
/// key-value store and re-serialized slot by slot after every mutation.
///
/// Mutations update memory first; persistence trails behind and its failure
/// is reported and otherwise ignored (no rollback, no retry). A crash
/// between the two loses that one mutation on next load.
pub struct LogStore<S: KvStore> {
    store: S,
    log: Log,
    required_hours: f64,
}

impl<S: KvStore> LogStore<S> {
    /// Load the aggregate from the store's three slots. Absent, unreadable
    /// or malformed slots fall back to the empty defaults.
    pub fn load(store: S) -> Self {
        let dates: Vec<String> = read_slot(&store, KEY_DAYS).unwrap_or_default();
        let minutes: Vec<i64> = read_slot(&store, KEY_TOTAL_MINUTES).unwrap_or_default();
        let required_hours: f64 = read_slot(&store, KEY_REQUIRED_HOURS).unwrap_or(0.0);

        Self {
            store,
            log: Log::from_parts(dates, minutes),
            required_hours,
        }
    }

    pub fn log(&self) -> &Log {
        &self.log
    }

    pub fn required_hours(&self) -> f64 {
        self.required_hours
    }

    /// Hand the underlying store back, e.g. to reload and verify a round trip.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Record `minutes` worked on `date`.
    ///
    /// A date already in the log fails with [`AppError::DuplicateEntry`] and
    /// mutates nothing. A non-positive total is a silent no-op (`Ok(false)`):
    /// the entry editor was opened but no time was entered. Otherwise both
    /// sequences grow at the same index and are persisted (`Ok(true)`).
    pub fn add_entry(&mut self, date: &str, minutes: i64) -> AppResult<bool> {
        if self.log.contains(date) {
            return Err(AppError::DuplicateEntry(date.to_string()));
        }

        if minutes <= 0 {
            return Ok(false);
        }

        self.log.push(date.to_string(), minutes);
        self.persist_log();
        Ok(true)
    }

    /// Remove the record for `date`. The date string is the stable record
    /// identifier; the no-duplicate invariant guarantees it names at most
    /// one record.
    pub fn remove_entry(&mut self, date: &str) -> AppResult<LogRecord> {
        let record = self
            .log
            .remove(date)
            .ok_or_else(|| AppError::NoEntryForDate(date.to_string()))?;

        self.persist_log();
        Ok(record)
    }

    /// Update the required-hours target from raw user text.
    ///
    /// Unparseable text leaves the value unchanged and returns false; this
    /// is an ignore, not an error. A parsed value always updates memory but
    /// is only persisted when non-zero — a long-standing quirk that callers
    /// rely on, kept as documented behavior.
    pub fn set_required_hours(&mut self, raw: &str) -> bool {
        let Ok(value) = raw.trim().parse::<f64>() else {
            return false;
        };

        self.required_hours = value;

        if value != 0.0 {
            self.persist_required();
        }

        true
    }

    pub fn summarize(&self) -> ProgressSummary {
        progress::summarize(&self.log, self.required_hours)
    }

    pub fn weekly_breakdown(&self, today: NaiveDate) -> Vec<DayHours> {
        week::weekly_breakdown(today, &self.log)
    }

    fn persist_log(&mut self) {
        match serde_json::to_string(self.log.minutes()) {
            Ok(payload) => self.persist_slot(KEY_TOTAL_MINUTES, &payload),
            Err(e) => messages::warning(format!("Failed to serialize {KEY_TOTAL_MINUTES}: {e}")),
        }

        match serde_json::to_string(self.log.dates()) {
            Ok(payload) => self.persist_slot(KEY_DAYS, &payload),
            Err(e) => messages::warning(format!("Failed to serialize {KEY_DAYS}: {e}")),
        }
    }

    fn persist_required(&mut self) {
        match serde_json::to_string(&self.required_hours) {
            Ok(payload) => self.persist_slot(KEY_REQUIRED_HOURS, &payload),
            Err(e) => messages::warning(format!("Failed to serialize {KEY_REQUIRED_HOURS}: {e}")),
        }
    }

    // The mutation is already visible in memory when this runs; a failing
    // write is reported and swallowed.
    fn persist_slot(&mut self, key: &str, payload: &str) {
        if let Err(e) = self.store.set(key, payload) {
            messages::warning(format!("Failed to persist {key}: {e}"));
        }
    }
}

fn read_slot<S: KvStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                messages::warning(format!("Ignoring malformed value for {key}: {e}"));
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            messages::warning(format!("Failed to load {key}: {e}"));
            None
        }
    }
}
