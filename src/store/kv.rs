//! Abstract key-value persistence contract.
//!
//! Three slots hold the whole persistent state; every write re-serializes a
//! full slot (no delta persistence).

use crate::errors::AppResult;

/// Slot holding the serialized minutes sequence, parallel to [`KEY_DAYS`].
pub const KEY_TOTAL_MINUTES: &str = "ojt.totalMinutes";
/// Slot holding the serialized date sequence, parallel to [`KEY_TOTAL_MINUTES`].
pub const KEY_DAYS: &str = "ojt.days";
/// Slot holding the required-hours scalar.
pub const KEY_REQUIRED_HOURS: &str = "ojt.requiredHours";

/// String-to-string storage with get/set semantics.
///
/// Values are JSON payloads; the store itself never interprets them.
pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}
