//! Progress summary: logged minutes against the required-hours target.

use crate::models::log::Log;
use crate::models::progress::ProgressSummary;

/// Summarize the whole log against `required_hours`.
///
/// Defined for every state including the empty log. The percentage is
/// clamped to 0..=100 and reads zero when no target is set; the remaining
/// time is deliberately not clamped, so a negative value signals
/// over-completion. The remainder split uses Euclidean division: hours carry
/// the sign and minutes stay in 0..60.
pub fn summarize(log: &Log, required_hours: f64) -> ProgressSummary {
    let total_minutes = log.total_minutes();
    let day_count = log.len();

    let required_minutes = (required_hours * 60.0).round() as i64;

    let percentage = if required_minutes <= 0 {
        0.0
    } else {
        let pct = total_minutes as f64 / required_minutes as f64 * 100.0;
        pct.clamp(0.0, 100.0)
    };

    let remaining_minutes_raw = required_minutes - total_minutes;

    ProgressSummary {
        total_minutes,
        day_count,
        required_hours,
        percentage,
        remaining_minutes_raw,
        remaining_hours: remaining_minutes_raw.div_euclid(60),
        remaining_minutes: remaining_minutes_raw.rem_euclid(60),
    }
}
