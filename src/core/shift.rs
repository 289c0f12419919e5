//! Shift calculator: four clock readings in, minutes worked out.

use crate::models::time_of_day::TimeOfDay;

/// Total minutes worked for one day, given the morning and afternoon in/out
/// readings.
///
/// The morning segment counts whenever the out hour is not before the in
/// hour; an out reading earlier within the same hour therefore counts
/// negative. The afternoon segment counts only when the out reading is
/// strictly later than the in reading. The asymmetry is deliberate: recorded
/// day totals depend on it, so both guards stay as they are.
///
/// Plain integer arithmetic throughout; no rounding, no clamping, no errors.
pub fn compute_minutes(
    morning_in: TimeOfDay,
    morning_out: TimeOfDay,
    afternoon_in: TimeOfDay,
    afternoon_out: TimeOfDay,
) -> i64 {
    let mut morning = 0;
    if morning_out.hour >= morning_in.hour {
        morning = (morning_out.hour as i64 - morning_in.hour as i64) * 60
            + (morning_out.minute as i64 - morning_in.minute as i64);
    }

    let mut afternoon = 0;
    if afternoon_out.is_after(&afternoon_in) {
        afternoon = (afternoon_out.hour as i64 - afternoon_in.hour as i64) * 60
            + (afternoon_out.minute as i64 - afternoon_in.minute as i64);
    }

    morning + afternoon
}
