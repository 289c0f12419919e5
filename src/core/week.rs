//! Seven-day breakdown feeding the weekly summary chart.

use crate::models::log::Log;
use crate::models::progress::DayHours;
use chrono::{Duration, NaiveDate};

/// The seven days ending at `today`, oldest first, today last.
///
/// Each day carries the hours logged for it (fractional, rounded to one
/// decimal place) or 0.0 when the date is not in the log. Pure function of
/// its inputs; recomputed on every call.
pub fn weekly_breakdown(today: NaiveDate, log: &Log) -> Vec<DayHours> {
    let mut out = Vec::with_capacity(7);

    for back in (0..7).rev() {
        let date = today - Duration::days(back);
        let key = date.format("%Y-%m-%d").to_string();

        let hours = match log.minutes_for(&key) {
            Some(minutes) => minutes as f64 / 60.0,
            None => 0.0,
        };

        out.push(DayHours {
            day: date.format("%a").to_string(),
            date: key,
            hours: (hours * 10.0).round() / 10.0,
        });
    }

    out
}
