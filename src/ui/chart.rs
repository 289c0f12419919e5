//! Seven-day summary rendered as horizontal terminal bars.

use crate::models::progress::DayHours;
use crate::utils::colors::{RESET, color_for_bar};
use crate::utils::formatting::visible_width;

const BAR_WIDTH: usize = 28;

/// One line per day: weekday label, optional date, bar, hour label on
/// non-zero days.
///
/// Bars scale against max(1, highest value), so an empty week renders flat
/// instead of dividing by zero.
pub fn render(days: &[DayHours], show_dates: bool) -> String {
    let max_hours = days.iter().map(|d| d.hours).fold(1.0_f64, f64::max);

    let mut out = String::new();

    for d in days {
        let filled = ((d.hours / max_hours) * BAR_WIDTH as f64).round() as usize;
        let bar = format!("{}{}{}", color_for_bar(d.hours), "█".repeat(filled), RESET);

        let mut line = if show_dates {
            format!("{} {}  ", d.day, d.date)
        } else {
            format!("{}  ", d.day)
        };
        line.push_str(&bar);

        if d.hours > 0.0 {
            let pad = BAR_WIDTH.saturating_sub(visible_width(&bar)) + 2;
            line.push_str(&" ".repeat(pad));
            line.push_str(&format!("{}h", d.hours));
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
