use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Store key form, `YYYY-MM-DD`.
pub fn date_key(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Display form, e.g. `May 1, 2024`.
pub fn display_date(d: &NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}
