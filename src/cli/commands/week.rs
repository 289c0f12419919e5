use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::file::FileStore;
use crate::store::log_store::LogStore;
use crate::ui::chart;
use crate::utils::date;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date: date_arg } = cmd {
        //
        // Resolve "today": an explicit --date (deterministic output) or the
        // local calendar date.
        //
        let today = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let store = FileStore::open(&cfg.store)?;
        let log_store = LogStore::load(store);
        let days = log_store.weekly_breakdown(today);

        let show_dates = cfg.show_week_dates.eq_ignore_ascii_case("yes");

        println!("\n=== {} ===", bold("This Week's Summary"));
        print!("{}", chart::render(&days, show_dates));
    }

    Ok(())
}
