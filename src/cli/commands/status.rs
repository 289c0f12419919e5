use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::file::FileStore;
use crate::store::log_store::LogStore;
use crate::utils::colors::{RESET, color_for_percentage};
use crate::utils::formatting::{bold, hm_compact};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status = cmd {
        let store = FileStore::open(&cfg.store)?;
        let log_store = LogStore::load(store);
        let summary = log_store.summarize();

        println!("\n=== {} ===", bold("OJT Progress"));

        let pct = summary.percentage.round();
        println!(
            "Progress:       {}{}%{}",
            color_for_percentage(summary.percentage),
            pct,
            RESET
        );

        println!("Days completed: {}", summary.day_count);
        println!("Required hours: {}", summary.required_hours);
        println!(
            "Remaining:      {}h • {}m",
            summary.remaining_hours, summary.remaining_minutes
        );
        println!("Total logged:   {}", hm_compact(summary.total_minutes));
    }

    Ok(())
}
