use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::file::FileStore;
use crate::store::journal;
use crate::store::log_store::LogStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::formatting::hours_and_minutes;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        yes,
    } = cmd
    {
        let d =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let date_key = date::date_key(&d);

        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = format!(
                "Delete the entry for {}? This action is irreversible.",
                date_key
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute removal
        //
        let store = FileStore::open(&cfg.store)?;
        let mut log_store = LogStore::load(store);

        let record = log_store.remove_entry(&date_key)?;

        success(format!(
            "Removed {} ({})",
            record.date,
            hours_and_minutes(record.minutes)
        ));

        if let Err(e) = journal::record(
            &cfg.store,
            "del",
            &date_key,
            &format!("{} minutes removed", record.minutes),
        ) {
            warning(format!("Failed to write journal entry: {}", e));
        }
    }

    Ok(())
}
