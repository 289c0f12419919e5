use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::file::FileStore;
use crate::store::journal;
use crate::store::log_store::LogStore;
use crate::ui::messages::{success, warning};

/// Show or set the required-hours target.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Required { hours } = cmd {
        let store = FileStore::open(&cfg.store)?;
        let mut log_store = LogStore::load(store);

        match hours {
            None => {
                println!("Required hours: {}", log_store.required_hours());
            }
            Some(raw) => {
                // Non-numeric input is ignored outright, matching the
                // behavior of the target input field this replaces.
                if log_store.set_required_hours(raw) {
                    success(format!(
                        "Required hours set to {}",
                        log_store.required_hours()
                    ));

                    if let Err(e) = journal::record(
                        &cfg.store,
                        "required",
                        raw,
                        &format!("target set to {} hours", log_store.required_hours()),
                    ) {
                        warning(format!("Failed to write journal entry: {}", e));
                    }
                }
            }
        }
    }

    Ok(())
}
