use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::shift::ShiftEntry;
use crate::store::file::FileStore;
use crate::store::journal;
use crate::store::log_store::LogStore;
use crate::ui::messages::{error, info, success, warning};
use crate::utils::date;
use crate::utils::formatting::hours_and_minutes;
use crate::utils::time::parse_optional_clock;

/// Log the shifts worked on one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        morning_in,
        morning_out,
        afternoon_in,
        afternoon_out,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let date_key = date::date_key(&d);

        //
        // 2. Parse the four clock readings (missing ones read 0:00)
        //
        let entry = ShiftEntry {
            morning_in: parse_optional_clock(morning_in.as_ref())?,
            morning_out: parse_optional_clock(morning_out.as_ref())?,
            afternoon_in: parse_optional_clock(afternoon_in.as_ref())?,
            afternoon_out: parse_optional_clock(afternoon_out.as_ref())?,
        };

        //
        // 3. Compute the day total
        //
        let minutes = entry.total_minutes();

        //
        // 4. Open the store and commit
        //
        let store = FileStore::open(&cfg.store)?;
        let mut log_store = LogStore::load(store);

        match log_store.add_entry(&date_key, minutes) {
            Ok(true) => {
                success(format!(
                    "Logged {} for {}",
                    hours_and_minutes(minutes),
                    date_key
                ));

                if let Err(e) = journal::record(
                    &cfg.store,
                    "add",
                    &date_key,
                    &format!("{} minutes", minutes),
                ) {
                    warning(format!("Failed to write journal entry: {}", e));
                }
            }
            Ok(false) => {
                info(format!("No OJT hours recorded for {}", date_key));
            }
            Err(e @ AppError::DuplicateEntry(_)) => {
                error("Oops, you are working twice a day? Relax a little");
                return Err(e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
