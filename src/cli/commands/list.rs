use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::log::LogRecord;
use crate::store::file::FileStore;
use crate::store::log_store::LogStore;
use crate::ui::messages::hint;
use crate::utils::date;
use crate::utils::formatting::hours_and_minutes;
use crate::utils::table::{Align, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { plain } = cmd {
        let store = FileStore::open(&cfg.store)?;
        let log_store = LogStore::load(store);
        let log = log_store.log();

        if *plain {
            // Machine-friendly rows, insertion order (the aggregate's order).
            for record in log.records() {
                println!("{} {}", record.date, record.minutes);
            }
            return Ok(());
        }

        if log.is_empty() {
            hint("You don't have existing logs");
            hint("Log your first shift with `wlog add <DATE>`");
            return Ok(());
        }

        // Newest first; the aggregate itself never reorders.
        let mut records: Vec<LogRecord> = log.records().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));

        let mut table = Table::new(vec![
            Column {
                header: "DATE".to_string(),
                align: Align::Left,
            },
            Column {
                header: "WORKED".to_string(),
                align: Align::Left,
            },
        ]);

        for record in &records {
            let display = match date::parse_date(&record.date) {
                Some(d) => date::display_date(&d),
                None => record.date.clone(),
            };
            table.add_row(vec![display, hours_and_minutes(record.minutes)]);
        }

        println!("{}", table.render(&cfg.separator_char));
        println!(
            "{} days logged, total {}",
            log.len(),
            hours_and_minutes(log.total_minutes())
        );
    }

    Ok(())
}
