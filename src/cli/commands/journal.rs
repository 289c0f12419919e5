use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::journal;
use crate::ui::messages::hint;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;

/// Returns the ANSI color for an operation kind
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "required" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51), // orange
        "persist" => Colour::Purple,
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Journal { print } = cmd
        && *print
    {
        let entries = journal::read_all(&cfg.store)?;

        if entries.is_empty() {
            hint("Journal is empty");
            return Ok(());
        }

        // Width of the op (target) column, capped at 60
        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(60);

        let ts_w = entries
            .iter()
            .map(|e| e.timestamp.len())
            .max()
            .unwrap_or(0);

        println!("📜 Operations journal:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);
            let colored = format!("{} ({})", color.paint(e.operation.as_str()), e.target);

            // padding computed on the real size WITHOUT ANSI
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

            println!(
                "{:<ts_w$} | {}{} => {}",
                e.timestamp,
                colored,
                padding,
                e.message,
                ts_w = ts_w
            );
        }
    }

    Ok(())
}
