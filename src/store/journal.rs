//! Append-only operations journal kept next to the store file.

use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// The journal lives beside the store file it describes.
pub fn journal_file(store_path: &str) -> PathBuf {
    let store = expand_tilde(store_path);
    match store.parent() {
        Some(dir) => dir.join("wlog.log"),
        None => PathBuf::from("wlog.log"),
    }
}

/// Append one `timestamp | operation | target | message` line.
pub fn record(store_path: &str, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let path = journal_file(store_path);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let now = Local::now().to_rfc3339();
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(file, "{now} | {operation} | {target} | {message}")?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub timestamp: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Read every journal line; lines that don't split into four fields are
/// skipped.
pub fn read_all(store_path: &str) -> AppResult<Vec<JournalEntry>> {
    let path = journal_file(store_path);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path)?;
    let mut out = Vec::new();

    for line in content.lines() {
        let parts: Vec<&str> = line.splitn(4, " | ").collect();
        if parts.len() == 4 {
            out.push(JournalEntry {
                timestamp: parts[0].to_string(),
                operation: parts[1].to_string(),
                target: parts[2].to_string(),
                message: parts[3].to_string(),
            });
        }
    }

    Ok(out)
}
