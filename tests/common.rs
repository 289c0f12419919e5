#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("wlog")
}

/// Create a unique store path inside the system temp dir and remove any
/// leftover state from a previous run
pub fn setup_test_store(name: &str) -> String {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_wlog", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).ok();
    dir.push("wlog.store.json");
    dir.to_string_lossy().to_string()
}

/// Log one full day (9:00-12:00 and 1:00-5:00, i.e. 7 hours) via the CLI
pub fn add_full_day(store: &str, date: &str) {
    wl().args([
        "--store",
        store,
        "add",
        date,
        "--morning-in",
        "9:00",
        "--morning-out",
        "12:00",
        "--afternoon-in",
        "1:00",
        "--afternoon-out",
        "5:00",
    ])
    .assert()
    .success();
}

/// Initialize a store and add a small dataset useful for many tests
pub fn init_store_with_data(store: &str) {
    wl().args(["--store", store, "--test", "init"])
        .assert()
        .success();

    add_full_day(store, "2025-09-01");
    add_full_day(store, "2025-09-15");
}
