use predicates::prelude::*;
use predicates::str::contains;

mod common;
use common::{add_full_day, setup_test_store, wl};

#[test]
fn test_add_and_list_entry() {
    let store = setup_test_store("add_and_list");

    wl().args(["--store", &store, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--store",
        &store,
        "add",
        "2025-09-01",
        "--morning-in",
        "9:00",
        "--morning-out",
        "12:00",
        "--afternoon-in",
        "1:00",
        "--afternoon-out",
        "5:30",
    ])
    .assert()
    .success()
    .stdout(contains("Logged 7 hours and 30 min for 2025-09-01"));

    wl().args(["--store", &store, "list"])
        .assert()
        .success()
        .stdout(contains("Sep 1, 2025"))
        .stdout(contains("7 hours and 30 min"));
}

#[test]
fn test_add_morning_only() {
    let store = setup_test_store("morning_only");

    wl().args([
        "--store",
        &store,
        "add",
        "2025-09-02",
        "--morning-in",
        "8:15",
        "--morning-out",
        "11:45",
    ])
    .assert()
    .success()
    .stdout(contains("Logged 3 hours and 30 min for 2025-09-02"));
}

#[test]
fn test_duplicate_date_is_rejected() {
    let store = setup_test_store("duplicate");

    add_full_day(&store, "2025-09-03");

    wl().args([
        "--store",
        &store,
        "add",
        "2025-09-03",
        "--morning-in",
        "9:00",
        "--morning-out",
        "10:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Oops, you are working twice a day? Relax a little"))
    .stderr(contains("An entry for 2025-09-03 already exists"));

    // the date appears exactly once
    wl().args(["--store", &store, "list", "--plain"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.matches("2025-09-03").count() == 1
        }));
}

#[test]
fn test_zero_minutes_is_a_silent_noop() {
    let store = setup_test_store("zero_noop");

    wl().args(["--store", &store, "add", "2025-09-04"])
        .assert()
        .success()
        .stdout(contains("No OJT hours recorded for 2025-09-04"));

    wl().args(["--store", &store, "list", "--plain"])
        .assert()
        .success()
        .stdout(contains("2025-09-04").not());
}

#[test]
fn test_del_removes_entry() {
    let store = setup_test_store("del");

    add_full_day(&store, "2025-09-05");
    add_full_day(&store, "2025-09-06");

    wl().args(["--store", &store, "del", "2025-09-05", "--yes"])
        .assert()
        .success()
        .stdout(contains("Removed 2025-09-05"));

    wl().args(["--store", &store, "list", "--plain"])
        .assert()
        .success()
        .stdout(contains("2025-09-05").not())
        .stdout(contains("2025-09-06"));
}

#[test]
fn test_del_unknown_date_fails() {
    let store = setup_test_store("del_unknown");

    add_full_day(&store, "2025-09-07");

    wl().args(["--store", &store, "del", "2025-09-08", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entry found for date 2025-09-08"));
}

#[test]
fn test_invalid_date_is_rejected() {
    let store = setup_test_store("bad_date");

    wl().args(["--store", &store, "add", "09/01/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_invalid_clock_reading_is_rejected() {
    let store = setup_test_store("bad_clock");

    // 17:00 is off the 12-hour dial
    wl().args([
        "--store",
        &store,
        "add",
        "2025-09-09",
        "--morning-in",
        "9:00",
        "--morning-out",
        "17:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format"));
}

#[test]
fn test_list_empty_store_prints_hint() {
    let store = setup_test_store("empty_list");

    wl().args(["--store", &store, "list"])
        .assert()
        .success()
        .stdout(contains("You don't have existing logs"));
}

#[test]
fn test_list_sorts_newest_first() {
    let store = setup_test_store("list_sorted");

    add_full_day(&store, "2025-09-15");
    add_full_day(&store, "2025-08-31");
    add_full_day(&store, "2025-09-10");

    wl().args(["--store", &store, "list"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            let sep_15 = out.find("Sep 15, 2025");
            let sep_10 = out.find("Sep 10, 2025");
            let aug_31 = out.find("Aug 31, 2025");
            match (sep_15, sep_10, aug_31) {
                (Some(a), Some(b), Some(c)) => a < b && b < c,
                _ => false,
            }
        }));
}
