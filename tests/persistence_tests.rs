use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{add_full_day, setup_test_store, wl};

#[test]
fn test_store_file_holds_parallel_json_slots() {
    let store = setup_test_store("store_shape");

    add_full_day(&store, "2025-10-01");
    add_full_day(&store, "2025-10-02");

    let content = fs::read_to_string(&store).expect("read store file");
    let root: serde_json::Value = serde_json::from_str(&content).expect("store file is JSON");

    let days: Vec<String> =
        serde_json::from_str(root["ojt.days"].as_str().expect("days slot")).expect("days payload");
    let minutes: Vec<i64> = serde_json::from_str(
        root["ojt.totalMinutes"].as_str().expect("minutes slot"),
    )
    .expect("minutes payload");

    assert_eq!(days, vec!["2025-10-01", "2025-10-02"]);
    assert_eq!(minutes.len(), days.len());
    assert!(minutes.iter().all(|m| *m > 0));
}

#[test]
fn test_round_trip_preserves_insertion_order() {
    let store = setup_test_store("round_trip");

    // deliberately not chronological: insertion order is the stored order
    add_full_day(&store, "2025-10-20");
    add_full_day(&store, "2025-10-05");
    add_full_day(&store, "2025-10-12");

    wl().args(["--store", &store, "list", "--plain"])
        .assert()
        .success()
        .stdout(contains(
            "2025-10-20 420\n2025-10-05 420\n2025-10-12 420",
        ));
}

#[test]
fn test_removal_is_persisted() {
    let store = setup_test_store("removal_persisted");

    add_full_day(&store, "2025-10-03");
    add_full_day(&store, "2025-10-04");

    wl().args(["--store", &store, "del", "2025-10-03", "--yes"])
        .assert()
        .success();

    let content = fs::read_to_string(&store).expect("read store file");
    let root: serde_json::Value = serde_json::from_str(&content).expect("store file is JSON");

    let days: Vec<String> =
        serde_json::from_str(root["ojt.days"].as_str().expect("days slot")).expect("days payload");
    let minutes: Vec<i64> = serde_json::from_str(
        root["ojt.totalMinutes"].as_str().expect("minutes slot"),
    )
    .expect("minutes payload");

    assert_eq!(days, vec!["2025-10-04"]);
    assert_eq!(minutes.len(), 1);
}

#[test]
fn test_required_hours_slot_round_trips() {
    let store = setup_test_store("required_slot");

    wl().args(["--store", &store, "required", "500"])
        .assert()
        .success();

    let content = fs::read_to_string(&store).expect("read store file");
    let root: serde_json::Value = serde_json::from_str(&content).expect("store file is JSON");

    let required: f64 = serde_json::from_str(
        root["ojt.requiredHours"].as_str().expect("required slot"),
    )
    .expect("required payload");
    assert_eq!(required, 500.0);
}

#[test]
fn test_journal_records_operations() {
    let store = setup_test_store("journal");

    add_full_day(&store, "2025-10-06");
    wl().args(["--store", &store, "del", "2025-10-06", "--yes"])
        .assert()
        .success();

    let journal = Path::new(&store).parent().unwrap().join("wlog.log");
    let content = fs::read_to_string(&journal).expect("read journal");

    assert!(content.contains("add | 2025-10-06"));
    assert!(content.contains("del | 2025-10-06"));

    wl().args(["--store", &store, "journal", "--print"])
        .assert()
        .success()
        .stdout(contains("Operations journal"))
        .stdout(contains("2025-10-06"));
}

#[test]
fn test_init_creates_an_empty_store() {
    let store = setup_test_store("init_store");

    wl().args(["--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("WLog initialization completed"));

    assert!(Path::new(&store).exists());

    wl().args(["--store", &store, "list"])
        .assert()
        .success()
        .stdout(contains("You don't have existing logs"));
}
