use assert_cmd::Command;
use predicates::prelude::*;

fn cardz(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("cardz").unwrap();
    cmd.arg("--dir").arg(dir);
    cmd
}

#[test]
fn test_add_list_remove_cycle() {
    let temp_dir = tempfile::tempdir().unwrap();

    cardz(temp_dir.path())
        .args(["add", "base1-4", "Charizard"])
        .args(["--card-type", "Fire", "--rarity", "Rare Holo", "--set", "Base"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added Charizard"));

    cardz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Charizard"))
        .stdout(predicates::str::contains("Fire/Rare Holo"));

    // Adding the same id again bumps the count
    cardz(temp_dir.path())
        .args(["add", "base1-4", "Charizard", "--quantity", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("now x3"));

    cardz(temp_dir.path())
        .args(["remove", "base1-4"])
        .assert()
        .success();

    // The empty listing names the backing file
    cardz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No cards in inventory"))
        .stdout(predicates::str::contains("inventory_data.csv"));
}

#[test]
fn test_add_requires_id_and_name() {
    let temp_dir = tempfile::tempdir().unwrap();

    cardz(temp_dir.path())
        .args(["add", "", "Charizard"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("ID and name are required"));
}

#[test]
fn test_bulk_import_and_cached_search() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path().join("pokemon-tcg-data");
    std::fs::create_dir_all(root.join("sets")).unwrap();
    std::fs::create_dir_all(root.join("cards/en")).unwrap();
    std::fs::write(
        root.join("sets/en.json"),
        r#"[{"id":"base1","name":"Base"}]"#,
    )
    .unwrap();
    std::fs::write(
        root.join("cards/en/base1.json"),
        r#"[{"id":"base1-58","name":"Pikachu","types":["Electric"],"rarity":"Common"}]"#,
    )
    .unwrap();

    cardz(temp_dir.path())
        .arg("import")
        .assert()
        .success()
        .stdout(predicates::str::contains("Imported 1 cards from 1 sets."));

    cardz(temp_dir.path())
        .args(["search", "pika", "--cached"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Pikachu"));

    cardz(temp_dir.path())
        .args(["search", "charizard", "--cached"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No matches"));
}

#[test]
fn test_import_without_dataset_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    cardz(temp_dir.path())
        .arg("import")
        .assert()
        .failure()
        .stderr(predicates::str::contains("not found"));
}

#[test]
fn test_sync_failure_seeds_sample_when_asked() {
    let temp_dir = tempfile::tempdir().unwrap();
    // Point the API at a port nothing listens on so the sync fails fast
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"api_base_url": "http://127.0.0.1:1/v2/cards", "timeout_secs": 2}"#,
    )
    .unwrap();

    cardz(temp_dir.path())
        .args(["sync", "--seed-on-failure"])
        .assert()
        .success()
        .stdout(predicates::str::contains("sample cards cached"));

    // Without the flag the failure is surfaced
    cardz(temp_dir.path())
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error"));
}

#[test]
fn test_import_csv_merges_into_inventory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv = temp_dir.path().join("extra.csv");
    std::fs::write(
        &csv,
        "base1-4,Charizard,Fire,Rare Holo,Base,2,\nbase1-58,Pikachu,Electric,Common,Base,1,\n",
    )
    .unwrap();

    cardz(temp_dir.path())
        .args(["add", "base1-4", "Charizard"])
        .assert()
        .success();

    cardz(temp_dir.path())
        .arg("import-csv")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicates::str::contains("1 new, 1 merged"));

    // Existing id merged by quantity, new id appended
    cardz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("x3"))
        .stdout(predicates::str::contains("Pikachu"))
        .stdout(predicates::str::contains("4 cards total"));
}

#[test]
fn test_import_csv_missing_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    cardz(temp_dir.path())
        .arg("import-csv")
        .arg(temp_dir.path().join("nope.csv"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("not found"));
}

#[test]
fn test_export_writes_flat_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out = temp_dir.path().join("out.csv");

    cardz(temp_dir.path())
        .args(["add", "base1-58", "Pikachu"])
        .args(["--card-type", "Electric", "--quantity", "4"])
        .assert()
        .success();

    cardz(temp_dir.path())
        .arg("export")
        .arg(&out)
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(content, "base1-58,Pikachu,Electric,Common,,4,\n");
}

#[test]
fn test_legacy_six_field_inventory_loads() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("inventory_data.csv"),
        "base1-4,Charizard,Fire,Rare Holo,Base,1\njunk line\n",
    )
    .unwrap();

    cardz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Charizard"))
        .stdout(predicates::str::contains("1 cards total"));
}
