//! Black-box tests of the `babykit` binary against a temporary data directory.

use assert_cmd::Command;
use tempfile::TempDir;

fn babykit(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("babykit").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd.env_remove("BABYKIT_LOG_FORMAT").env("RUST_LOG", "off");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn empty_inventory_lists_hint() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(babykit(&dir).arg("list"));
    assert!(out.contains("No items in inventory"));
    assert!(!dir.path().join("babyInventory.json").exists());
}

#[test]
fn state_persists_between_invocations() {
    let dir = TempDir::new().unwrap();

    stdout_of(babykit(&dir).args([
        "add", "--name", "Formula", "--category", "feeding", "--stock", "2", "--threshold", "5",
        "--unit", "boxes",
    ]));
    stdout_of(babykit(&dir).args(["add", "--name", "Wipes", "--stock", "12", "--threshold", "4", "--unit", "packs"]));

    let raw = std::fs::read_to_string(dir.path().join("babyInventory.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[0]["name"], "Formula");
    assert_eq!(stored[0]["currentStock"], 2);
    assert_eq!(stored[1]["name"], "Wipes");

    let out = stdout_of(babykit(&dir).arg("shopping"));
    assert!(out.contains("Formula  Need: 8 boxes"));
    assert!(!out.contains("Wipes"));

    let out = stdout_of(babykit(&dir).arg("alerts"));
    assert!(out.contains("Low Stock Alert (1 items)"));
    assert!(out.contains("Formula (2 left)"));
}

#[test]
fn refused_add_exits_nonzero_and_writes_nothing() {
    let dir = TempDir::new().unwrap();

    let output = babykit(&dir).args(["add", "--name", "Formula"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("item not added"));
    assert!(!dir.path().join("babyInventory.json").exists());
}

#[test]
fn json_list_includes_status() {
    let dir = TempDir::new().unwrap();
    stdout_of(babykit(&dir).args(["add", "--name", "Saline", "--category", "health", "--stock", "0", "--threshold", "1"]));

    let out = stdout_of(babykit(&dir).args(["list", "--json"]));
    let snapshot: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(snapshot["items"][0]["status"], "out_of_stock");
    assert_eq!(snapshot["outOfStock"][0]["name"], "Saline");
    assert_eq!(snapshot["shoppingList"][0]["quantity"], 2);
}

#[test]
fn corrupt_storage_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("babyInventory.json"), "not json").unwrap();

    let output = babykit(&dir).arg("list").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load inventory"));
}

#[test]
fn legacy_record_stock_can_be_edited() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("babyInventory.json"),
        r#"[{"id":1735063200000,"name":"Night light","category":"nursery","currentStock":1,
            "minThreshold":1,"unit":"each","notes":"","lastUpdated":"2025-12-24T18:00:00.000Z"}]"#,
    )
    .unwrap();

    let listed: serde_json::Value =
        serde_json::from_str(&stdout_of(babykit(&dir).args(["--json", "list"]))).unwrap();
    let id = listed["items"][0]["id"].as_str().unwrap().to_string();

    stdout_of(babykit(&dir).args(["edit", &id, "--stock", "5"]));

    let raw = std::fs::read_to_string(dir.path().join("babyInventory.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[0]["id"], id.as_str());
    assert_eq!(stored[0]["currentStock"], 5);
    assert_eq!(stored[0]["category"], "nursery");
    assert_eq!(stored[0]["unit"], "each");
}
