//! Tests for exit codes, rejection messages and suggestions.

use assert_cmd::cargo;
use predicates::prelude::*;

fn inventory() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("inventory");
    cmd.env_remove("RUST_LOG")
        .env_remove("INVENTORY_STORAGE__BACKEND")
        .arg("--store")
        .arg("memory");
    cmd
}

fn item_args<'a>(id: &'a str, quantity: &'a str, price: &'a str) -> [&'a str; 10] {
    [
        "--id",
        id,
        "--name",
        "Tablet",
        "--quantity",
        quantity,
        "--price",
        price,
        "--description",
        "Ten inch",
    ]
}

#[test]
fn test_update_unknown_id_is_rejected() {
    inventory()
        .arg("update")
        .args(item_args("9", "1", "10.0"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No existing item with id 9"))
        .stderr(predicate::str::contains("9 - Tablet - 1 - 10.0 - Ten inch"))
        .stderr(predicate::str::contains("inventory list"));
}

#[test]
fn test_delete_unknown_id_is_rejected() {
    inventory()
        .args(["delete", "--id", "7"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "No existing item with id 7: 7 -  - 0 - 0.0 - ",
        ));
}

#[test]
fn test_delete_blank_id_is_invalid_input() {
    inventory()
        .args(["delete", "--id", " "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_non_numeric_quantity() {
    inventory()
        .arg("add")
        .args(item_args("3", "ten", "1.0"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid quantity 'ten'"))
        .stderr(predicate::str::contains("whole number"));
}

#[test]
fn test_non_numeric_price() {
    inventory()
        .arg("add")
        .args(item_args("3", "1", "cheap"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid price 'cheap'"));
}

#[test]
fn test_blank_field_is_rejected_before_the_store() {
    inventory()
        .args([
            "add",
            "--id",
            "3",
            "--name",
            "",
            "--quantity",
            "1",
            "--price",
            "1",
            "--description",
            "x",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Required field missing: name"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    inventory().assert().code(2);
}

#[test]
fn test_unknown_config_key() {
    inventory()
        .args(["config", "get", "database.nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_missing_explicit_config_file() {
    inventory()
        .args(["--config", "/nonexistent/inventory.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_unreachable_database_is_storage_error() {
    let mut cmd = cargo::cargo_bin_cmd!("inventory");
    cmd.env_remove("RUST_LOG")
        .args(["--store", "mongo", "--mongo-host", "127.0.0.1", "--mongo-port", "1", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--store memory"));
}
