//! End-to-end smoke tests driving the menu binary over stdin

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn daybook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env("DAYBOOK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn exits_cleanly_from_main_menu() {
    let data_dir = TempDir::new().unwrap();

    daybook(&data_dir)
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal Expense Tracker"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn exits_cleanly_when_stdin_closes() {
    let data_dir = TempDir::new().unwrap();

    daybook(&data_dir).write_stdin("").assert().success();
}

#[test]
fn top_up_and_add_expense_persist() {
    let data_dir = TempDir::new().unwrap();

    // 1: check balance, y + 100: top up, Enter: pause
    // 3: add expense (date, item, amount, y), Enter: pause
    // 4: exit
    let script = "1\ny\n100\n\n3\n2024-01-01\ncoffee\n4.50\ny\n\n4\n";

    daybook(&data_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance updated. New balance: 100.00"))
        .stdout(predicate::str::contains(
            "Expense saved successfully. Remaining balance: 95.50",
        ));

    assert_eq!(
        fs::read_to_string(data_dir.path().join("balance.txt")).unwrap(),
        "100.00,95.50\n"
    );

    let ledger =
        fs::read_to_string(data_dir.path().join("expenses_2024-01-01.txt")).unwrap();
    assert!(ledger.starts_with("1 | 2024-01-01 | "));
    assert!(ledger.trim_end().ends_with("| coffee | 4.50"));
}

#[test]
fn overspend_is_refused_at_the_menu() {
    let data_dir = TempDir::new().unwrap();
    fs::write(data_dir.path().join("balance.txt"), "10.00,10.00\n").unwrap();

    let script = "3\n2024-01-01\nx\n20.00\ny\n\n4\n";

    daybook(&data_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Insufficient balance!"));

    assert_eq!(
        fs::read_to_string(data_dir.path().join("balance.txt")).unwrap(),
        "10.00,10.00\n"
    );
    assert!(!data_dir.path().join("expenses_2024-01-01.txt").exists());
}

#[test]
fn legacy_files_migrate_at_startup() {
    let data_dir = TempDir::new().unwrap();
    let path = data_dir.path().join("expenses_2024-01-01.txt");
    fs::write(&path, "1,2024-01-01,2024-01-01 10:00:00,Coffee,4.5\n").unwrap();

    daybook(&data_dir)
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Migrated 1 old expense file(s) to the current format.",
        ));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1 | 2024-01-01 | 2024-01-01 10:00:00 | Coffee | 4.5\n"
    );
}

#[test]
fn search_by_amount_lists_matches() {
    let data_dir = TempDir::new().unwrap();
    fs::write(data_dir.path().join("balance.txt"), "100.00,80.00\n").unwrap();
    fs::write(
        data_dir.path().join("expenses_2024-01-01.txt"),
        "1 | 2024-01-01 | 2024-01-01 09:00:00 | tea | 5.00\n\
         2 | 2024-01-01 | 2024-01-01 12:00:00 | lunch | 10.00\n",
    )
    .unwrap();

    // 2: view expenses, 2: by amount, 5, Enter: pause, 3: back, 4: exit
    let script = "2\n2\n5\n\n3\n4\n";

    daybook(&data_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("tea"))
        .stdout(predicate::str::contains("5.00"))
        .stdout(predicate::str::contains("lunch").not());
}

#[test]
fn empty_amount_search_has_its_own_wording() {
    let data_dir = TempDir::new().unwrap();

    let script = "2\n2\n99\n\n3\n4\n";

    daybook(&data_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No expenses found matching that amount.",
        ));
}
