//! Integration tests running the `cal` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cal() -> Command {
    let mut cmd = Command::cargo_bin("cal").unwrap();
    cmd.env("CAL_TEST_TIME", "2024-02-15").env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_prints_current_month() {
    let output = cal().assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0].trim(), "February 2024");
    assert_eq!(lines[1], "Wk Mo Tu We Th Fr Sa Su");
    assert_eq!(lines[2], " 5           1  2  3  4");
    // Piped output is not a terminal, so no highlight codes
    assert_eq!(lines[4], " 7 12 13 14 15 16 17 18");
    assert_eq!(lines.last().unwrap().trim_end(), " 9 26 27 28 29");
}

#[test]
fn year_argument_prints_twelve_months() {
    let output = cal().arg("2023").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();

    assert_eq!(text.lines().next().unwrap().trim(), "2023");
    for month in [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ] {
        assert_eq!(text.matches(month).count(), 1, "{month}");
    }
    assert!(!text.contains("\x1b["));
    assert!(text.ends_with("31\n"));
}

#[test]
fn negative_year_is_accepted() {
    cal()
        .arg("-44")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" ").and(predicate::str::contains("-44")));
}

#[test]
fn non_integer_year_fails() {
    cal()
        .arg("twenty")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cal: Invalid year value: twenty"));
}

#[test]
fn out_of_range_year_fails() {
    cal()
        .arg("2000000000")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn extra_arguments_fail() {
    cal()
        .args(["2", "2024"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn version_flag() {
    cal()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
