use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("temp file");
    f.write_all(content.as_bytes()).expect("write temp file");
    f
}

fn scan(grid: &NamedTempFile, deny: &NamedTempFile) -> assert_cmd::assert::Assert {
    Command::cargo_bin("scan")
        .expect("binary exists")
        .arg("--grid")
        .arg(grid.path())
        .arg("--denylist")
        .arg(deny.path())
        .assert()
}

#[test]
fn scan_reports_clean_grid() {
    let grid = write_temp("ABCD\nEFGH\nIJKL\nMNOP\n");
    let deny = write_temp("EVIL\n");
    scan(&grid, &deny)
        .success()
        .stdout(predicate::str::contains("clean"));
}

#[test]
fn scan_flags_forbidden_row() {
    let grid = write_temp("EVIL\nABCD\nEFGH\nIJKL\n");
    let deny = write_temp("EVIL\n");
    scan(&grid, &deny)
        .code(2)
        .stdout(predicate::str::contains("forbidden"));
}

#[test]
fn scan_flags_reversed_column() {
    // Column 0 reads LIVE top-to-bottom, EVIL bottom-to-top.
    let grid = write_temp("LAAA\nIAAA\nVAAA\nEAAA\n");
    let deny = write_temp("evil\n");
    scan(&grid, &deny)
        .code(2)
        .stdout(predicate::str::contains("forbidden"));
}

#[test]
fn scan_rejects_ragged_grid() {
    let grid = write_temp("ABC\nDE\nFGH\n");
    let deny = write_temp("EVIL\n");
    scan(&grid, &deny).failure().code(1);
}
