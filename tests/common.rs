#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rtimesheet::models::{Hours, TimesheetDraft};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema of a test DB through the CLI
pub fn init_db(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

pub fn h(v: f64) -> Hours {
    Hours::from_f64(v).expect("valid hours")
}

/// Buffer for the week of 2024-01-01 with nothing filled in
pub fn blank_week() -> TimesheetDraft {
    TimesheetDraft::new(d(2024, 1, 1), "Claris International Inc", "Sudheer Tivare")
        .expect("draft")
}

/// Monday 8h "design review", every other day empty
pub fn design_review_week() -> TimesheetDraft {
    let mut draft = blank_week();
    draft
        .set_entry(0, h(8.0), Some("design review"))
        .expect("monday");
    draft
}
