mod common;
use common::{init_db, rts, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"))
        .stdout(predicate::str::contains("Applied 2 database migration(s)."));

    assert!(std::path::Path::new(&db_path).exists());

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database schema is up to date."));
}

#[test]
fn test_week_prints_seven_days() {
    rts()
        .args(["week", "--start", "2024-02-26", "--test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02-26"))
        .stdout(predicate::str::contains("Thursday, 29 Feb 2024"))
        .stdout(predicate::str::contains("Sunday, 03 Mar 2024"));
}

#[test]
fn test_week_rejects_bad_date() {
    rts()
        .args(["week", "--start", "2024-02-30", "--test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_new_and_submit_flow() {
    let db_path = setup_test_db("new_and_submit");
    init_db(&db_path);

    rts()
        .args([
            "--db", &db_path, "new", "--start", "2024-01-01", "--set", "mon=8:design review",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved draft #1"))
        .stdout(predicate::str::contains("design review"));

    rts()
        .args(["--db", &db_path, "submit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timesheet #1 submitted for approval"))
        .stdout(predicate::str::contains("8.00h"));

    rts()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01 → 2024-01-07"))
        .stdout(predicate::str::contains("Submitted"));
}

#[test]
fn test_submit_empty_week_fails() {
    let db_path = setup_test_db("submit_empty");
    init_db(&db_path);

    rts()
        .args(["--db", &db_path, "new", "--start", "2024-01-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved draft #1"));

    rts()
        .args(["--db", &db_path, "submit", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Total hours cannot be zero"));

    rts()
        .args(["--db", &db_path, "list", "--status", "draft"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft"));
}

#[test]
fn test_new_submit_requires_descriptions() {
    let db_path = setup_test_db("new_requires_desc");
    init_db(&db_path);

    rts()
        .args([
            "--db", &db_path, "new", "--start", "2024-01-01", "--set", "wed=4", "--submit",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description is required for 2024-01-03"));

    rts()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No timesheets found."));
}

#[test]
fn test_edit_then_submit() {
    let db_path = setup_test_db("edit_then_submit");
    init_db(&db_path);

    rts()
        .args(["--db", &db_path, "new", "--start", "2024-01-08"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "edit", "1", "--set", "tue=4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft #1 updated"));

    rts()
        .args(["--db", &db_path, "edit", "1", "--submit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description is required for 2024-01-09"));

    rts()
        .args([
            "--db", &db_path, "edit", "1", "--set", "2024-01-09=4:code review", "--submit",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timesheet #1 submitted for approval"));

    rts()
        .args(["--db", &db_path, "edit", "1", "--set", "mon=1:late"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only drafts can be changed"));
}

#[test]
fn test_edit_moving_week_clears_days() {
    let db_path = setup_test_db("edit_move_week");
    init_db(&db_path);

    rts()
        .args([
            "--db", &db_path, "new", "--start", "2024-01-01", "--set", "mon=8:design review",
        ])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "edit", "1", "--start", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all days have been cleared"))
        .stdout(predicate::str::contains("Monday, 15 Jan 2024"))
        .stdout(predicate::str::contains("design review").not());
}

#[test]
fn test_show_weekend_and_total() {
    let db_path = setup_test_db("show_record");
    init_db(&db_path);

    rts()
        .args([
            "--db", &db_path, "new", "--start", "2024-01-01", "--set", "mon=8:design review",
            "--set", "sat=2.5:on call",
        ])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saturday, 06 Jan 2024"))
        .stdout(predicate::str::contains("on call"))
        .stdout(predicate::str::contains("10.50h"));
}

#[test]
fn test_show_unknown_id() {
    let db_path = setup_test_db("show_unknown");
    init_db(&db_path);

    rts()
        .args(["--db", &db_path, "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Timesheet #99 not found"));
}

#[test]
fn test_delete_draft_only() {
    let db_path = setup_test_db("delete_draft_only");
    init_db(&db_path);

    rts()
        .args([
            "--db", &db_path, "new", "--start", "2024-01-01", "--set", "mon=8:design review",
            "--submit",
        ])
        .assert()
        .success();
    rts()
        .args(["--db", &db_path, "new", "--start", "2024-01-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved draft #2"));

    rts()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only drafts can be changed"));

    rts()
        .args(["--db", &db_path, "del", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft #2 has been deleted."));

    rts()
        .args(["--db", &db_path, "del", "2", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Timesheet #2 not found"));
}

#[test]
fn test_delete_cancelled_without_confirmation() {
    let db_path = setup_test_db("delete_cancelled");
    init_db(&db_path);

    rts()
        .args(["--db", &db_path, "new", "--start", "2024-01-08"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    rts()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success();
}

#[test]
fn test_bad_set_argument_is_rejected_by_parser() {
    let db_path = setup_test_db("bad_set");

    rts()
        .args(["--db", &db_path, "new", "--set", "funday=8:x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("funday"));

    rts()
        .args(["--db", &db_path, "new", "--set", "mon=25:x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hours"));
}

#[test]
fn test_list_rejects_unknown_status() {
    let db_path = setup_test_db("list_bad_status");
    init_db(&db_path);

    rts()
        .args(["--db", &db_path, "list", "--status", "archived"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db(&db_path);

    rts()
        .args([
            "--db", &db_path, "new", "--start", "2024-01-01", "--set", "mon=8:design review",
            "--submit",
        ])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("migration_applied"));
}

#[test]
fn test_relative_db_is_shared_by_init_and_later_commands() {
    let dir = std::env::temp_dir().join("rtimesheet_relative_db");
    std::fs::create_dir_all(&dir).unwrap();
    let db_file = dir.join("relative.sqlite");
    std::fs::remove_file(&db_file).ok();

    rts()
        .current_dir(&dir)
        .args(["--db", "relative.sqlite", "--test", "init"])
        .assert()
        .success();

    assert!(db_file.exists());

    rts()
        .current_dir(&dir)
        .args(["--db", "relative.sqlite", "--test", "log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized at"));
}

#[test]
fn test_fresh_database_output_has_no_migration_lines() {
    let db_path = setup_test_db("fresh_list_output");

    rts()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No timesheets found."))
        .stdout(predicate::str::contains("igration").not());
}

#[test]
fn test_log_without_flag_prints_rows() {
    let db_path = setup_test_db("log_default_print");
    init_db(&db_path);

    rts()
        .args(["--db", &db_path, "log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Internal log"))
        .stdout(predicate::str::contains("init"));
}
