mod common;
use common::{d, design_review_week, h, init_db, rts, setup_test_db, temp_out};
use predicates::prelude::*;
use rtimesheet::export::{ExportFormat, default_file_name, export_document};
use rtimesheet::models::{TimesheetId, TimesheetRecord, TimesheetStatus};
use std::fs;

fn submitted_record() -> TimesheetRecord {
    TimesheetRecord::from_draft(TimesheetId(3), &design_review_week(), TimesheetStatus::Submitted)
}

#[test]
fn test_html_has_one_row_per_day() {
    let html = export_document(&submitted_record(), "TechnoApex Ltd.").expect("render");

    assert_eq!(html.matches("data-date=").count(), 7);
    assert!(html.contains("data-date=\"2024-01-01\""));
    assert!(html.contains("data-date=\"2024-01-07\""));
    assert!(html.contains("Monday, 01 Jan 2024"));
    assert!(html.contains("design review"));
}

#[test]
fn test_html_flags_weekend_rows() {
    let html = export_document(&submitted_record(), "TechnoApex Ltd.").expect("render");

    assert_eq!(html.matches("data-weekend=\"true\"").count(), 2);
    assert_eq!(html.matches("data-weekend=\"false\"").count(), 5);
    assert!(html.contains(
        "<tr class=\"weekend\" data-date=\"2024-01-06\" data-weekend=\"true\">"
    ));
}

#[test]
fn test_html_footer_total() {
    let mut draft = design_review_week();
    draft.set_entry(1, h(7.5), Some("support")).unwrap();
    let record = TimesheetRecord::from_draft(TimesheetId(1), &draft, TimesheetStatus::Draft);

    let html = export_document(&record, "TechnoApex Ltd.").expect("render");

    assert!(html.contains("<span class=\"hours total\">15.50</span>"));
}

#[test]
fn test_html_header_and_escaping() {
    let mut draft = design_review_week();
    draft.set_client("Smith & <Sons>");
    draft.set_entry(0, h(8.0), Some("fix \"quotes\"")).unwrap();
    let record = TimesheetRecord::from_draft(TimesheetId(3), &draft, TimesheetStatus::Submitted);

    let html = export_document(&record, "TechnoApex Ltd.").expect("render");

    assert!(html.contains("<h1>TechnoApex Ltd.</h1>"));
    assert!(html.contains("Timesheet #3"));
    // named or numeric entities are both valid HTML
    assert!(
        html.contains("Smith &amp; &lt;Sons&gt;") || html.contains("Smith &#38; &#60;Sons&#62;")
    );
    assert!(html.contains("fix &quot;quotes&quot;") || html.contains("fix &#34;quotes&#34;"));
    assert!(!html.contains("fix \"quotes\""));
    assert!(html.contains("Week: <strong>2024-01-01 to 2024-01-07</strong>"));
    assert!(!html.contains("<Sons>"));
}

#[test]
fn test_html_is_deterministic() {
    let record = submitted_record();
    assert_eq!(
        export_document(&record, "X").unwrap(),
        export_document(&record, "X").unwrap()
    );
}

#[test]
fn test_default_file_name_uses_week_start() {
    let mut record = submitted_record();
    record.start_date = d(2024, 1, 1);

    assert_eq!(
        default_file_name(&record, "Claris-TS", &ExportFormat::Html).to_string_lossy(),
        "Claris-TS-010124.html"
    );
    assert_eq!(
        default_file_name(&record, "ts", &ExportFormat::Csv).to_string_lossy(),
        "ts-010124.csv"
    );
}

#[test]
fn test_export_html_cli() {
    let db_path = setup_test_db("export_html_cli");
    let out = temp_out("export_html_cli", "html");
    init_db(&db_path);

    rts()
        .args([
            "--db", &db_path, "new", "--start", "2024-01-01", "--set", "mon=8:design review",
            "--submit",
        ])
        .assert()
        .success();

    rts()
        .args([
            "--db", &db_path, "export", "1", "--format", "html", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML export completed"));

    let html = fs::read_to_string(&out).expect("html output");
    assert!(html.contains("design review"));
    assert!(html.contains("<span class=\"hours total\">8.00</span>"));
    assert!(html.contains("Status: <strong>Submitted</strong>"));
}

#[test]
fn test_export_json_and_csv_cli() {
    let db_path = setup_test_db("export_json_csv_cli");
    let json_out = temp_out("export_json_csv_cli", "json");
    let csv_out = temp_out("export_json_csv_cli", "csv");
    init_db(&db_path);

    rts()
        .args([
            "--db", &db_path, "new", "--start", "2024-01-01", "--set", "mon=8:design review",
            "--set", "tue=7.5:support",
        ])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "export", "1", "--format", "json", "--file", &json_out, "--force"])
        .assert()
        .success();
    rts()
        .args(["--db", &db_path, "export", "1", "--format", "csv", "--file", &csv_out, "--force"])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(json["status"], "Draft");
    assert_eq!(json["total_hours"], 15.5);
    assert_eq!(json["entries"].as_array().unwrap().len(), 7);

    let csv = fs::read_to_string(&csv_out).unwrap();
    assert_eq!(csv.lines().count(), 8);
    assert!(csv.contains("2024-01-02"));
    assert!(csv.contains("support"));
}

#[test]
fn test_export_unknown_id_fails() {
    let db_path = setup_test_db("export_unknown");
    let out = temp_out("export_unknown", "html");
    init_db(&db_path);

    rts()
        .args(["--db", &db_path, "export", "5", "--file", &out, "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Timesheet #5 not found"));
}
