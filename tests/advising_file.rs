//! Integration tests for loading advising files and writing review reports

use nu_advisor::advising::ReviewOutcome;
use nu_advisor::catalog::load_advising_file;
use nu_advisor::models::PlanStatus;
use nu_advisor::report::{reporter_for, PlanReport, ReportFormat};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const ADVISING_FILE: &str = r#"
[[courses]]
course_id = "101"
name = "Intro to Computer Science"
credits = 6
department = "Computer Science"
category = "Core"

[[courses]]
course_id = "102"
name = "Algorithms"
credits = 5
department = "Computer Science"
category = "Core"

[[courses]]
course_id = "201"
name = "Poetry & Prose"
credits = 4
department = "English"
category = "Humanities"

[[requirements]]
requirement_id = 1
version = "2024A"
required_course_ids = ["101", "102"]
elective_categories = ["Humanities"]
total_credits = 12

[[advisors]]
user_id = 1
name = "Jane Doe"
email = "jane.doe@example.com"
advisor_id = 1
department = "Computer Science"

[[admins]]
user_id = 2
name = "Registrar"
email = "registrar@example.com"

[[students]]
user_id = 201
name = "John Doe"
email = "john.doe@example.com"
student_id = 123
degree_program = "Computer Science"
advisor = 1

[[students]]
user_id = 202
name = "Mary Major"
email = "mary.major@example.com"
student_id = 124

[[plans]]
plan_id = 1
student = 201
requirement = 1
courses = ["101", "102", "201"]
submitted = true

[[plans]]
plan_id = 2
student = 201
requirement = 1
courses = ["101", "102"]
submitted = true

[[plans]]
plan_id = 3
student = 202
requirement = 1
courses = ["101"]
"#;

fn write_fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("advising.toml");
    fs::write(&path, ADVISING_FILE).expect("Failed to write fixture");
    path
}

#[test]
fn load_builds_office_and_queue() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let data = load_advising_file(write_fixture(&dir)).expect("Failed to load advising file");

    assert_eq!(data.catalog.len(), 3);
    assert_eq!(data.office.users().count(), 4);
    assert_eq!(data.office.pending_plans(1), &[1, 2]);
    assert_eq!(data.office.plan(3).unwrap().status, PlanStatus::Draft);
    assert_eq!(data.office.owner_of(3), Some(202));
}

#[test]
fn queue_from_file_reviews_in_order() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut data = load_advising_file(write_fixture(&dir)).expect("Failed to load advising file");

    let outcomes = data.office.review_all(1);
    assert_eq!(
        outcomes,
        vec![(1, ReviewOutcome::Approved), (2, ReviewOutcome::Denied)]
    );
    assert!(data.office.pending_plans(1).is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    assert!(load_advising_file(dir.path().join("absent.toml")).is_err());
}

#[test]
fn unknown_requirement_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(
        &path,
        r#"
[[students]]
user_id = 5
name = "A"
email = "a@example.com"
student_id = 5

[[plans]]
plan_id = 1
student = 5
requirement = 9
"#,
    )
    .expect("Failed to write fixture");

    let err = load_advising_file(&path).unwrap_err();
    assert!(err.to_string().contains("unknown requirement 9"));
}

#[test]
fn reports_are_written_per_format() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut data = load_advising_file(write_fixture(&dir)).expect("Failed to load advising file");
    data.office.review_all(1);

    let report = PlanReport::build(&data.office, 1).expect("plan 1 exists");
    assert!(report.passes);

    let out_dir = dir.path().join("reports");
    for format in [ReportFormat::Markdown, ReportFormat::Html] {
        let path = out_dir.join(format!("plan_1_review.{}", format.extension()));
        reporter_for(format)
            .generate(&report, &path)
            .expect("Failed to write report");

        let content = fs::read_to_string(&path).expect("Failed to read report");
        assert!(content.contains("John Doe"));
        assert!(content.contains("2024A"));
    }

    let html = fs::read_to_string(out_dir.join("plan_1_review.html")).expect("html report");
    assert!(html.contains("Poetry &amp; Prose"));
    assert!(!html.contains("{{"));
}
