//! Review command handler
//!
//! Loads an advising file, optionally submits each student's first draft, then
//! has every advisor work through their queue. Outcomes are printed and, when a
//! format is given, a report is written per reviewed plan.

use nu_advisor::advising::{AdvisingOffice, ReviewOutcome, SubmitOutcome};
use nu_advisor::catalog::load_advising_file;
use nu_advisor::report::{reporter_for, PlanReport, ReportFormat};
use nu_advisor::{debug, error, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

/// Run the review command
///
/// # Arguments
/// * `input_file` - Advising TOML file
/// * `report_format` - Report format name; no reports are written when `None`
/// * `output_dir` - Directory receiving report files
/// * `submit_drafts` - Submit each student's first draft before reviewing
pub fn run(
    input_file: &Path,
    report_format: Option<&str>,
    output_dir: &Path,
    submit_drafts: bool,
) -> ExitCode {
    let format = match report_format.map(ReportFormat::from_str).transpose() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("✗ {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut data = match load_advising_file(input_file) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load {}: {e}", input_file.display());
            eprintln!("✗ Failed to load {}: {e}", input_file.display());
            return ExitCode::FAILURE;
        }
    };

    if submit_drafts {
        submit_all_drafts(&mut data.office);
    }

    let decisions = review_queues(&mut data.office);
    if decisions.is_empty() {
        println!("No plans waiting for review");
        return ExitCode::SUCCESS;
    }

    let Some(format) = format else {
        return ExitCode::SUCCESS;
    };
    match write_reports(&data.office, &decisions, format, output_dir) {
        Ok(paths) => {
            for path in paths {
                println!("✓ Report generated: {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Report generation failed: {e}");
            eprintln!("✗ Report generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Submit the first draft of every student that has one
fn submit_all_drafts(office: &mut AdvisingOffice) {
    let students: Vec<u32> = office
        .users()
        .filter(|user| user.is_student())
        .map(|user| user.user_id)
        .collect();

    for student_id in students {
        match office.submit_plan_for_approval(student_id) {
            SubmitOutcome::Submitted {
                plan_id,
                advisor_id,
            } => println!("→ Plan {plan_id} submitted to advisor {advisor_id}"),
            other => debug!("Student {student_id}: {other}"),
        }
    }
}

/// Drain every advisor's queue and print each decision
fn review_queues(office: &mut AdvisingOffice) -> Vec<(u32, ReviewOutcome)> {
    let advisors: Vec<(u32, String)> = office
        .users()
        .filter(|user| user.is_advisor())
        .map(|user| (user.user_id, user.name.clone()))
        .collect();

    let mut decisions = Vec::new();
    for (advisor_id, name) in advisors {
        let outcomes = office.review_all(advisor_id);
        if outcomes.is_empty() {
            continue;
        }
        info!("{name} reviewed {} plans", outcomes.len());
        println!("\n=== {name} ===");
        for (plan_id, outcome) in outcomes {
            let mark = match outcome {
                ReviewOutcome::Approved => "✓",
                ReviewOutcome::Denied => "✗",
                _ => "-",
            };
            println!("{mark} Plan {plan_id}: {outcome}");
            if !outcome.is_noop() {
                decisions.push((plan_id, outcome));
            }
        }
    }
    decisions
}

fn write_reports(
    office: &AdvisingOffice,
    decisions: &[(u32, ReviewOutcome)],
    format: ReportFormat,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let reporter = reporter_for(format);
    let mut written = Vec::new();
    for (plan_id, _) in decisions {
        let Some(report) = PlanReport::build(office, *plan_id) else {
            continue;
        };
        let path = output_dir.join(format!("plan_{plan_id}_review.{}", format.extension()));
        reporter.generate(&report, &path)?;
        written.push(path);
    }
    Ok(written)
}
