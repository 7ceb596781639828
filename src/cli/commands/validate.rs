//! Validate command handler
//!
//! Prints a per-criterion verdict for plans in an advising file. Review state
//! is never changed.

use nu_advisor::catalog::load_advising_file;
use nu_advisor::report::PlanReport;
use nu_advisor::{error, verbose};
use std::path::Path;
use std::process::ExitCode;

/// Run the validate command
///
/// # Arguments
/// * `input_file` - Advising TOML file
/// * `plan_id` - Only validate this plan when set
pub fn run(input_file: &Path, plan_id: Option<u32>) -> ExitCode {
    let data = match load_advising_file(input_file) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load {}: {e}", input_file.display());
            eprintln!("✗ Failed to load {}: {e}", input_file.display());
            return ExitCode::FAILURE;
        }
    };

    let plan_ids: Vec<u32> = match plan_id {
        Some(id) if data.office.plan(id).is_none() => {
            eprintln!("✗ Plan {id} not found in {}", input_file.display());
            return ExitCode::FAILURE;
        }
        Some(id) => vec![id],
        None => data.office.plans().map(|plan| plan.plan_id).collect(),
    };

    if plan_ids.is_empty() {
        println!("No plans in {}", input_file.display());
        return ExitCode::SUCCESS;
    }

    let mut passing = 0;
    for id in &plan_ids {
        let Some(report) = PlanReport::build(&data.office, *id) else {
            continue;
        };
        print_report(&report);
        if report.passes {
            passing += 1;
        }
    }

    println!("\n{passing} of {} plans satisfy their requirements", plan_ids.len());
    ExitCode::SUCCESS
}

fn print_report(report: &PlanReport) {
    let mark = if report.passes { "✓" } else { "✗" };
    let student = report.student_name.as_deref().unwrap_or("Unknown");
    println!(
        "{mark} Plan {} ({student}, requirement {}): {:.1} / {:.1} credits",
        report.plan_id, report.requirement_version, report.total_credits, report.required_credits
    );

    if !report.has_requirement {
        println!("    no degree requirement attached");
        return;
    }
    if !report.credits_ok() {
        println!("    {:.1} credits short", report.credit_shortfall());
    }
    if !report.missing_required.is_empty() {
        println!("    missing required: {}", report.missing_required.join(", "));
    }
    verbose!("    electives: {}", report.elective_courses.join(", "));
    verbose!("    other courses: {}", report.unrelated_courses.join(", "));
}
