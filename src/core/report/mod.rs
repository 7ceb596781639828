//! Plan review reports
//!
//! Breaks a plan's validation down per criterion and renders the result as
//! Markdown or HTML from embedded templates.

pub mod formats;

use crate::core::advising::AdvisingOffice;
use crate::core::models::{AcademicPlan, PlanStatus};
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Per-criterion outcome of checking a plan against its requirement
#[derive(Debug, Clone, PartialEq)]
pub struct PlanReport {
    /// Plan identifier
    pub plan_id: u32,
    /// Owning student's name, if known
    pub student_name: Option<String>,
    /// Requirement version label
    pub requirement_version: String,
    /// Review state
    pub status: PlanStatus,
    /// Approval flag
    pub is_approved: bool,
    /// Credits in the plan, duplicates included
    pub total_credits: f32,
    /// Credits the requirement asks for
    pub required_credits: f32,
    /// Required course ids absent from the plan
    pub missing_required: Vec<String>,
    /// Planned courses that count as electives, as `id - name`
    pub elective_courses: Vec<String>,
    /// Planned courses that are neither required nor elective
    pub unrelated_courses: Vec<String>,
    /// Whether a requirement is attached at all
    pub has_requirement: bool,
    /// Overall verdict, identical to `AcademicPlan::validate_plan`
    pub passes: bool,
}

impl PlanReport {
    /// Build the report for a plan
    #[must_use]
    pub fn from_plan(plan: &AcademicPlan, student_name: Option<&str>) -> Self {
        let requirement = plan.degree_requirement.as_ref();
        let total_credits = plan.calculate_total_credits();

        let missing_required = requirement.map_or_else(Vec::new, |req| {
            req.required_course_ids
                .iter()
                .filter(|id| !plan.contains_course(id))
                .cloned()
                .collect()
        });

        let mut elective_courses = Vec::new();
        let mut unrelated_courses = Vec::new();
        for course in plan.courses() {
            let label = format!("{} - {}", course.course_id, course.name);
            match requirement {
                Some(req) if req.check_elective_requirement(course) => elective_courses.push(label),
                Some(req) if req.check_course_requirement(course) => {}
                _ => unrelated_courses.push(label),
            }
        }

        Self {
            plan_id: plan.plan_id,
            student_name: student_name.map(str::to_string),
            requirement_version: plan.degree_requirements_version.clone(),
            status: plan.status,
            is_approved: plan.is_approved,
            total_credits,
            required_credits: requirement.map_or(0.0, |req| req.total_credits),
            missing_required,
            elective_courses,
            unrelated_courses,
            has_requirement: requirement.is_some(),
            passes: plan.validate_plan(),
        }
    }

    /// Build the report for a plan held by an office
    ///
    /// # Returns
    /// `None` if the plan does not exist
    #[must_use]
    pub fn build(office: &AdvisingOffice, plan_id: u32) -> Option<Self> {
        let plan = office.plan(plan_id)?;
        let student_name = office
            .owner_of(plan_id)
            .and_then(|id| office.user(id))
            .map(|user| user.name.as_str());
        Some(Self::from_plan(plan, student_name))
    }

    /// Whether the credit minimum is met
    #[must_use]
    pub fn credits_ok(&self) -> bool {
        self.has_requirement && self.total_credits >= self.required_credits
    }

    /// Credits still needed to reach the minimum
    #[must_use]
    pub fn credit_shortfall(&self) -> f32 {
        (self.required_credits - self.total_credits).max(0.0)
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the report content
    fn render(&self, report: &PlanReport) -> String;

    /// Render the report and write it to a file
    ///
    /// # Errors
    /// Returns an error if the output directory or file cannot be written
    fn generate(&self, report: &PlanReport, output_path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, self.render(report))?;
        Ok(())
    }
}

/// Reporter for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
