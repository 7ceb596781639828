//! Markdown report generator

use super::fill_header;
use crate::core::report::{PlanReport, ReportGenerator};

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/review.md");

/// Markdown report generator
#[derive(Debug, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn bullet_list(items: &[String], empty: &str) -> String {
        if items.is_empty() {
            return format!("_{empty}_");
        }
        items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, report: &PlanReport) -> String {
        let missing = if report.missing_required.is_empty() {
            "All required courses are planned.".to_string()
        } else {
            let list = Self::bullet_list(&report.missing_required, "");
            format!("Missing:\n\n{list}")
        };

        fill_header(MARKDOWN_TEMPLATE, report, str::to_string)
            .replace("{{missing_required}}", &missing)
            .replace(
                "{{electives}}",
                &Self::bullet_list(&report.elective_courses, "No elective courses planned."),
            )
            .replace(
                "{{unrelated}}",
                &Self::bullet_list(&report.unrelated_courses, "None."),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{AcademicPlan, Course, DegreeRequirement};

    fn report(courses: &[Course]) -> PlanReport {
        let mut plan = AcademicPlan::new(1, "", "", "Draft").with_requirement(DegreeRequirement::new(
            1,
            "2024A",
            ["101", "102"],
            ["Humanities"],
            12.0,
        ));
        for course in courses {
            plan.add_course(course.clone());
        }
        PlanReport::from_plan(&plan, Some("John Doe"))
    }

    #[test]
    fn test_render_invalid_plan() {
        let output = MarkdownReporter::new().render(&report(&[
            Course::new(101, "Intro", 6.0, "CS", "Core"),
            Course::new(102, "Algo", 5.0, "CS", "Core"),
        ]));

        assert!(output.starts_with("# Plan Review: Plan 1"));
        assert!(output.contains("| Student | John Doe |"));
        assert!(output.contains("| Verdict | Invalid |"));
        assert!(output.contains("11.0 of 12.0 required credits planned (1.0 short)."));
        assert!(output.contains("All required courses are planned."));
        assert!(!output.contains("{{"));
    }

    #[test]
    fn test_render_valid_plan() {
        let output = MarkdownReporter::new().render(&report(&[
            Course::new(101, "Intro", 6.0, "CS", "Core"),
            Course::new(102, "Algo", 5.0, "CS", "Core"),
            Course::new(201, "Poetry", 4.0, "English", "Humanities"),
        ]));

        assert!(output.contains("| Verdict | Valid |"));
        assert!(output.contains("- 201 - Poetry"));
        assert!(output.contains("_None._"));
    }

    #[test]
    fn test_render_lists_missing_courses() {
        let output = MarkdownReporter::new().render(&report(&[Course::new(101, "Intro", 12.0, "CS", "Core")]));
        assert!(output.contains("Missing:\n\n- 102"));
    }

    #[test]
    fn test_render_empty_plan_credits_unsigned() {
        let output = MarkdownReporter::new().render(&report(&[]));
        assert!(output.contains("0.0 of 12.0 required credits planned (12.0 short)."));
        assert!(!output.contains("-0.0"));
    }
}
