//! HTML report generator
//!
//! Produces a standalone page without external assets.

use super::fill_header;
use crate::core::report::{PlanReport, ReportGenerator};

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/review.html");

/// HTML report generator
#[derive(Debug, Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape text for inclusion in HTML
    #[must_use]
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    fn list(items: &[String], empty: &str) -> String {
        if items.is_empty() {
            return format!("<p><em>{empty}</em></p>");
        }
        let entries: String = items
            .iter()
            .map(|item| format!("<li>{}</li>", Self::escape(item)))
            .collect();
        format!("<ul>{entries}</ul>")
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, report: &PlanReport) -> String {
        let missing = if report.missing_required.is_empty() {
            "<p>All required courses are planned.</p>".to_string()
        } else {
            format!(
                "<p>Missing:</p>{}",
                Self::list(&report.missing_required, "")
            )
        };
        let verdict_class = if report.passes { "pass" } else { "fail" };

        fill_header(HTML_TEMPLATE, report, Self::escape)
            .replace("{{verdict_class}}", verdict_class)
            .replace("{{missing_required}}", &missing)
            .replace(
                "{{electives}}",
                &Self::list(&report.elective_courses, "No elective courses planned."),
            )
            .replace("{{unrelated}}", &Self::list(&report.unrelated_courses, "None."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{AcademicPlan, Course};

    #[test]
    fn test_escape() {
        assert_eq!(
            HtmlReporter::escape("<b>R&D</b> \"x\""),
            "&lt;b&gt;R&amp;D&lt;/b&gt; &quot;x&quot;"
        );
    }

    #[test]
    fn test_render_escapes_course_names() {
        let mut plan = AcademicPlan::new(2, "", "", "Draft");
        plan.add_course(Course::new(300, "Rock & Roll <History>", 3.0, "Music", "Arts"));
        let report = PlanReport::from_plan(&plan, Some("O'Neil"));

        let output = HtmlReporter::new().render(&report);
        assert!(output.contains("<li>300 - Rock &amp; Roll &lt;History&gt;</li>"));
        assert!(output.contains("O&#39;Neil"));
        assert!(output.contains("class=\"fail\""));
        assert!(output.contains("no degree requirement attached"));
        assert!(!output.contains("{{"));
    }
}
