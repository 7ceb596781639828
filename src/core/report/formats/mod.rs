//! Report format implementations
//!
//! Provides renderers for Markdown and HTML review reports.

pub mod html;
pub mod markdown;

pub use html::HtmlReporter;
pub use markdown::MarkdownReporter;

use super::PlanReport;
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Markdown format
    Markdown,
    /// Standalone HTML page
    Html,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Fill the placeholders shared by every template
///
/// `escape` is applied to user-provided text (names, labels).
fn fill_header(template: &str, report: &PlanReport, escape: fn(&str) -> String) -> String {
    let student = report
        .student_name
        .as_deref()
        .map_or_else(|| "Unknown".to_string(), escape);
    let version = if report.requirement_version.is_empty() {
        "none".to_string()
    } else {
        escape(&report.requirement_version)
    };
    let verdict = if report.passes { "Valid" } else { "Invalid" };

    template
        .replace("{{plan_id}}", &report.plan_id.to_string())
        .replace("{{student}}", &student)
        .replace("{{version}}", &version)
        .replace("{{status}}", &report.status.to_string())
        .replace("{{approved}}", if report.is_approved { "yes" } else { "no" })
        .replace("{{verdict}}", verdict)
        .replace("{{credits_line}}", &credits_line(report))
}

fn credits_line(report: &PlanReport) -> String {
    if !report.has_requirement {
        return format!(
            "{:.1} credits planned; no degree requirement attached.",
            report.total_credits
        );
    }
    if report.credits_ok() {
        format!(
            "{:.1} of {:.1} required credits planned.",
            report.total_credits, report.required_credits
        )
    } else {
        format!(
            "{:.1} of {:.1} required credits planned ({:.1} short).",
            report.total_credits,
            report.required_credits,
            report.credit_shortfall()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("MD".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("htm".parse::<ReportFormat>(), Ok(ReportFormat::Html));
        assert!("pdf".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Html.extension(), "html");
    }
}
