//! Academic plan model

use super::{Course, DegreeRequirement};
use crate::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a plan through advisor review
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStatus {
    /// Being edited by the student
    #[default]
    Draft,
    /// Queued with an advisor, read-only for the student
    PendingReview,
    /// Reviewed and approved
    Approved,
    /// Reviewed and denied
    Denied,
}

impl PlanStatus {
    /// `Approved` or `Denied`
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Denied)
    }

    /// Whether the student may still change the course list
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Draft | Self::Denied)
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "Draft"),
            Self::PendingReview => write!(f, "Pending Review"),
            Self::Approved => write!(f, "Approved"),
            Self::Denied => write!(f, "Denied"),
        }
    }
}

/// A student's proposed set of courses against one degree requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicPlan {
    /// Plan identifier
    pub plan_id: u32,

    /// Version label of the requirement the plan targets (e.g., "2024A")
    pub degree_requirements_version: String,

    /// Free-form annotation
    pub customizations: String,

    /// Progress label (e.g., "Draft", "In Progress")
    pub progress: String,

    /// Planned courses; order is irrelevant and duplicates are allowed
    courses: Vec<Course>,

    /// Cached credit total, kept equal to the sum of `courses[*].credits`
    total_credits: f32,

    /// Result of the last review or override
    pub is_approved: bool,

    /// Review lifecycle state
    pub status: PlanStatus,

    /// Requirement the plan is evaluated against
    pub degree_requirement: Option<DegreeRequirement>,
}

impl AcademicPlan {
    /// Create a new, empty plan
    ///
    /// # Arguments
    /// * `plan_id` - Plan identifier
    /// * `degree_requirements_version` - Targeted requirement version
    /// * `customizations` - Free-form annotation
    /// * `progress` - Progress label
    #[must_use]
    pub fn new(
        plan_id: u32,
        degree_requirements_version: &str,
        customizations: &str,
        progress: &str,
    ) -> Self {
        Self {
            plan_id,
            degree_requirements_version: degree_requirements_version.to_string(),
            customizations: customizations.to_string(),
            progress: progress.to_string(),
            courses: Vec::new(),
            total_credits: 0.0,
            is_approved: false,
            status: PlanStatus::Draft,
            degree_requirement: None,
        }
    }

    /// Attach the requirement the plan is validated against
    #[must_use]
    pub fn with_requirement(mut self, requirement: DegreeRequirement) -> Self {
        self.set_requirement(requirement);
        self
    }

    /// Replace the requirement, keeping the version label in sync
    pub fn set_requirement(&mut self, requirement: DegreeRequirement) {
        self.degree_requirements_version.clone_from(&requirement.version);
        self.degree_requirement = Some(requirement);
    }

    /// Planned courses
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Whether any planned course carries `course_id`
    #[must_use]
    pub fn contains_course(&self, course_id: &str) -> bool {
        self.courses.iter().any(|course| course.has_id(course_id))
    }

    /// Append a course; duplicates are kept
    pub fn add_course(&mut self, course: Course) {
        self.total_credits += course.credits;
        self.courses.push(course);
    }

    /// Remove the first course whose id matches
    ///
    /// # Returns
    /// `true` if a course was removed, `false` if none matched
    pub fn remove_course(&mut self, course_id: &str) -> bool {
        let Some(pos) = self.courses.iter().position(|c| c.has_id(course_id)) else {
            return false;
        };
        self.courses.remove(pos);
        self.total_credits = self.calculate_total_credits();
        true
    }

    /// Replace the whole course list
    pub fn replace_courses(&mut self, courses: Vec<Course>) {
        self.courses = courses;
        self.total_credits = self.calculate_total_credits();
    }

    /// Sum of credits over all planned courses, duplicates included
    #[must_use]
    pub fn calculate_total_credits(&self) -> f32 {
        self.courses
            .iter()
            .fold(0.0, |total, course| total + course.credits)
    }

    /// Cached credit total
    #[must_use]
    pub const fn total_credits(&self) -> f32 {
        self.total_credits
    }

    /// Get total number of planned course entries
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Check the plan against its degree requirement
    ///
    /// Fails on the first unmet criterion, in order: credit minimum
    /// (inclusive), presence of every required course, elective category
    /// membership for elective-category courses. Courses that are neither
    /// required nor in an elective category do not affect the verdict.
    /// A plan without a requirement never validates.
    #[must_use]
    pub fn validate_plan(&self) -> bool {
        let Some(requirement) = &self.degree_requirement else {
            warn!("Plan {} has no degree requirement to validate against", self.plan_id);
            return false;
        };

        let total_credits = self.calculate_total_credits();
        if total_credits < requirement.total_credits {
            debug!(
                "Plan {}: {total_credits} credits below minimum {}",
                self.plan_id, requirement.total_credits
            );
            return false;
        }

        if let Some(missing) = requirement
            .required_course_ids
            .iter()
            .find(|id| !self.contains_course(id))
        {
            debug!("Plan {}: required course {missing} missing", self.plan_id);
            return false;
        }

        // Category membership is the elective criterion itself.
        self.courses
            .iter()
            .filter(|course| requirement.elective_categories.contains(&course.category))
            .all(|course| requirement.check_elective_requirement(course))
    }

    /// Mark approved
    pub fn approve(&mut self) {
        self.is_approved = true;
        self.status = PlanStatus::Approved;
    }

    /// Mark denied
    pub fn deny(&mut self) {
        self.is_approved = false;
        self.status = PlanStatus::Denied;
    }
}
