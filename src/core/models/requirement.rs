//! Degree requirement model

use super::Course;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Links a catalog course to a requirement, flagged as required or elective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCourse {
    /// Owning requirement
    pub requirement_id: u32,
    /// Linked course identifier
    pub course_id: String,
    /// `true` when the course only counts as an elective
    pub is_elective: bool,
}

impl RequirementCourse {
    /// Create a new requirement/course link
    #[must_use]
    pub fn new(requirement_id: u32, course_id: impl ToString, is_elective: bool) -> Self {
        Self {
            requirement_id,
            course_id: course_id.to_string(),
            is_elective,
        }
    }
}

/// The rules a plan must satisfy for one degree/catalog version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeRequirement {
    /// Requirement identifier
    pub requirement_id: u32,

    /// Catalog year or revision label (e.g., "2024A")
    pub version: String,

    /// Course identifiers that must appear at least once in a plan
    pub required_course_ids: BTreeSet<String>,

    /// Category labels that satisfy an elective slot
    pub elective_categories: BTreeSet<String>,

    /// Minimum aggregate credits, inclusive
    pub total_credits: f32,
}

impl Default for DegreeRequirement {
    fn default() -> Self {
        Self {
            requirement_id: 0,
            version: "-1.0".to_string(),
            required_course_ids: BTreeSet::new(),
            elective_categories: BTreeSet::new(),
            total_credits: 0.0,
        }
    }
}

impl DegreeRequirement {
    /// Create a new degree requirement
    ///
    /// Duplicate ids or categories collapse into one entry. A negative credit
    /// threshold is clamped to zero.
    ///
    /// # Arguments
    /// * `requirement_id` - Requirement identifier
    /// * `version` - Catalog version label
    /// * `required_course_ids` - Course ids every satisfying plan must contain
    /// * `elective_categories` - Category labels that count as electives
    /// * `total_credits` - Minimum credits
    #[must_use]
    pub fn new<I, C>(
        requirement_id: u32,
        version: &str,
        required_course_ids: I,
        elective_categories: C,
        total_credits: f32,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
        C: IntoIterator,
        C::Item: ToString,
    {
        Self {
            requirement_id,
            version: version.to_string(),
            required_course_ids: required_course_ids
                .into_iter()
                .map(|id| id.to_string())
                .collect(),
            elective_categories: elective_categories
                .into_iter()
                .map(|category| category.to_string())
                .collect(),
            total_credits: total_credits.max(0.0),
        }
    }

    /// Build a requirement from its course links
    ///
    /// Non-elective links become required course ids; links belonging to another
    /// requirement are ignored.
    #[must_use]
    pub fn from_links<C>(
        requirement_id: u32,
        version: &str,
        links: &[RequirementCourse],
        elective_categories: C,
        total_credits: f32,
    ) -> Self
    where
        C: IntoIterator,
        C::Item: ToString,
    {
        let required = links
            .iter()
            .filter(|link| link.requirement_id == requirement_id && !link.is_elective)
            .map(|link| link.course_id.clone());
        Self::new(
            requirement_id,
            version,
            required,
            elective_categories,
            total_credits,
        )
    }

    /// Sum of credits over the given courses, duplicates included
    #[must_use]
    pub fn calculate_credits(&self, courses: &[Course]) -> f32 {
        courses
            .iter()
            .fold(0.0, |total, course| total + course.credits)
    }

    /// Whether the course is one of the required courses
    #[must_use]
    pub fn check_course_requirement(&self, course: &Course) -> bool {
        self.required_course_ids.contains(&course.course_id)
    }

    /// Whether the course's category qualifies as an elective
    #[must_use]
    pub fn check_elective_requirement(&self, course: &Course) -> bool {
        self.elective_categories.contains(&course.category)
    }

    /// Whether `course_id` is required
    #[must_use]
    pub fn requires(&self, course_id: &str) -> bool {
        self.required_course_ids.contains(course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement() -> DegreeRequirement {
        DegreeRequirement::new(1, "2024A", ["101", "102"], ["Humanities"], 12.0)
    }

    #[test]
    fn test_requirement_creation() {
        let req = DegreeRequirement::new(
            1,
            "2022A",
            ["CSCI101", "MATH201"],
            ["Humanities", "Social Sciences"],
            120.0,
        );

        assert_eq!(req.requirement_id, 1);
        assert_eq!(req.version, "2022A");
        assert!(req.requires("CSCI101"));
        assert!(req.requires("MATH201"));
        assert_eq!(req.elective_categories.len(), 2);
        assert!((req.total_credits - 120.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_default_values() {
        let req = DegreeRequirement::default();

        assert_eq!(req.requirement_id, 0);
        assert_eq!(req.version, "-1.0");
        assert!(req.required_course_ids.is_empty());
        assert!(req.total_credits.abs() < f32::EPSILON);
    }

    #[test]
    fn test_duplicate_required_ids_collapse() {
        let req = DegreeRequirement::new(1, "2024A", ["101", "101", "102"], ["Humanities"], 12.0);
        assert_eq!(req.required_course_ids.len(), 2);
    }

    #[test]
    fn test_negative_threshold_is_clamped() {
        let req = DegreeRequirement::new(1, "2024A", Vec::<String>::new(), Vec::<String>::new(), -3.0);
        assert!(req.total_credits.abs() < f32::EPSILON);
    }

    #[test]
    fn test_calculate_credits_counts_duplicates() {
        let req = requirement();
        let course = Course::new(101, "Intro", 4.0, "CS", "Core");

        assert!(req.calculate_credits(&[]).abs() < f32::EPSILON);
        assert!(req.calculate_credits(&[]).is_sign_positive());
        let total = req.calculate_credits(&[course.clone(), course]);
        assert!((total - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_check_course_requirement_uses_string_form() {
        let req = requirement();

        assert!(req.check_course_requirement(&Course::new(101, "Intro", 4.0, "CS", "Core")));
        assert!(req.check_course_requirement(&Course::new("102", "Algo", 3.0, "CS", "Core")));
        assert!(!req.check_course_requirement(&Course::new(201, "Art", 3.0, "Art", "Humanities")));
    }

    #[test]
    fn test_check_elective_requirement() {
        let req = requirement();

        assert!(req.check_elective_requirement(&Course::new(201, "Poetry", 3.0, "English", "Humanities")));
        assert!(!req.check_elective_requirement(&Course::new(202, "Gym", 1.0, "PE", "Wellness")));
    }

    #[test]
    fn test_from_links_uses_non_elective_links() {
        let links = vec![
            RequirementCourse::new(7, 101, false),
            RequirementCourse::new(7, 150, true),
            RequirementCourse::new(8, 999, false),
        ];
        let req = DegreeRequirement::from_links(7, "2025", &links, ["History"], 30.0);

        assert!(req.requires("101"));
        assert!(!req.requires("150"));
        assert!(!req.requires("999"));
    }
}
