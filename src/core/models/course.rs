//! Course model

use serde::{Deserialize, Serialize};

/// Represents a catalog course that can be placed in a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier in its string form (e.g., "101", "CSCI101")
    pub course_id: String,

    /// Display name (e.g., "Introduction to Programming")
    pub name: String,

    /// Credit count (can be fractional)
    pub credits: f32,

    /// Offering department (e.g., "Computer Science")
    pub department: String,

    /// Category label (e.g., "Core", "Elective", "Humanities")
    pub category: String,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `course_id` - Identifier; numeric ids are stored as their decimal string
    /// * `name` - Display name
    /// * `credits` - Credit count
    /// * `department` - Offering department
    /// * `category` - Category label used for elective matching
    #[must_use]
    pub fn new(
        course_id: impl ToString,
        name: &str,
        credits: f32,
        department: &str,
        category: &str,
    ) -> Self {
        Self {
            course_id: course_id.to_string(),
            name: name.to_string(),
            credits,
            department: department.to_string(),
            category: category.to_string(),
        }
    }

    /// Whether this course carries the given identifier
    #[must_use]
    pub fn has_id(&self, course_id: &str) -> bool {
        self.course_id == course_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(101, "Introduction to Programming", 3.0, "Computer Science", "Core");

        assert_eq!(course.course_id, "101");
        assert_eq!(course.name, "Introduction to Programming");
        assert!((course.credits - 3.0).abs() < f32::EPSILON);
        assert_eq!(course.department, "Computer Science");
        assert_eq!(course.category, "Core");
    }

    #[test]
    fn test_string_and_numeric_ids_compare_equal() {
        let numeric = Course::new(102, "Data Structures", 3.0, "CS", "Core");
        let textual = Course::new("102", "Data Structures", 3.0, "CS", "Core");

        assert_eq!(numeric, textual);
        assert!(numeric.has_id("102"));
        assert!(!numeric.has_id("1020"));
    }

    #[test]
    fn test_fractional_credits() {
        let course = Course::new("PHYS1151L", "Physics Lab", 1.5, "Physics", "Core");
        assert!((course.credits - 1.5).abs() < f32::EPSILON);
    }
}
