//! Plan/course link store

use serde::{Deserialize, Serialize};

/// One course placed in one plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCourse {
    /// Plan identifier
    pub plan_id: u32,
    /// Course identifier
    pub course_id: String,
}

/// Links between plans and catalog courses, in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanCourses {
    links: Vec<PlanCourse>,
}

impl PlanCourses {
    /// Create an empty link store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a course in a plan; the same course may be placed twice
    pub fn add_course_to_plan(&mut self, plan_id: u32, course_id: &str) -> &PlanCourse {
        self.links.push(PlanCourse {
            plan_id,
            course_id: course_id.to_string(),
        });
        &self.links[self.links.len() - 1]
    }

    /// Remove the first link between the plan and the course
    ///
    /// # Returns
    /// `false` if the course was not in the plan
    pub fn remove_course_from_plan(&mut self, plan_id: u32, course_id: &str) -> bool {
        let Some(index) = self
            .links
            .iter()
            .position(|link| link.plan_id == plan_id && link.course_id == course_id)
        else {
            return false;
        };
        self.links.remove(index);
        true
    }

    /// Course ids placed in a plan, in insertion order
    #[must_use]
    pub fn courses_for_plan(&self, plan_id: u32) -> Vec<&str> {
        self.links
            .iter()
            .filter(|link| link.plan_id == plan_id)
            .map(|link| link.course_id.as_str())
            .collect()
    }

    /// Drop every link of a plan, returning how many were removed
    pub fn clear_plan(&mut self, plan_id: u32) -> usize {
        let before = self.links.len();
        self.links.retain(|link| link.plan_id != plan_id);
        before - self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_list() {
        let mut links = PlanCourses::new();
        links.add_course_to_plan(1, "101");
        links.add_course_to_plan(1, "102");
        let added = links.add_course_to_plan(2, "101");
        assert_eq!(added.plan_id, 2);

        assert_eq!(links.courses_for_plan(1), vec!["101", "102"]);
        assert_eq!(links.courses_for_plan(2), vec!["101"]);
        assert!(links.courses_for_plan(3).is_empty());
    }

    #[test]
    fn test_remove_first_link_only() {
        let mut links = PlanCourses::new();
        links.add_course_to_plan(1, "101");
        links.add_course_to_plan(1, "101");

        assert!(links.remove_course_from_plan(1, "101"));
        assert_eq!(links.courses_for_plan(1), vec!["101"]);
        assert!(!links.remove_course_from_plan(1, "999"));
    }

    #[test]
    fn test_clear_plan() {
        let mut links = PlanCourses::new();
        links.add_course_to_plan(1, "101");
        links.add_course_to_plan(1, "102");
        links.add_course_to_plan(2, "101");

        assert_eq!(links.clear_plan(1), 2);
        assert_eq!(links.courses_for_plan(2), vec!["101"]);
    }
}
