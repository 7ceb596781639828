//! Course catalog and advising file loading

pub mod loader;

pub use loader::{load_advising_file, parse_advising_toml, AdvisingData};

use crate::core::models::Course;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog courses indexed by course id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseCatalog {
    courses: BTreeMap<String, Course>,
}

impl CourseCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course
    ///
    /// # Returns
    /// `true` if the course was added, `false` if its id is already present
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.courses.contains_key(&course.course_id) {
            return false;
        }
        self.courses.insert(course.course_id.clone(), course);
        true
    }

    /// Look up a course by id
    #[must_use]
    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }

    /// Resolve ids to courses, skipping unknown ids
    #[must_use]
    pub fn resolve<'a, I>(&self, course_ids: I) -> Vec<Course>
    where
        I: IntoIterator<Item = &'a str>,
    {
        course_ids
            .into_iter()
            .filter_map(|id| self.get(id).cloned())
            .collect()
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All courses ordered by id
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }
}
