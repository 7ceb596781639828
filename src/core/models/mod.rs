//! Data models for `NuAdvisor`

pub mod course;
pub mod plan;
pub mod requirement;
pub mod user;

pub use course::Course;
pub use plan::{AcademicPlan, PlanStatus};
pub use requirement::{DegreeRequirement, RequirementCourse};
pub use user::{AdvisorProfile, StudentProfile, User, UserRole};
