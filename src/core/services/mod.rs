//! Plan bookkeeping services used by the storage-facing layer

pub mod plan_courses;
pub mod plan_service;

pub use plan_courses::{PlanCourse, PlanCourses};
pub use plan_service::AcademicPlanService;
