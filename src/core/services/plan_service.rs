//! Academic plan service
//!
//! Keeps plans, their requirement ids and their course links together so a
//! surrounding storage layer only has to persist flat records. This registry is
//! separate from [`AdvisingOffice`]; a plan enters the review workflow through
//! [`AcademicPlanService::publish_to_office`].

use super::plan_courses::PlanCourses;
use crate::core::advising::AdvisingOffice;
use crate::core::catalog::CourseCatalog;
use crate::core::models::{AcademicPlan, DegreeRequirement};
use crate::{debug, error, info};
use std::collections::BTreeMap;

/// Registry of plans and the requirements they target
#[derive(Debug, Clone, Default)]
pub struct AcademicPlanService {
    plans: Vec<AcademicPlan>,
    plan_requirements: BTreeMap<u32, u32>,
    requirements: BTreeMap<u32, DegreeRequirement>,
    plan_courses: PlanCourses,
    last_plan_id: u32,
}

impl AcademicPlanService {
    /// Create an empty service
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a requirement available to plans, replacing any with the same id
    pub fn register_requirement(&mut self, requirement: DegreeRequirement) {
        self.requirements
            .insert(requirement.requirement_id, requirement);
    }

    fn generate_plan_id(&mut self) -> u32 {
        self.last_plan_id += 1;
        self.last_plan_id
    }

    /// Create a draft plan, optionally targeting a registered requirement
    ///
    /// An unknown requirement id is recorded but no requirement is attached.
    pub fn create_plan(&mut self, requirement_id: Option<u32>) -> &AcademicPlan {
        let plan_id = self.generate_plan_id();
        let mut plan = AcademicPlan::new(plan_id, "", "", "Draft");
        if let Some(requirement_id) = requirement_id {
            self.attach_requirement(&mut plan, requirement_id);
        }
        self.plans.push(plan);
        &self.plans[self.plans.len() - 1]
    }

    fn attach_requirement(&mut self, plan: &mut AcademicPlan, requirement_id: u32) {
        self.plan_requirements.insert(plan.plan_id, requirement_id);
        match self.requirements.get(&requirement_id) {
            Some(requirement) => plan.set_requirement(requirement.clone()),
            None => debug!(
                "Plan {}: requirement {requirement_id} is not registered",
                plan.plan_id
            ),
        }
    }

    /// Look up a plan
    #[must_use]
    pub fn get_plan(&self, plan_id: u32) -> Option<&AcademicPlan> {
        self.plans.iter().find(|plan| plan.plan_id == plan_id)
    }

    /// Requirement id a plan targets
    #[must_use]
    pub fn requirement_id_of(&self, plan_id: u32) -> Option<u32> {
        self.plan_requirements.get(&plan_id).copied()
    }

    /// Update a plan's requirement and/or approval flag
    ///
    /// # Returns
    /// The updated plan, or `None` if it does not exist
    pub fn update_plan(
        &mut self,
        plan_id: u32,
        requirement_id: Option<u32>,
        is_approved: Option<bool>,
    ) -> Option<&AcademicPlan> {
        let index = self.plans.iter().position(|plan| plan.plan_id == plan_id)?;
        let mut plan = self.plans.remove(index);
        if let Some(requirement_id) = requirement_id {
            self.attach_requirement(&mut plan, requirement_id);
        }
        match is_approved {
            Some(true) => plan.approve(),
            Some(false) => plan.deny(),
            None => {}
        }
        self.plans.insert(index, plan);
        self.plans.get(index)
    }

    /// Delete a plan together with its course links
    ///
    /// # Returns
    /// `false` if the plan does not exist
    pub fn delete_plan(&mut self, plan_id: u32) -> bool {
        let removed_links = self.plan_courses.clear_plan(plan_id);
        let Some(index) = self.plans.iter().position(|plan| plan.plan_id == plan_id) else {
            return false;
        };
        self.plans.remove(index);
        self.plan_requirements.remove(&plan_id);
        debug!("Deleted plan {plan_id} and {removed_links} course links");
        true
    }

    /// Link a catalog course to a plan
    ///
    /// # Returns
    /// `false` if the plan does not exist
    pub fn add_course_to_plan(&mut self, plan_id: u32, course_id: &str) -> bool {
        if self.get_plan(plan_id).is_none() {
            info!("Plan {plan_id} not found; course {course_id} not linked");
            return false;
        }
        self.plan_courses.add_course_to_plan(plan_id, course_id);
        true
    }

    /// Unlink the first matching course from a plan
    pub fn remove_course_from_plan(&mut self, plan_id: u32, course_id: &str) -> bool {
        self.plan_courses.remove_course_from_plan(plan_id, course_id)
    }

    /// Course ids linked to a plan
    #[must_use]
    pub fn courses_for_plan(&self, plan_id: u32) -> Vec<&str> {
        self.plan_courses.courses_for_plan(plan_id)
    }

    /// Recompute a plan's credit total from its course links
    ///
    /// The plan's course list is rebuilt from the links first, so the cached
    /// total always equals the sum over its courses. Links to courses missing
    /// from the catalog are skipped.
    ///
    /// # Returns
    /// The new total, or `None` if the plan does not exist
    pub fn recalculate_total_credits(
        &mut self,
        plan_id: u32,
        catalog: &CourseCatalog,
    ) -> Option<f32> {
        if self.sync_courses(plan_id, catalog).is_none() {
            error!("Plan {plan_id} not found");
            return None;
        }
        self.get_plan(plan_id).map(AcademicPlan::total_credits)
    }

    /// Rebuild a plan's course list from its links so it can be validated
    ///
    /// # Returns
    /// The number of courses placed in the plan, or `None` if it does not exist
    pub fn sync_courses(&mut self, plan_id: u32, catalog: &CourseCatalog) -> Option<usize> {
        let courses = catalog.resolve(self.plan_courses.courses_for_plan(plan_id));
        let plan = self.plans.iter_mut().find(|plan| plan.plan_id == plan_id)?;
        plan.replace_courses(courses);
        Some(plan.course_count())
    }

    /// Hand a plan over to the advising office so it can be submitted and reviewed
    ///
    /// The course list is synced from the links before a copy is inserted for
    /// `student_id`. The service keeps its own record.
    ///
    /// # Returns
    /// `false` if the plan does not exist here, `student_id` is not a student,
    /// or the office already holds a plan with the same id
    pub fn publish_to_office(
        &mut self,
        plan_id: u32,
        student_id: u32,
        catalog: &CourseCatalog,
        office: &mut AdvisingOffice,
    ) -> bool {
        if self.sync_courses(plan_id, catalog).is_none() {
            info!("Plan {plan_id} not found; nothing to publish");
            return false;
        }
        let Some(plan) = self.get_plan(plan_id).cloned() else {
            return false;
        };
        let published = office.insert_plan(student_id, plan);
        if published {
            debug!("Plan {plan_id} published to student {student_id}");
        } else {
            info!("Plan {plan_id} not published: unknown student {student_id} or id already taken");
        }
        published
    }
}
