//! Advising office: users, plans and the review queue
//!
//! Users and plans live in id-keyed maps. A student refers to its advisor and
//! plans by id, an advisor to its pending plans and students by id.

use super::outcome::{AssignOutcome, EditOutcome, ReviewOutcome, SubmitOutcome};
use crate::core::models::{AcademicPlan, Course, DegreeRequirement, PlanStatus, User, UserRole};
use crate::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Owns every user and plan taking part in advising
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisingOffice {
    users: BTreeMap<u32, User>,
    plans: BTreeMap<u32, AcademicPlan>,
    last_plan_id: u32,
}

impl AdvisingOffice {
    /// Create an empty office
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user
    ///
    /// # Returns
    /// `true` if the user was added, `false` if the id is already taken
    pub fn add_user(&mut self, user: User) -> bool {
        if self.users.contains_key(&user.user_id) {
            return false;
        }
        self.users.insert(user.user_id, user);
        true
    }

    /// Look up a user
    #[must_use]
    pub fn user(&self, user_id: u32) -> Option<&User> {
        self.users.get(&user_id)
    }

    /// Look up a user for mutation
    pub fn user_mut(&mut self, user_id: u32) -> Option<&mut User> {
        self.users.get_mut(&user_id)
    }

    /// All users ordered by id
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Look up a plan
    #[must_use]
    pub fn plan(&self, plan_id: u32) -> Option<&AcademicPlan> {
        self.plans.get(&plan_id)
    }

    /// Look up a plan for mutation
    pub fn plan_mut(&mut self, plan_id: u32) -> Option<&mut AcademicPlan> {
        self.plans.get_mut(&plan_id)
    }

    /// All plans ordered by id
    pub fn plans(&self) -> impl Iterator<Item = &AcademicPlan> {
        self.plans.values()
    }

    /// Plans owned by a student, in creation order
    #[must_use]
    pub fn plans_for_student(&self, student_id: u32) -> Vec<&AcademicPlan> {
        self.user(student_id)
            .and_then(User::as_student)
            .map(|profile| {
                profile
                    .plan_ids
                    .iter()
                    .filter_map(|id| self.plans.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Student (user id) owning a plan
    #[must_use]
    pub fn owner_of(&self, plan_id: u32) -> Option<u32> {
        self.users
            .values()
            .find(|user| {
                user.as_student()
                    .is_some_and(|profile| profile.plan_ids.contains(&plan_id))
            })
            .map(|user| user.user_id)
    }

    /// Plans queued with an advisor, oldest first; empty for non-advisors
    #[must_use]
    pub fn pending_plans(&self, advisor_id: u32) -> &[u32] {
        self.user(advisor_id)
            .and_then(User::as_advisor)
            .map(|profile| profile.pending_plans.as_slice())
            .unwrap_or_default()
    }

    /// Assign an advisor to a student
    ///
    /// The student leaves the roster of any previous advisor.
    pub fn assign_advisor(&mut self, student_id: u32, advisor_id: u32) -> AssignOutcome {
        if !self.user(advisor_id).is_some_and(User::is_advisor) {
            info!("No advisor with id {advisor_id}");
            return AssignOutcome::NotFound(format!("advisor {advisor_id}"));
        }
        let Some(profile) = self.users.get_mut(&student_id).and_then(User::as_student_mut) else {
            info!("No student with id {student_id}");
            return AssignOutcome::NotFound(format!("student {student_id}"));
        };
        let previous = profile.advisor_id.replace(advisor_id);

        if let Some(old) = previous.filter(|old| *old != advisor_id) {
            if let Some(roster) = self.users.get_mut(&old).and_then(User::as_advisor_mut) {
                roster.student_ids.retain(|id| *id != student_id);
            }
        }
        if let Some(roster) = self.users.get_mut(&advisor_id).and_then(User::as_advisor_mut) {
            if !roster.student_ids.contains(&student_id) {
                roster.student_ids.push(student_id);
            }
        }
        debug!("Student {student_id} assigned to advisor {advisor_id}");
        AssignOutcome::Assigned
    }

    /// Create a draft plan for a student
    ///
    /// # Returns
    /// The new plan id, or `None` if `student_id` is not a student
    pub fn create_plan(
        &mut self,
        student_id: u32,
        requirement: Option<DegreeRequirement>,
    ) -> Option<u32> {
        if !self.user(student_id).is_some_and(User::is_student) {
            info!("Cannot create a plan: no student with id {student_id}");
            return None;
        }
        let plan_id = self.last_plan_id + 1;
        let mut plan = AcademicPlan::new(plan_id, "", "", "Draft");
        if let Some(requirement) = requirement {
            plan.set_requirement(requirement);
        }
        self.insert_plan(student_id, plan).then_some(plan_id)
    }

    /// Add an existing plan to a student
    ///
    /// # Returns
    /// `false` if `student_id` is not a student or the plan id is taken
    pub fn insert_plan(&mut self, student_id: u32, plan: AcademicPlan) -> bool {
        if self.plans.contains_key(&plan.plan_id) {
            return false;
        }
        let Some(profile) = self.users.get_mut(&student_id).and_then(User::as_student_mut) else {
            return false;
        };
        profile.plan_ids.push(plan.plan_id);
        self.last_plan_id = self.last_plan_id.max(plan.plan_id);
        self.plans.insert(plan.plan_id, plan);
        true
    }

    /// Delete a plan, detaching it from its owner and any review queue
    ///
    /// # Returns
    /// `true` if the plan existed
    pub fn delete_plan(&mut self, plan_id: u32) -> bool {
        if self.plans.remove(&plan_id).is_none() {
            info!("Plan {plan_id} not found; nothing to delete");
            return false;
        }
        for user in self.users.values_mut() {
            match &mut user.role {
                UserRole::Student(profile) => profile.plan_ids.retain(|id| *id != plan_id),
                UserRole::Advisor(profile) => profile.pending_plans.retain(|id| *id != plan_id),
                UserRole::Admin => {}
            }
        }
        true
    }

    /// Submit the student's first draft plan to the assigned advisor
    ///
    /// Without an advisor or a draft plan nothing changes.
    pub fn submit_plan_for_approval(&mut self, student_id: u32) -> SubmitOutcome {
        let Some(profile) = self.user(student_id).and_then(User::as_student) else {
            info!("No student with id {student_id}; nothing to submit");
            return SubmitOutcome::NotFound(format!("student {student_id}"));
        };
        let Some(advisor_id) = profile.advisor_id else {
            info!("Student {student_id} has no advisor assigned; plan not submitted");
            return SubmitOutcome::NoAdvisor;
        };
        let draft = profile.plan_ids.iter().copied().find(|id| {
            self.plans
                .get(id)
                .is_some_and(|plan| plan.status == PlanStatus::Draft)
        });
        let Some(plan_id) = draft else {
            info!("Student {student_id} has no draft plan to submit");
            return SubmitOutcome::NoPlans;
        };
        self.enqueue(plan_id, advisor_id)
    }

    /// Submit a specific plan of the student to the assigned advisor
    ///
    /// Draft and denied plans can be submitted; a plan already waiting in the
    /// advisor's queue is reported as submitted without being queued twice.
    pub fn submit_designated_plan(&mut self, student_id: u32, plan_id: u32) -> SubmitOutcome {
        let Some(profile) = self.user(student_id).and_then(User::as_student) else {
            info!("No student with id {student_id}; nothing to submit");
            return SubmitOutcome::NotFound(format!("student {student_id}"));
        };
        if !profile.plan_ids.contains(&plan_id) {
            info!("Plan {plan_id} does not belong to student {student_id}");
            return SubmitOutcome::NotFound(format!("plan {plan_id}"));
        }
        let Some(advisor_id) = profile.advisor_id else {
            info!("Student {student_id} has no advisor assigned; plan not submitted");
            return SubmitOutcome::NoAdvisor;
        };
        let Some(plan) = self.plans.get(&plan_id) else {
            return SubmitOutcome::NotFound(format!("plan {plan_id}"));
        };
        let already_queued = plan.status == PlanStatus::PendingReview
            && self.pending_plans(advisor_id).contains(&plan_id);
        if !plan.status.is_editable() && !already_queued {
            info!("Plan {plan_id} is {}; nothing to submit", plan.status);
            return SubmitOutcome::NoPlans;
        }
        self.enqueue(plan_id, advisor_id)
    }

    fn enqueue(&mut self, plan_id: u32, advisor_id: u32) -> SubmitOutcome {
        let Some(queue) = self.users.get_mut(&advisor_id).and_then(User::as_advisor_mut) else {
            info!("Assigned advisor {advisor_id} not found; plan {plan_id} not submitted");
            return SubmitOutcome::NotFound(format!("advisor {advisor_id}"));
        };
        if !queue.pending_plans.contains(&plan_id) {
            queue.pending_plans.push(plan_id);
        }
        if let Some(plan) = self.plans.get_mut(&plan_id) {
            plan.status = PlanStatus::PendingReview;
            plan.is_approved = false;
        }
        info!("Plan {plan_id} submitted to advisor {advisor_id}");
        SubmitOutcome::Submitted {
            plan_id,
            advisor_id,
        }
    }

    /// Review a plan waiting in an advisor's queue
    ///
    /// The plan is approved if it validates and denied otherwise; either way it
    /// leaves the queue. Plans not in the queue are left untouched.
    pub fn review_plan(&mut self, advisor_id: u32, plan_id: u32) -> ReviewOutcome {
        let Some(queue) = self.users.get_mut(&advisor_id).and_then(User::as_advisor_mut) else {
            info!("No advisor with id {advisor_id}; nothing to review");
            return ReviewOutcome::NotFound(format!("advisor {advisor_id}"));
        };
        let Some(pos) = queue.pending_plans.iter().position(|id| *id == plan_id) else {
            info!("Plan {plan_id} is not pending with advisor {advisor_id}");
            return ReviewOutcome::NotPending;
        };
        let Some(plan) = self.plans.get_mut(&plan_id) else {
            queue.pending_plans.remove(pos);
            info!("Plan {plan_id} no longer exists; dropped from advisor {advisor_id}'s queue");
            return ReviewOutcome::NotFound(format!("plan {plan_id}"));
        };

        let outcome = if plan.validate_plan() {
            plan.approve();
            ReviewOutcome::Approved
        } else {
            plan.deny();
            ReviewOutcome::Denied
        };
        queue.pending_plans.remove(pos);
        info!("Advisor {advisor_id} reviewed plan {plan_id}: {outcome}");
        outcome
    }

    /// Review every plan in an advisor's queue, oldest first
    pub fn review_all(&mut self, advisor_id: u32) -> Vec<(u32, ReviewOutcome)> {
        let queued = self.pending_plans(advisor_id).to_vec();
        queued
            .into_iter()
            .map(|plan_id| (plan_id, self.review_plan(advisor_id, plan_id)))
            .collect()
    }

    /// Approve a plan directly, bypassing the review queue
    ///
    /// # Returns
    /// `false` if the plan does not exist
    pub fn approve_plan(&mut self, plan_id: u32) -> bool {
        self.plans.get_mut(&plan_id).is_some_and(|plan| {
            plan.approve();
            true
        })
    }

    /// Deny a plan directly, bypassing the review queue
    ///
    /// # Returns
    /// `false` if the plan does not exist
    pub fn deny_plan(&mut self, plan_id: u32) -> bool {
        self.plans.get_mut(&plan_id).is_some_and(|plan| {
            plan.deny();
            true
        })
    }

    /// Submit a plan and have the student's advisor review it right away
    pub fn review_and_decide(&mut self, student_id: u32, plan_id: u32) -> ReviewOutcome {
        match self.submit_designated_plan(student_id, plan_id) {
            SubmitOutcome::Submitted { advisor_id, .. } => self.review_plan(advisor_id, plan_id),
            SubmitOutcome::NoAdvisor => {
                info!("No advisor assigned to review plan {plan_id}");
                ReviewOutcome::NotFound(format!("advisor for student {student_id}"))
            }
            SubmitOutcome::NoPlans => ReviewOutcome::NotPending,
            SubmitOutcome::NotFound(what) => ReviewOutcome::NotFound(what),
        }
    }

    /// Add a course to a plan the student may still edit
    pub fn add_course_to_plan(&mut self, plan_id: u32, course: Course) -> EditOutcome {
        let Some(plan) = self.plans.get_mut(&plan_id) else {
            info!("Plan {plan_id} not found; course {} not added", course.course_id);
            return EditOutcome::NotFound(format!("plan {plan_id}"));
        };
        if !plan.status.is_editable() {
            info!("Plan {plan_id} is {}; course not added", plan.status);
            return EditOutcome::Locked;
        }
        plan.add_course(course);
        EditOutcome::Updated
    }

    /// Remove the first matching course from a plan the student may still edit
    pub fn remove_course_from_plan(&mut self, plan_id: u32, course_id: &str) -> EditOutcome {
        let Some(plan) = self.plans.get_mut(&plan_id) else {
            info!("Plan {plan_id} not found; course {course_id} not removed");
            return EditOutcome::NotFound(format!("plan {plan_id}"));
        };
        if !plan.status.is_editable() {
            info!("Plan {plan_id} is {}; course not removed", plan.status);
            return EditOutcome::Locked;
        }
        if plan.remove_course(course_id) {
            EditOutcome::Updated
        } else {
            info!("Course {course_id} not in plan {plan_id}");
            EditOutcome::NotFound(format!("course {course_id}"))
        }
    }
}
