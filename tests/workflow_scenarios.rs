//! End-to-end plan validation and advisor review scenarios

use nu_advisor::advising::{AdvisingOffice, ReviewOutcome, SubmitOutcome};
use nu_advisor::models::{AcademicPlan, Course, DegreeRequirement, PlanStatus, User};

const ADVISOR: u32 = 1;
const STUDENT: u32 = 201;

fn requirement() -> DegreeRequirement {
    DegreeRequirement::new(1, "2024A", ["101", "102"], ["Humanities"], 12.0)
}

fn intro() -> Course {
    Course::new(101, "Intro to Computer Science", 6.0, "CS", "Core")
}

fn algorithms() -> Course {
    Course::new(102, "Algorithms", 5.0, "CS", "Core")
}

fn poetry() -> Course {
    Course::new(201, "Poetry", 4.0, "English", "Humanities")
}

fn plan_with(plan_id: u32, courses: &[Course]) -> AcademicPlan {
    let mut plan = AcademicPlan::new(plan_id, "", "", "Draft").with_requirement(requirement());
    for course in courses {
        plan.add_course(course.clone());
    }
    plan
}

fn office_with_student(advisor: bool) -> AdvisingOffice {
    let mut office = AdvisingOffice::new();
    office.add_user(User::advisor(
        ADVISOR,
        "Jane Doe",
        "jane.doe@example.com",
        1,
        "Computer Science",
    ));
    office.add_user(User::student(
        STUDENT,
        "John Doe",
        "john.doe@example.com",
        123,
        "Computer Science",
        60.0,
    ));
    if advisor {
        assert!(!office.assign_advisor(STUDENT, ADVISOR).is_noop());
    }
    office
}

#[test]
fn credit_shortfall_fails_validation() {
    let plan = plan_with(1, &[intro(), algorithms()]);
    assert!((plan.calculate_total_credits() - 11.0).abs() < f32::EPSILON);
    assert!(!plan.validate_plan());
}

#[test]
fn adding_humanities_elective_passes_validation() {
    let mut plan = plan_with(1, &[intro(), algorithms()]);
    plan.add_course(poetry());

    assert!((plan.calculate_total_credits() - 15.0).abs() < f32::EPSILON);
    assert!(plan.validate_plan());
}

#[test]
fn removing_required_course_fails_validation() {
    let mut plan = plan_with(1, &[intro(), algorithms(), poetry()]);
    assert!(plan.remove_course("102"));

    assert!((plan.calculate_total_credits() - 10.0).abs() < f32::EPSILON);
    assert!(!plan.validate_plan());
}

#[test]
fn review_approves_valid_and_denies_invalid() {
    let mut office = office_with_student(true);
    office.insert_plan(STUDENT, plan_with(1, &[intro(), algorithms(), poetry()]));
    office.insert_plan(STUDENT, plan_with(2, &[intro(), algorithms()]));

    for plan_id in [1, 2] {
        assert!(matches!(
            office.submit_designated_plan(STUDENT, plan_id),
            SubmitOutcome::Submitted { advisor_id: ADVISOR, .. }
        ));
    }
    assert_eq!(office.pending_plans(ADVISOR), &[1, 2]);

    assert_eq!(office.review_plan(ADVISOR, 1), ReviewOutcome::Approved);
    assert!(office.plan(1).unwrap().is_approved);
    assert_eq!(office.pending_plans(ADVISOR), &[2]);

    assert_eq!(office.review_plan(ADVISOR, 2), ReviewOutcome::Denied);
    let denied = office.plan(2).unwrap();
    assert!(!denied.is_approved);
    assert_eq!(denied.status, PlanStatus::Denied);
    assert!(office.pending_plans(ADVISOR).is_empty());
}

#[test]
fn submitting_without_advisor_changes_nothing() {
    let mut office = office_with_student(false);
    let plan_id = office.create_plan(STUDENT, Some(requirement())).unwrap();
    let before = office.clone();

    assert_eq!(office.submit_plan_for_approval(STUDENT), SubmitOutcome::NoAdvisor);

    assert!(office.pending_plans(ADVISOR).is_empty());
    assert_eq!(office.plan(plan_id).unwrap().status, PlanStatus::Draft);
    assert_eq!(
        office.user(ADVISOR).unwrap().as_advisor(),
        before.user(ADVISOR).unwrap().as_advisor()
    );
}

#[test]
fn credit_sum_counts_duplicates_and_empty_is_zero() {
    let empty = plan_with(1, &[]);
    assert!(empty.calculate_total_credits().abs() < f32::EPSILON);
    assert!(requirement().calculate_credits(&[]).abs() < f32::EPSILON);

    let doubled = [intro(), intro(), poetry()];
    let plan = plan_with(2, &doubled);
    assert!((plan.calculate_total_credits() - 16.0).abs() < f32::EPSILON);
    assert!((requirement().calculate_credits(&doubled) - 16.0).abs() < f32::EPSILON);
}

#[test]
fn threshold_is_inclusive() {
    let at_threshold = plan_with(
        1,
        &[
            intro(),
            algorithms(),
            Course::new(301, "Ethics", 1.0, "Philosophy", "Humanities"),
        ],
    );
    assert!((at_threshold.calculate_total_credits() - 12.0).abs() < f32::EPSILON);
    assert!(at_threshold.validate_plan());

    let one_short = plan_with(1, &[intro(), algorithms()]);
    assert!(!one_short.validate_plan());
}

#[test]
fn unrelated_course_never_changes_verdict() {
    let yoga = Course::new(900, "Yoga", 1.0, "PE", "Wellness");

    let mut valid = plan_with(1, &[intro(), algorithms(), poetry()]);
    valid.add_course(yoga.clone());
    assert!(valid.validate_plan());

    let mut missing = plan_with(2, &[intro(), poetry(), poetry()]);
    missing.add_course(yoga);
    assert!(!missing.validate_plan());
}

#[test]
fn duplicated_required_course_still_validates() {
    let plan = plan_with(1, &[intro(), intro(), algorithms()]);
    assert!(plan.validate_plan());
}

#[test]
fn approve_and_deny_are_last_write_wins() {
    let mut office = office_with_student(true);
    office.insert_plan(STUDENT, plan_with(1, &[intro()]));

    assert!(office.approve_plan(1));
    assert!(office.approve_plan(1));
    assert!(office.plan(1).unwrap().is_approved);

    assert!(office.deny_plan(1));
    assert!(!office.plan(1).unwrap().is_approved);

    assert!(!office.approve_plan(99));
}

#[test]
fn reviewed_plan_always_leaves_queue() {
    let mut office = office_with_student(true);
    office.insert_plan(STUDENT, plan_with(1, &[intro()]));
    office.submit_designated_plan(STUDENT, 1);

    let outcome = office.review_plan(ADVISOR, 1);
    assert_eq!(outcome, ReviewOutcome::Denied);
    assert!(!office.pending_plans(ADVISOR).contains(&1));

    assert_eq!(office.review_plan(ADVISOR, 1), ReviewOutcome::NotPending);
}

#[test]
fn denied_plan_can_be_fixed_and_resubmitted() {
    let mut office = office_with_student(true);
    office.insert_plan(STUDENT, plan_with(1, &[intro(), algorithms()]));

    assert_eq!(office.review_and_decide(STUDENT, 1), ReviewOutcome::Denied);
    assert!(!office.add_course_to_plan(1, poetry()).is_noop());
    assert_eq!(office.review_and_decide(STUDENT, 1), ReviewOutcome::Approved);

    assert!(office.add_course_to_plan(1, poetry()).is_noop());
}
