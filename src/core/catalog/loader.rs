//! TOML loader for advising files
//!
//! An advising file lists catalog courses, degree requirements, advisors,
//! students and their plans:
//!
//! ```toml
//! [[courses]]
//! course_id = "101"
//! name = "Intro to Computer Science"
//! credits = 4
//! department = "Computer Science"
//! category = "Core"
//!
//! [[requirements]]
//! requirement_id = 1
//! version = "2024A"
//! required_course_ids = ["101"]
//! elective_categories = ["Humanities"]
//! total_credits = 12
//!
//! [[advisors]]
//! user_id = 1
//! name = "Jane Doe"
//! email = "jane.doe@example.com"
//! advisor_id = 1
//! department = "Computer Science"
//!
//! [[students]]
//! user_id = 201
//! name = "John Doe"
//! email = "john.doe@example.com"
//! student_id = 123
//! degree_program = "Computer Science"
//! advisor = 1
//!
//! [[plans]]
//! plan_id = 1
//! student = 201
//! requirement = 1
//! courses = ["101"]
//! submitted = true
//! ```

use super::CourseCatalog;
use crate::core::advising::{AdvisingOffice, SubmitOutcome};
use crate::core::models::{AcademicPlan, Course, DegreeRequirement, User};
use crate::{debug, info, warn};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawFile {
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    requirements: Vec<RawRequirement>,
    #[serde(default)]
    advisors: Vec<RawAdvisor>,
    #[serde(default)]
    students: Vec<RawStudent>,
    #[serde(default)]
    admins: Vec<RawAdmin>,
    #[serde(default)]
    plans: Vec<RawPlan>,
}

#[derive(Debug, Deserialize)]
struct RawRequirement {
    requirement_id: u32,
    version: String,
    #[serde(default)]
    required_course_ids: Vec<String>,
    #[serde(default)]
    elective_categories: Vec<String>,
    #[serde(default)]
    total_credits: f32,
}

#[derive(Debug, Deserialize)]
struct RawAdvisor {
    user_id: u32,
    name: String,
    email: String,
    advisor_id: u32,
    #[serde(default = "undeclared")]
    department: String,
}

#[derive(Debug, Deserialize)]
struct RawStudent {
    user_id: u32,
    name: String,
    email: String,
    student_id: u32,
    #[serde(default = "undeclared")]
    degree_program: String,
    #[serde(default)]
    current_credits: f32,
    advisor: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawAdmin {
    user_id: u32,
    name: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct RawPlan {
    plan_id: u32,
    student: u32,
    requirement: Option<u32>,
    #[serde(default)]
    customizations: String,
    #[serde(default = "draft")]
    progress: String,
    #[serde(default)]
    courses: Vec<String>,
    #[serde(default)]
    submitted: bool,
}

fn undeclared() -> String {
    "Undeclared".to_string()
}

fn draft() -> String {
    "Draft".to_string()
}

/// Everything loaded from an advising file
#[derive(Debug, Clone, Default)]
pub struct AdvisingData {
    /// Catalog courses
    pub catalog: CourseCatalog,
    /// Degree requirements by id
    pub requirements: BTreeMap<u32, DegreeRequirement>,
    /// Users, plans and review queues
    pub office: AdvisingOffice,
}

/// Load and parse an advising file
///
/// # Arguments
/// * `path` - Path to the TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if it references
/// unknown courses, requirements or users
pub fn load_advising_file<P: AsRef<Path>>(path: P) -> Result<AdvisingData, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let data = parse_advising_toml(&content)?;
    info!(
        "Loaded {} courses, {} requirements and {} plans from {}",
        data.catalog.len(),
        data.requirements.len(),
        data.office.plans().count(),
        path.display()
    );
    Ok(data)
}

/// Parse advising data from a TOML string
///
/// Plans flagged `submitted` are queued with the student's advisor; a plan
/// whose student has no advisor stays in draft and a warning is logged.
///
/// # Errors
/// Returns an error for invalid TOML, duplicate ids, or references to unknown
/// courses, requirements, students or advisors
pub fn parse_advising_toml(toml_str: &str) -> Result<AdvisingData, Box<dyn Error>> {
    let raw: RawFile = toml::from_str(toml_str)?;
    let mut data = AdvisingData::default();

    for course in raw.courses {
        let course_id = course.course_id.clone();
        if !data.catalog.add_course(course) {
            return Err(format!("Duplicate course id '{course_id}'").into());
        }
    }

    for req in raw.requirements {
        if let Some(unknown) = req
            .required_course_ids
            .iter()
            .find(|id| data.catalog.get(id).is_none())
        {
            warn!(
                "Requirement {} lists course '{unknown}' which is not in the catalog",
                req.requirement_id
            );
        }
        let requirement = DegreeRequirement::new(
            req.requirement_id,
            &req.version,
            req.required_course_ids,
            req.elective_categories,
            req.total_credits,
        );
        if data
            .requirements
            .insert(requirement.requirement_id, requirement)
            .is_some()
        {
            return Err(format!("Duplicate requirement id {}", req.requirement_id).into());
        }
    }

    for advisor in raw.advisors {
        let user = User::advisor(
            advisor.user_id,
            &advisor.name,
            &advisor.email,
            advisor.advisor_id,
            &advisor.department,
        );
        add_user(&mut data.office, user)?;
    }
    for admin in raw.admins {
        add_user(
            &mut data.office,
            User::admin(admin.user_id, &admin.name, &admin.email),
        )?;
    }

    let mut assignments = Vec::new();
    for student in raw.students {
        let user = User::student(
            student.user_id,
            &student.name,
            &student.email,
            student.student_id,
            &student.degree_program,
            student.current_credits,
        );
        add_user(&mut data.office, user)?;
        if let Some(advisor) = student.advisor {
            assignments.push((student.user_id, advisor));
        }
    }
    for (student_id, advisor_id) in assignments {
        if data.office.assign_advisor(student_id, advisor_id).is_noop() {
            return Err(format!("Student {student_id} references unknown advisor {advisor_id}").into());
        }
    }

    let mut submissions = Vec::new();
    for raw_plan in raw.plans {
        let plan_id = raw_plan.plan_id;
        let student_id = raw_plan.student;
        let plan = build_plan(&raw_plan, &data)?;
        if !data.office.insert_plan(student_id, plan) {
            return Err(format!(
                "Plan {plan_id}: duplicate plan id or unknown student {student_id}"
            )
            .into());
        }
        if raw_plan.submitted {
            submissions.push((student_id, plan_id));
        }
    }
    for (student_id, plan_id) in submissions {
        match data.office.submit_designated_plan(student_id, plan_id) {
            SubmitOutcome::Submitted { advisor_id, .. } => {
                debug!("Plan {plan_id} queued with advisor {advisor_id}");
            }
            other => warn!("Plan {plan_id} marked submitted but not queued: {other}"),
        }
    }

    Ok(data)
}

fn add_user(office: &mut AdvisingOffice, user: User) -> Result<(), String> {
    let user_id = user.user_id;
    if office.add_user(user) {
        Ok(())
    } else {
        Err(format!("Duplicate user id {user_id}"))
    }
}

fn build_plan(raw: &RawPlan, data: &AdvisingData) -> Result<AcademicPlan, String> {
    let plan_id = raw.plan_id;
    let mut plan = AcademicPlan::new(plan_id, "", &raw.customizations, &raw.progress);

    if let Some(requirement_id) = raw.requirement {
        let requirement = data
            .requirements
            .get(&requirement_id)
            .ok_or_else(|| format!("Plan {plan_id}: unknown requirement {requirement_id}"))?;
        plan.set_requirement(requirement.clone());
    }

    for course_id in &raw.courses {
        let course = data
            .catalog
            .get(course_id)
            .ok_or_else(|| format!("Plan {plan_id}: unknown course '{course_id}'"))?;
        plan.add_course(course.clone());
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::PlanStatus;

    const SAMPLE: &str = r#"
[[courses]]
course_id = "101"
name = "Intro to Computer Science"
credits = 6
department = "Computer Science"
category = "Core"

[[courses]]
course_id = "102"
name = "Algorithms"
credits = 5
department = "Computer Science"
category = "Core"

[[requirements]]
requirement_id = 1
version = "2024A"
required_course_ids = ["101", "102"]
elective_categories = ["Humanities"]
total_credits = 12

[[advisors]]
user_id = 1
name = "Jane Doe"
email = "jane.doe@example.com"
advisor_id = 1
department = "Computer Science"

[[students]]
user_id = 201
name = "John Doe"
email = "john.doe@example.com"
student_id = 123
degree_program = "Computer Science"
current_credits = 60
advisor = 1

[[plans]]
plan_id = 10
student = 201
requirement = 1
progress = "In Progress"
courses = ["101", "102"]
submitted = true
"#;

    #[test]
    fn test_parse_sample() {
        let data = parse_advising_toml(SAMPLE).unwrap();

        assert_eq!(data.catalog.len(), 2);
        assert!(data.requirements.contains_key(&1));

        let plan = data.office.plan(10).unwrap();
        assert_eq!(plan.degree_requirements_version, "2024A");
        assert_eq!(plan.course_count(), 2);
        assert!((plan.total_credits() - 11.0).abs() < f32::EPSILON);
        assert_eq!(plan.status, PlanStatus::PendingReview);
        assert_eq!(data.office.pending_plans(1), &[10]);
    }

    #[test]
    fn test_unknown_course_is_error() {
        let toml_str = r#"
[[students]]
user_id = 5
name = "A"
email = "a@example.com"
student_id = 5

[[plans]]
plan_id = 1
student = 5
courses = ["404"]
"#;
        let err = parse_advising_toml(toml_str).unwrap_err();
        assert!(err.to_string().contains("unknown course '404'"));
    }

    #[test]
    fn test_unknown_advisor_is_error() {
        let toml_str = r#"
[[students]]
user_id = 5
name = "A"
email = "a@example.com"
student_id = 5
advisor = 77
"#;
        assert!(parse_advising_toml(toml_str).is_err());
    }

    #[test]
    fn test_submitted_without_advisor_stays_draft() {
        let toml_str = r#"
[[students]]
user_id = 5
name = "A"
email = "a@example.com"
student_id = 5

[[plans]]
plan_id = 1
student = 5
submitted = true
"#;
        let data = parse_advising_toml(toml_str).unwrap();
        assert_eq!(data.office.plan(1).unwrap().status, PlanStatus::Draft);
    }

    #[test]
    fn test_duplicate_ids_are_errors() {
        let duplicate_course = r#"
[[courses]]
course_id = "101"
name = "Intro"
credits = 4
department = "CS"
category = "Core"

[[courses]]
course_id = "101"
name = "Intro again"
credits = 4
department = "CS"
category = "Core"
"#;
        let err = parse_advising_toml(duplicate_course).unwrap_err();
        assert!(err.to_string().contains("Duplicate course id '101'"));

        let duplicate_requirement = r#"
[[requirements]]
requirement_id = 1
version = "2024A"

[[requirements]]
requirement_id = 1
version = "2024B"
"#;
        let err = parse_advising_toml(duplicate_requirement).unwrap_err();
        assert!(err.to_string().contains("Duplicate requirement id 1"));

        let duplicate_user = r#"
[[advisors]]
user_id = 1
name = "Jane Doe"
email = "jane.doe@example.com"
advisor_id = 1

[[students]]
user_id = 1
name = "John Doe"
email = "john.doe@example.com"
student_id = 123
"#;
        let err = parse_advising_toml(duplicate_user).unwrap_err();
        assert!(err.to_string().contains("Duplicate user id 1"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(parse_advising_toml("[[courses]\nname = ").is_err());
    }
}
