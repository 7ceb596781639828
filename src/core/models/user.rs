//! System user model
//!
//! Students, advisors and admins share one record; role-specific data lives in
//! the [`UserRole`] variant. Relations between users and plans are stored as ids.

use serde::{Deserialize, Serialize};

/// Student-specific data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Student number
    pub student_id: u32,
    /// Declared program (e.g., "Computer Science")
    pub degree_program: String,
    /// Credits already earned
    pub current_credits: f32,
    /// Assigned advisor (user id)
    pub advisor_id: Option<u32>,
    /// Owned plans, in creation order
    pub plan_ids: Vec<u32>,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            student_id: 0,
            degree_program: "Undeclared".to_string(),
            current_credits: 0.0,
            advisor_id: None,
            plan_ids: Vec::new(),
        }
    }
}

/// Advisor-specific data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorProfile {
    /// Advisor number
    pub advisor_id: u32,
    /// Department (e.g., "Computer Science")
    pub department: String,
    /// Plans submitted and awaiting review, oldest first
    pub pending_plans: Vec<u32>,
    /// Advised students (user ids)
    pub student_ids: Vec<u32>,
}

impl Default for AdvisorProfile {
    fn default() -> Self {
        Self {
            advisor_id: 0,
            department: "Undeclared".to_string(),
            pending_plans: Vec::new(),
            student_ids: Vec::new(),
        }
    }
}

/// Role of a system user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UserRole {
    /// Plans courses and submits plans
    Student(StudentProfile),
    /// Reviews submitted plans
    Advisor(AdvisorProfile),
    /// Administrative account
    Admin,
}

/// A user of the advising system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub user_id: u32,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Role and role-specific data
    pub role: UserRole,
}

impl User {
    /// Create a user with an explicit role
    #[must_use]
    pub fn new(user_id: u32, name: &str, email: &str, role: UserRole) -> Self {
        Self {
            user_id,
            name: name.to_string(),
            email: email.to_string(),
            role,
        }
    }

    /// Create a student without an advisor or plans
    #[must_use]
    pub fn student(
        user_id: u32,
        name: &str,
        email: &str,
        student_id: u32,
        degree_program: &str,
        current_credits: f32,
    ) -> Self {
        Self::new(
            user_id,
            name,
            email,
            UserRole::Student(StudentProfile {
                student_id,
                degree_program: degree_program.to_string(),
                current_credits,
                ..StudentProfile::default()
            }),
        )
    }

    /// Create an advisor with an empty queue and roster
    #[must_use]
    pub fn advisor(user_id: u32, name: &str, email: &str, advisor_id: u32, department: &str) -> Self {
        Self::new(
            user_id,
            name,
            email,
            UserRole::Advisor(AdvisorProfile {
                advisor_id,
                department: department.to_string(),
                ..AdvisorProfile::default()
            }),
        )
    }

    /// Create an admin
    #[must_use]
    pub fn admin(user_id: u32, name: &str, email: &str) -> Self {
        Self::new(user_id, name, email, UserRole::Admin)
    }

    /// Role label ("Student", "Advisor", "Admin")
    #[must_use]
    pub const fn role_name(&self) -> &'static str {
        match self.role {
            UserRole::Student(_) => "Student",
            UserRole::Advisor(_) => "Advisor",
            UserRole::Admin => "Admin",
        }
    }

    /// Whether the user is a student
    #[must_use]
    pub const fn is_student(&self) -> bool {
        matches!(self.role, UserRole::Student(_))
    }

    /// Whether the user is an advisor
    #[must_use]
    pub const fn is_advisor(&self) -> bool {
        matches!(self.role, UserRole::Advisor(_))
    }

    /// Student data, if the user is a student
    #[must_use]
    pub const fn as_student(&self) -> Option<&StudentProfile> {
        match &self.role {
            UserRole::Student(profile) => Some(profile),
            _ => None,
        }
    }

    /// Mutable student data, if the user is a student
    pub fn as_student_mut(&mut self) -> Option<&mut StudentProfile> {
        match &mut self.role {
            UserRole::Student(profile) => Some(profile),
            _ => None,
        }
    }

    /// Advisor data, if the user is an advisor
    #[must_use]
    pub const fn as_advisor(&self) -> Option<&AdvisorProfile> {
        match &self.role {
            UserRole::Advisor(profile) => Some(profile),
            _ => None,
        }
    }

    /// Mutable advisor data, if the user is an advisor
    pub fn as_advisor_mut(&mut self) -> Option<&mut AdvisorProfile> {
        match &mut self.role {
            UserRole::Advisor(profile) => Some(profile),
            _ => None,
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new(0, "Unknown", "no-email@example.com", UserRole::Admin)
    }
}
