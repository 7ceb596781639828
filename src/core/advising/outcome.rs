//! Workflow outcomes
//!
//! Expected unhappy paths (no advisor, nothing queued, unknown ids) are reported
//! as values, never as errors, so callers can tell "did nothing" from "failed".

use std::fmt;

/// Result of assigning an advisor to a student
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The student now has the advisor
    Assigned,
    /// Student or advisor id did not resolve
    NotFound(String),
}

impl AssignOutcome {
    /// Whether nothing changed
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl fmt::Display for AssignOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned => write!(f, "advisor assigned"),
            Self::NotFound(what) => write!(f, "not found: {what}"),
        }
    }
}

/// Result of a student submitting a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The plan is queued with the advisor
    Submitted {
        /// Queued plan
        plan_id: u32,
        /// Advisor (user id) holding the plan
        advisor_id: u32,
    },
    /// The student has no advisor assigned
    NoAdvisor,
    /// The student has no plan that can be submitted
    NoPlans,
    /// Student, advisor or plan id did not resolve
    NotFound(String),
}

impl SubmitOutcome {
    /// Whether nothing changed
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        !matches!(self, Self::Submitted { .. })
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submitted {
                plan_id,
                advisor_id,
            } => write!(f, "plan {plan_id} submitted to advisor {advisor_id}"),
            Self::NoAdvisor => write!(f, "no advisor assigned"),
            Self::NoPlans => write!(f, "no plans to submit"),
            Self::NotFound(what) => write!(f, "not found: {what}"),
        }
    }
}

/// Result of an advisor reviewing a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The plan validated and was approved
    Approved,
    /// The plan failed validation and was denied
    Denied,
    /// The plan is not in this advisor's queue
    NotPending,
    /// Advisor or plan id did not resolve
    NotFound(String),
}

impl ReviewOutcome {
    /// Whether nothing changed
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::NotPending | Self::NotFound(_))
    }
}

impl fmt::Display for ReviewOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::Denied => write!(f, "denied"),
            Self::NotPending => write!(f, "not pending review"),
            Self::NotFound(what) => write!(f, "not found: {what}"),
        }
    }
}

/// Result of a student editing a plan's course list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The course list changed
    Updated,
    /// The plan is under review or approved
    Locked,
    /// Plan or course did not resolve
    NotFound(String),
}

impl EditOutcome {
    /// Whether nothing changed
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        !matches!(self, Self::Updated)
    }
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => write!(f, "plan updated"),
            Self::Locked => write!(f, "plan is locked"),
            Self::NotFound(what) => write!(f, "not found: {what}"),
        }
    }
}
