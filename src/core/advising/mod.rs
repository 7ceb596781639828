//! Advisor review workflow
//!
//! A plan moves `Draft -> PendingReview -> Approved | Denied`. Students submit,
//! advisors review from their pending queue, and admins may override directly.

pub mod office;
pub mod outcome;

pub use office::AdvisingOffice;
pub use outcome::{AssignOutcome, EditOutcome, ReviewOutcome, SubmitOutcome};
