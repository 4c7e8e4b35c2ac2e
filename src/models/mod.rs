//! Course planning domain models.
//!
//! Provides the core data types for representing a planning problem
//! (catalog courses, desired set, request) and its solution (per-term plans).
//!
//! # Domain Mappings
//!
//! | u-courseplan | Scheduling analogue |
//! |--------------|---------------------|
//! | CourseRef | Job with precedence |
//! | TermSlot | Time bucket |
//! | Unit cap / workload cap | Bucket capacities |
//! | TermPlan | Bucket assignment |

mod course;
mod plan;
mod request;
mod target;
mod term;

pub use course::{normalize_code, CourseRef};
pub use plan::{PlanResult, PlanSummary, TermPlan, WritingStatus};
pub use request::{PlanInput, PlanRequest};
pub use target::{Target, ALL_MARKER};
pub use term::{term_sequence, Offering, TermName, TermSlot};
