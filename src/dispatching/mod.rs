//! Candidate ordering rules for term packing.
//!
//! Each term, the packer collects the courses it could place and walks them
//! in priority order. The order comes from a [`RuleEngine`] chaining
//! [`CandidateRule`]s; the default chain is [`rules::HeaviestFirst`], which
//! spreads difficult courses across terms instead of clustering them.
//!
//! # Usage
//!
//! ```
//! use u_courseplan::dispatching::RuleEngine;
//! use u_courseplan::dispatching::rules;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::HeaviestFirst)
//!     .with_tie_breaker(rules::MostDependentsFirst);
//! ```
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::PackingContext;
pub use engine::RuleEngine;

use crate::models::CourseRef;
use std::fmt::Debug;

/// Score returned by a candidate rule.
///
/// Lower scores = placed first. Integer scores keep comparisons exact.
pub type RuleScore = i64;

/// A rule that evaluates the placement priority of a candidate course.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait CandidateRule: Send + Sync + Debug {
    /// Rule name (e.g., "HEAVIEST").
    fn name(&self) -> &'static str;

    /// Evaluates a candidate. `course_index` is the course's catalog position.
    fn evaluate(&self, course_index: usize, course: &CourseRef, context: &PackingContext<'_>)
        -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
