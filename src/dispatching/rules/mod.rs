//! Built-in candidate rules.
//!
//! # Categories
//!
//! - **Workload**: HEAVIEST, LIGHTEST
//! - **Units**: MOST_UNITS
//! - **Graph**: MOST_DEPENDENTS
//!
//! # Score Convention
//! All rules return lower scores for candidates that should be placed first.

use super::{CandidateRule, PackingContext, RuleScore};
use crate::models::CourseRef;

/// Heaviest workload first.
///
/// Places difficult courses while workload capacity is still free, so
/// later, lighter candidates fill the gaps and heavy courses end up spread
/// across terms.
#[derive(Debug, Clone, Copy)]
pub struct HeaviestFirst;

impl CandidateRule for HeaviestFirst {
    fn name(&self) -> &'static str {
        "HEAVIEST"
    }

    fn evaluate(&self, _idx: usize, course: &CourseRef, context: &PackingContext<'_>) -> RuleScore {
        -i64::from(course.workload_weight_or(context.default_workload_weight))
    }

    fn description(&self) -> &'static str {
        "Heaviest Workload First"
    }
}

/// Lightest workload first.
#[derive(Debug, Clone, Copy)]
pub struct LightestFirst;

impl CandidateRule for LightestFirst {
    fn name(&self) -> &'static str {
        "LIGHTEST"
    }

    fn evaluate(&self, _idx: usize, course: &CourseRef, context: &PackingContext<'_>) -> RuleScore {
        i64::from(course.workload_weight_or(context.default_workload_weight))
    }

    fn description(&self) -> &'static str {
        "Lightest Workload First"
    }
}

/// Most credit units first.
#[derive(Debug, Clone, Copy)]
pub struct MostUnitsFirst;

impl CandidateRule for MostUnitsFirst {
    fn name(&self) -> &'static str {
        "MOST_UNITS"
    }

    fn evaluate(&self, _idx: usize, course: &CourseRef, _context: &PackingContext<'_>) -> RuleScore {
        -i64::from(course.units)
    }

    fn description(&self) -> &'static str {
        "Most Units First"
    }
}

/// Most direct dependents first.
///
/// Prefers courses that unlock the most other planned courses.
#[derive(Debug, Clone, Copy)]
pub struct MostDependentsFirst;

impl CandidateRule for MostDependentsFirst {
    fn name(&self) -> &'static str {
        "MOST_DEPENDENTS"
    }

    fn evaluate(&self, idx: usize, _course: &CourseRef, context: &PackingContext<'_>) -> RuleScore {
        -(context.dependent_count(idx) as i64)
    }

    fn description(&self) -> &'static str {
        "Most Dependents First"
    }
}
