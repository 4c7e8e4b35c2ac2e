//! Rule engine for candidate ordering.
//!
//! Applies rules sequentially: the next rule is consulted only when all
//! previous rules tie. Sorting is stable, so candidates still tied after the
//! last rule keep their incoming order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{CandidateRule, PackingContext};
use crate::catalog::CatalogSnapshot;
use crate::models::CourseRef;

/// A composable rule chain for candidate prioritization.
///
/// # Example
/// ```
/// use u_courseplan::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HeaviestFirst)
///     .with_tie_breaker(rules::MostUnitsFirst);
/// assert_eq!(engine.rule_names(), vec!["HEAVIEST", "MOST_UNITS"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn CandidateRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine. An empty engine preserves input order.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Engine ordering heavier courses first.
    pub fn heaviest_first() -> Self {
        Self::new().with_rule(super::rules::HeaviestFirst)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: CandidateRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after every earlier rule ties.
    pub fn with_tie_breaker<R: CandidateRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidate catalog positions by priority (highest first).
    ///
    /// Stable: ties keep the order `candidates` arrived in.
    pub fn sort_candidates(
        &self,
        candidates: &mut [usize],
        snapshot: &CatalogSnapshot,
        context: &PackingContext<'_>,
    ) {
        if self.rules.is_empty() || candidates.len() < 2 {
            return;
        }
        let courses = snapshot.courses();
        candidates.sort_by(|&a, &b| self.compare(a, b, courses, context));
    }

    fn compare(
        &self,
        a: usize,
        b: usize,
        courses: &[CourseRef],
        context: &PackingContext<'_>,
    ) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, &courses[a], context);
            let score_b = rule.evaluate(b, &courses[b], context);
            if score_a != score_b {
                return score_a.cmp(&score_b);
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
