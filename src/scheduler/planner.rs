//! Term planner.
//!
//! # Algorithm
//!
//! 1. Build the dependency graph over desired, uncompleted courses.
//! 2. Resolve a topological order (Kahn). Unresolved courses raise one
//!    aggregate warning and are left out of the plan.
//! 3. Generate the term horizon.
//! 4. Pack each term in order with [`TermPacker`].
//! 5. Summarize units, remaining GE debt and the writing requirement.
//!
//! # Complexity
//! O(V + E) for the graph, O(terms × candidates × log candidates) for packing.

use tracing::{debug, info, warn};

use super::TermPacker;
use crate::catalog::{ge_debt, CatalogSnapshot};
use crate::config::PlannerConfig;
use crate::dispatching::RuleEngine;
use crate::graph::DependencyGraph;
use crate::models::{term_sequence, PlanRequest, PlanResult, PlanSummary, WritingStatus};

/// Warning raised once when any desired course cannot be ordered.
pub const UNRESOLVED_WARNING: &str =
    "Some courses could not be scheduled due to unmet or cyclic prerequisites in the selected set.";

/// Greedy term-by-term course planner.
///
/// Stateless between calls: every call builds its own graph and placement
/// state, so a single planner can serve concurrent calls.
///
/// # Example
///
/// ```
/// use u_courseplan::catalog::CatalogSnapshot;
/// use u_courseplan::models::{CourseRef, PlanRequest, Target, TermName};
/// use u_courseplan::scheduler::TermPlanner;
///
/// let snapshot = CatalogSnapshot::new(vec![
///     CourseRef::new("cse100", 4).with_offering(2025, TermName::Fall),
///     CourseRef::new("cse101", 4)
///         .with_prerequisite("cse100")
///         .with_offering(2026, TermName::Winter),
/// ])
/// .unwrap();
/// let request = PlanRequest::new(2025, TermName::Fall, 16, 2);
///
/// let result = TermPlanner::new().plan(&snapshot, 48, &request);
/// assert_eq!(result.terms[0].course_ids, vec!["cse100"]);
/// assert_eq!(result.terms[1].course_ids, vec!["cse101"]);
/// ```
#[derive(Debug, Clone)]
pub struct TermPlanner {
    config: PlannerConfig,
    rule_engine: RuleEngine,
}

impl TermPlanner {
    /// Creates a planner with the default configuration, ordering heavier
    /// candidates first.
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
            rule_engine: RuleEngine::heaviest_first(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the candidate ordering rules.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans `request` against `snapshot`.
    ///
    /// `ge_required` is the total GE requirement; the debt is that minus
    /// `request.ge_units_done`, floored at zero.
    ///
    /// Never fails. Inconsistent prerequisites surface as a warning in the
    /// result; infeasible terms come back empty or GE-only. A horizon that
    /// would run past year `i32::MAX` is cut short there.
    pub fn plan(
        &self,
        snapshot: &CatalogSnapshot,
        ge_required: u32,
        request: &PlanRequest,
    ) -> PlanResult {
        let graph = DependencyGraph::build(snapshot, &request.target, &request.completed_ids);
        let topo = graph.resolve();
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            resolved = topo.order.len(),
            "built dependency graph"
        );

        let mut warnings = Vec::new();
        if !topo.is_complete() {
            let unresolved: Vec<&str> = topo
                .unresolved
                .iter()
                .map(|&n| snapshot.courses()[graph.course_index(n)].id.as_str())
                .collect();
            warn!(count = unresolved.len(), courses = ?unresolved, "unresolved prerequisites");
            warnings.push(UNRESOLVED_WARNING.to_string());
        }

        let slots = term_sequence(
            request.start.year,
            request.start.term,
            request.terms_remaining as usize,
        );
        if slots.len() < request.terms_remaining as usize {
            warn!(
                requested = request.terms_remaining,
                planned = slots.len(),
                "term horizon truncated at year limit"
            );
        }
        let debt = ge_debt(ge_required, request.ge_units_done);

        let mut packer = TermPacker::new(
            snapshot,
            &graph,
            &topo,
            request,
            &self.config,
            &self.rule_engine,
            debt,
        );
        let terms: Vec<_> = slots.into_iter().map(|slot| packer.pack(slot)).collect();

        let summary = PlanSummary {
            total_units: terms.iter().map(|t| t.units).sum(),
            ge_units_remaining: packer.ge_debt(),
            writing: WritingStatus::from(request.writing_satisfied),
        };
        info!(
            terms = terms.len(),
            total_units = summary.total_units,
            ge_units_remaining = summary.ge_units_remaining,
            unplaced = packer.remaining_ids().count(),
            "plan complete"
        );

        PlanResult {
            terms,
            summary,
            warnings,
        }
    }
}

impl Default for TermPlanner {
    fn default() -> Self {
        Self::new()
    }
}
