//! Greedy term packer.
//!
//! # Algorithm
//!
//! For each term, in horizon order:
//! 1. Collect candidates: unplaced, offered this term, and every listed
//!    prerequisite completed or placed in an earlier term.
//! 2. Order candidates with the rule engine (stable over topological order).
//! 3. Accept each candidate that fits both the unit cap and the workload cap.
//!    Rejected candidates stay unplaced for later terms.
//! 4. Fill leftover unit capacity with GE filler chunks while GE debt remains.
//!
//! # Complexity
//! O(terms × candidates × log candidates)

use tracing::debug;

use crate::catalog::CatalogSnapshot;
use crate::config::PlannerConfig;
use crate::dispatching::{PackingContext, RuleEngine};
use crate::graph::{DependencyGraph, TopoOrder};
use crate::models::{PlanRequest, TermPlan, TermSlot};

/// Splits GE filler into chunks for one term.
///
/// Starting from `units` already placed, adds `min(chunk, cap − units, debt)`
/// per step until the cap is reached, the debt is exhausted, or the step
/// would be empty.
///
/// # Example
/// ```
/// use u_courseplan::scheduler::ge_filler_chunks;
///
/// assert_eq!(ge_filler_chunks(0, 10, 7, 3), vec![3, 3, 1]);
/// assert_eq!(ge_filler_chunks(8, 10, 7, 3), vec![2]);
/// ```
pub fn ge_filler_chunks(units: u32, cap: u32, debt: u32, chunk: u32) -> Vec<u32> {
    let mut chunks = Vec::new();
    let mut units = units;
    let mut debt = debt;
    while units < cap && debt > 0 {
        let add = chunk.min(cap - units).min(debt);
        if add == 0 {
            break;
        }
        chunks.push(add);
        units += add;
        debt -= add;
    }
    chunks
}

/// Mutable placement state for one planning call.
///
/// Holds the courses still to place (in topological order), which courses
/// have been placed, and the outstanding GE debt. Terms must be packed in
/// horizon order.
#[derive(Debug)]
pub struct TermPacker<'a> {
    snapshot: &'a CatalogSnapshot,
    graph: &'a DependencyGraph,
    request: &'a PlanRequest,
    config: &'a PlannerConfig,
    rule_engine: &'a RuleEngine,
    /// Unplaced catalog positions, in topological order.
    remaining: Vec<usize>,
    /// Placed flag per catalog position.
    placed: Vec<bool>,
    ge_debt: u32,
}

impl<'a> TermPacker<'a> {
    /// Creates a packer over the resolved part of `topo`.
    ///
    /// Unresolved nodes are never added to the remaining set, so they are
    /// never placed.
    pub fn new(
        snapshot: &'a CatalogSnapshot,
        graph: &'a DependencyGraph,
        topo: &TopoOrder,
        request: &'a PlanRequest,
        config: &'a PlannerConfig,
        rule_engine: &'a RuleEngine,
        ge_debt: u32,
    ) -> Self {
        let remaining = topo
            .order
            .iter()
            .map(|&node| graph.course_index(node))
            .collect();
        Self {
            snapshot,
            graph,
            request,
            config,
            rule_engine,
            remaining,
            placed: vec![false; snapshot.len()],
            ge_debt,
        }
    }

    /// Outstanding GE debt.
    #[inline]
    pub fn ge_debt(&self) -> u32 {
        self.ge_debt
    }

    /// IDs of courses not yet placed, in topological order.
    pub fn remaining_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.remaining
            .iter()
            .map(|&i| self.snapshot.courses()[i].id.as_str())
    }

    /// Whether the course has been placed in a packed term.
    pub fn is_placed(&self, id: &str) -> bool {
        self.snapshot
            .index_of(id)
            .is_some_and(|i| self.placed[i])
    }

    /// Packs one term and advances the placement state.
    pub fn pack(&mut self, slot: TermSlot) -> TermPlan {
        let unit_cap = self.request.units_per_term;
        let workload_cap = self.config.workload_cap;
        let default_weight = self.config.default_workload_weight;

        let mut candidates = self.candidates(slot);
        let context = PackingContext::new(self.graph, default_weight);
        self.rule_engine
            .sort_candidates(&mut candidates, self.snapshot, &context);

        let mut plan = TermPlan::empty(slot);
        for idx in candidates {
            let course = &self.snapshot.courses()[idx];
            let weight = course.workload_weight_or(default_weight);
            if plan.units + course.units > unit_cap {
                continue;
            }
            if plan.workload + weight > workload_cap {
                continue;
            }
            plan.course_ids.push(course.id.clone());
            plan.units += course.units;
            plan.workload += weight;
            self.placed[idx] = true;
        }
        self.remaining.retain(|&i| !self.placed[i]);

        let chunks = ge_filler_chunks(
            plan.units,
            unit_cap,
            self.ge_debt,
            self.config.ge_chunk_units,
        );
        let ge_units: u32 = chunks.iter().sum();
        plan.ge_units = ge_units;
        plan.units += ge_units;
        self.ge_debt -= ge_units;

        debug!(
            term = %slot,
            courses = plan.course_ids.len(),
            units = plan.units,
            workload = plan.workload,
            ge_units,
            ge_debt = self.ge_debt,
            "packed term"
        );
        plan
    }

    /// Eligible catalog positions for `slot`, in topological order.
    ///
    /// Placement flags only change after selection, so a course placed this
    /// term never unlocks another course in the same term.
    fn candidates(&self, slot: TermSlot) -> Vec<usize> {
        let courses = self.snapshot.courses();
        self.remaining
            .iter()
            .copied()
            .filter(|&i| {
                let course = &courses[i];
                course.is_offered_in(&slot)
                    && course.prerequisites.iter().all(|p| self.is_satisfied(p))
            })
            .collect()
    }

    fn is_satisfied(&self, prereq: &str) -> bool {
        self.request.is_completed(prereq) || self.is_placed(prereq)
    }
}
