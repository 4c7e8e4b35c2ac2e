//! Packing context for candidate rule evaluation.

use crate::graph::DependencyGraph;

/// Read-only planning state passed to candidate rules.
#[derive(Debug, Clone, Copy)]
pub struct PackingContext<'a> {
    /// Dependency graph of the current call.
    pub graph: &'a DependencyGraph,
    /// Weight assumed for courses without a workload entry.
    pub default_workload_weight: u32,
}

impl<'a> PackingContext<'a> {
    /// Creates a context over the current call's graph.
    pub fn new(graph: &'a DependencyGraph, default_workload_weight: u32) -> Self {
        Self {
            graph,
            default_workload_weight,
        }
    }

    /// Number of courses that directly require the course at `course_index`.
    ///
    /// Courses that are not graph nodes have no dependents.
    pub fn dependent_count(&self, course_index: usize) -> usize {
        self.graph
            .node_of(course_index)
            .map_or(0, |node| self.graph.dependents(node).len())
    }
}
