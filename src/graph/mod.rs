//! Prerequisite dependency graph.
//!
//! Nodes are the desired courses that are not yet completed. An edge
//! `prereq → dependent` exists when the prerequisite is itself a node.
//! Prerequisites outside the desired set, or already completed, impose no
//! edge here. Under [`Target::All`] the desired set is the snapshot, so a
//! prerequisite missing from the catalog is never desired.
//!
//! # Representation
//! Index-based adjacency: node `i` refers to catalog position
//! `nodes[i]`, and `dependents[i]` lists node indices. Nothing points back
//! into the catalog, so a graph is plain data and trivially shareable.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

mod topo;

pub use topo::TopoOrder;

use std::collections::BTreeSet;

use crate::catalog::CatalogSnapshot;
use crate::models::Target;

/// Directed "requires" graph over the courses still to be planned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Catalog position of each node, in catalog order.
    nodes: Vec<usize>,
    /// Catalog position → node index.
    node_of: Vec<Option<usize>>,
    /// Incoming prerequisite count per node.
    in_degree: Vec<usize>,
    /// Node → nodes that require it.
    dependents: Vec<Vec<usize>>,
}

impl DependencyGraph {
    /// Builds the graph for `target` minus `completed`.
    ///
    /// Courses are visited in catalog order, so node indices and every
    /// dependents list follow catalog order as well.
    ///
    /// An explicitly desired prerequisite absent from the snapshot still
    /// counts toward the dependent's in-degree. It can never be released,
    /// which leaves the dependent unresolved.
    pub fn build(
        snapshot: &CatalogSnapshot,
        target: &Target,
        completed: &BTreeSet<String>,
    ) -> Self {
        let courses = snapshot.courses();
        let is_desired = |id: &str| match target {
            Target::All => snapshot.contains(id),
            Target::Ids(_) => target.contains(id),
        };
        let is_open = |id: &str| is_desired(id) && !completed.contains(id);

        let mut nodes = Vec::new();
        let mut node_of = vec![None; courses.len()];
        for (pos, course) in courses.iter().enumerate() {
            if is_open(&course.id) {
                node_of[pos] = Some(nodes.len());
                nodes.push(pos);
            }
        }

        let mut in_degree = vec![0; nodes.len()];
        let mut dependents = vec![Vec::new(); nodes.len()];

        for (node, &pos) in nodes.iter().enumerate() {
            for prereq in &courses[pos].prerequisites {
                if !is_open(prereq) {
                    continue;
                }
                in_degree[node] += 1;
                if let Some(from) = snapshot.index_of(prereq).and_then(|p| node_of[p]) {
                    dependents[from].push(node);
                }
            }
        }

        Self {
            nodes,
            node_of,
            in_degree,
            dependents,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, counting those from missing desired prerequisites.
    pub fn edge_count(&self) -> usize {
        self.in_degree.iter().sum()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Catalog position of a node.
    #[inline]
    pub fn course_index(&self, node: usize) -> usize {
        self.nodes[node]
    }

    /// Node index of a catalog position, if that course is a node.
    #[inline]
    pub fn node_of(&self, course_index: usize) -> Option<usize> {
        self.node_of.get(course_index).copied().flatten()
    }

    /// Initial in-degree of a node.
    #[inline]
    pub fn in_degree(&self, node: usize) -> usize {
        self.in_degree[node]
    }

    /// Nodes that directly require `node`, in catalog order.
    #[inline]
    pub fn dependents(&self, node: usize) -> &[usize] {
        &self.dependents[node]
    }
}
