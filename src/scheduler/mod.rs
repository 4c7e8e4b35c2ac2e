//! Greedy term planning.
//!
//! # Algorithm
//!
//! `TermPlanner` orders the desired courses topologically, then walks the
//! term horizon in order. `TermPacker` fills each term greedily: eligible
//! courses sorted by the rule engine (heaviest workload first by default)
//! are accepted while they fit the unit and workload caps, and leftover
//! unit capacity is spent on GE filler.
//!
//! The result is feasible but not optimal: no look-ahead, no backtracking.
//!
//! # References
//!
//! - Kahn (1962), "Topological sorting of large networks"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod packer;
mod planner;

pub use packer::{ge_filler_chunks, TermPacker};
pub use planner::{TermPlanner, UNRESOLVED_WARNING};
