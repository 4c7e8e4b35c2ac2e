//! Term-by-term course planning.
//!
//! Recommends a course sequence for a student across a fixed horizon of
//! academic terms, respecting prerequisite order, per-term offerings, a
//! per-term unit cap, a per-term workload cap and outstanding general
//! education (GE) units.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `CourseRef`, `Target`, `TermSlot`,
//!   `PlanRequest`, `PlanInput`, `TermPlan`, `PlanResult`
//! - **`catalog`**: Collaborator traits (`CatalogProvider`, `GePoolResolver`),
//!   the immutable `CatalogSnapshot` and in-memory implementations
//! - **`graph`**: Prerequisite dependency graph and Kahn's topological order
//! - **`dispatching`**: Candidate ordering rules and rule engine
//! - **`scheduler`**: `TermPacker` and `TermPlanner`, the greedy planner
//! - **`validation`**: Request range checks and catalog integrity checks
//! - **`service`**: `PlanService`, validation + snapshot + planning in one call
//!
//! # Determinism
//!
//! Identical inputs always produce identical plans. Every tie is broken by
//! catalog order: the topological queue is seeded in catalog order and the
//! candidate sort is stable over the topological order.
//!
//! # References
//!
//! - Kahn (1962), "Topological sorting of large networks"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod catalog;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod graph;
pub mod models;
pub mod scheduler;
pub mod service;
pub mod validation;

pub use config::PlannerConfig;
pub use error::{CatalogError, PlanError};
pub use scheduler::TermPlanner;
pub use service::PlanService;
