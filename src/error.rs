//! Error types.
//!
//! The planner core is infallible. Errors arise only at the boundary:
//! rejected input, an unreachable catalog, or a malformed configuration.

use crate::validation::ValidationError;

/// Failure reported by a catalog or GE pool collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    #[error("duplicate course id in catalog: {0}")]
    DuplicateCourse(String),
}

/// Error returned by [`PlanService`](crate::service::PlanService).
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("invalid plan input: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("invalid planner config: {0}")]
    Config(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
