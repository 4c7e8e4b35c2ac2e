//! Catalog and GE pool collaborators.
//!
//! The planner never talks to a course store directly. It reads courses
//! through [`CatalogProvider`], freezes them into a [`CatalogSnapshot`] for
//! the duration of one call, and asks a [`GePoolResolver`] for the GE unit
//! requirement.
//!
//! [`InMemoryCatalog`] and [`FixedGePool`] are in-process implementations
//! used by tests and embedders without a backing store.

mod ge;
mod memory;
mod snapshot;

pub use ge::{ge_debt, resolve_required_ge_units, FixedGePool};
pub use memory::InMemoryCatalog;
pub use snapshot::CatalogSnapshot;

use crate::error::CatalogError;
use crate::models::{CourseRef, Target};

/// Read-only access to a course catalog.
pub trait CatalogProvider: Send + Sync {
    /// Returns the courses selected by `target`, in catalog order.
    ///
    /// IDs that do not exist in the catalog are skipped.
    fn fetch_courses(&self, target: &Target) -> Result<Vec<CourseRef>, CatalogError>;
}

/// Source of the total GE unit requirement.
pub trait GePoolResolver: Send + Sync {
    /// Total GE units a student must complete.
    fn required_ge_units(&self) -> Result<u32, CatalogError>;
}
