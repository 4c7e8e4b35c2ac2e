//! In-memory catalog.

use crate::error::CatalogError;
use crate::models::{CourseRef, Target};

use super::{CatalogProvider, CatalogSnapshot};

/// A catalog held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    snapshot: CatalogSnapshot,
}

impl InMemoryCatalog {
    /// Creates a catalog from courses. Duplicate IDs are rejected.
    pub fn new(courses: Vec<CourseRef>) -> Result<Self, CatalogError> {
        Ok(Self {
            snapshot: CatalogSnapshot::new(courses)?,
        })
    }

    /// Snapshot of the whole catalog.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.snapshot.clone()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn fetch_courses(&self, target: &Target) -> Result<Vec<CourseRef>, CatalogError> {
        Ok(self
            .snapshot
            .courses()
            .iter()
            .filter(|c| target.contains(&c.id))
            .cloned()
            .collect())
    }
}
