//! Course model.
//!
//! A course is the unit of work placed into terms. It carries its credit
//! units, a workload weight (relative difficulty), its prerequisites and the
//! terms in which it is offered.

use serde::{Deserialize, Serialize};

use super::{Offering, TermName, TermSlot};
use crate::config::DEFAULT_WORKLOAD_WEIGHT;

/// A catalog course as seen by the planner.
///
/// Immutable for the duration of one planning call; the planner reads it
/// through a [`CatalogSnapshot`](crate::catalog::CatalogSnapshot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRef {
    /// Unique course identifier.
    pub id: String,
    /// Human-facing course code (e.g. `"CSE 100"`). Empty if unknown.
    #[serde(default)]
    pub code: String,
    /// Course title.
    #[serde(default)]
    pub title: String,
    /// Credit units.
    pub units: u32,
    /// Workload weight. `None` = use the configured default.
    #[serde(default)]
    pub workload: Option<u32>,
    /// Prerequisite course IDs, in declaration order, without duplicates.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Terms in which the course is offered.
    #[serde(default)]
    pub offerings: Vec<Offering>,
}

impl CourseRef {
    /// Creates a course with the given ID and unit count.
    pub fn new(id: impl Into<String>, units: u32) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            title: String::new(),
            units,
            workload: None,
            prerequisites: Vec::new(),
            offerings: Vec::new(),
        }
    }

    /// Sets the course code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the course title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the workload weight.
    pub fn with_workload(mut self, weight: u32) -> Self {
        self.workload = Some(weight);
        self
    }

    /// Adds a prerequisite. Repeated IDs are ignored.
    pub fn with_prerequisite(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !self.prerequisites.contains(&id) {
            self.prerequisites.push(id);
        }
        self
    }

    /// Adds an offering.
    pub fn with_offering(mut self, year: i32, term: TermName) -> Self {
        let offering = Offering::new(year, term);
        if !self.offerings.contains(&offering) {
            self.offerings.push(offering);
        }
        self
    }

    /// Workload weight, falling back to [`DEFAULT_WORKLOAD_WEIGHT`].
    #[inline]
    pub fn workload_weight(&self) -> u32 {
        self.workload_weight_or(DEFAULT_WORKLOAD_WEIGHT)
    }

    /// Workload weight, falling back to `default` when absent.
    #[inline]
    pub fn workload_weight_or(&self, default: u32) -> u32 {
        self.workload.unwrap_or(default)
    }

    /// Whether the course is offered in the given slot.
    pub fn is_offered_in(&self, slot: &TermSlot) -> bool {
        self.offerings
            .iter()
            .any(|o| o.year == slot.year && o.term == slot.term)
    }

    /// Whether the course lists any prerequisites.
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Normalized code used for case-insensitive lookups.
    pub fn normalized_code(&self) -> String {
        normalize_code(&self.code)
    }
}

/// Trims and upper-cases a course code for matching.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
