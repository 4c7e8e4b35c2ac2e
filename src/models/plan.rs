//! Plan (solution) model.
//!
//! A plan is an ordered list of per-term placements plus a summary and any
//! warnings raised while building it. Term plans are produced once per
//! [`TermSlot`] and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::{TermName, TermSlot};

/// Courses and GE filler placed into one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermPlan {
    pub year: i32,
    pub term: TermName,
    /// Chosen course IDs, in selection order.
    pub course_ids: Vec<String>,
    /// Total units, including GE filler.
    pub units: u32,
    /// Summed workload weight of the chosen courses.
    pub workload: u32,
    /// GE filler units added this term.
    pub ge_units: u32,
}

impl TermPlan {
    /// Creates an empty plan for the slot.
    pub fn empty(slot: TermSlot) -> Self {
        Self {
            year: slot.year,
            term: slot.term,
            course_ids: Vec::new(),
            units: 0,
            workload: 0,
            ge_units: 0,
        }
    }

    /// The slot this plan fills.
    #[inline]
    pub fn slot(&self) -> TermSlot {
        TermSlot::new(self.year, self.term)
    }

    /// Units from courses only (excluding GE filler).
    #[inline]
    pub fn course_units(&self) -> u32 {
        self.units - self.ge_units
    }

    /// Whether the term holds neither courses nor GE filler.
    pub fn is_empty(&self) -> bool {
        self.course_ids.is_empty() && self.ge_units == 0
    }

    /// Whether the course is placed in this term.
    pub fn contains(&self, course_id: &str) -> bool {
        self.course_ids.iter().any(|c| c == course_id)
    }
}

/// Writing requirement status. Passed through from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingStatus {
    Done,
    Pending,
}

impl From<bool> for WritingStatus {
    fn from(satisfied: bool) -> Self {
        if satisfied {
            WritingStatus::Done
        } else {
            WritingStatus::Pending
        }
    }
}

/// Plan-wide totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Sum of units across all terms.
    pub total_units: u32,
    /// GE debt left after the last term.
    pub ge_units_remaining: u32,
    pub writing: WritingStatus,
}

/// The result of a planning call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    /// One entry per term slot, in horizon order.
    pub terms: Vec<TermPlan>,
    pub summary: PlanSummary,
    /// Aggregate, human-readable warnings.
    pub warnings: Vec<String>,
}

impl PlanResult {
    /// Number of planned terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Index of the term containing the course, if placed.
    pub fn term_index_of(&self, course_id: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.contains(course_id))
    }

    /// Whether the course was placed in any term.
    pub fn is_placed(&self, course_id: &str) -> bool {
        self.term_index_of(course_id).is_some()
    }

    /// All placed course IDs, in term order.
    pub fn placed_course_ids(&self) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .flat_map(|t| t.course_ids.iter().map(String::as_str))
    }

    /// Total GE filler units across the plan.
    pub fn total_ge_units(&self) -> u32 {
        self.terms.iter().map(|t| t.ge_units).sum()
    }

    /// Whether any warning was raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
