//! Planning request models.
//!
//! [`PlanRequest`] is the canonical input of the planner: every course is
//! referenced by ID. [`PlanInput`] is the boundary form accepted from
//! callers, which may also name courses by code; the
//! [`PlanService`](crate::service::PlanService) resolves it into a
//! `PlanRequest` against the catalog snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Target, TermName, TermSlot};

/// Canonical planning request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Courses already completed.
    pub completed_ids: BTreeSet<String>,
    /// Courses the student wants to complete.
    pub target: Target,
    /// First term of the horizon.
    pub start: TermSlot,
    /// Per-term unit cap.
    pub units_per_term: u32,
    /// Number of terms to plan.
    pub terms_remaining: u32,
    /// GE units already completed.
    pub ge_units_done: u32,
    /// Whether the writing requirement is already satisfied.
    pub writing_satisfied: bool,
}

impl PlanRequest {
    /// Creates a request targeting the whole catalog with nothing completed.
    pub fn new(
        start_year: i32,
        start_term: TermName,
        units_per_term: u32,
        terms_remaining: u32,
    ) -> Self {
        Self {
            completed_ids: BTreeSet::new(),
            target: Target::All,
            start: TermSlot::new(start_year, start_term),
            units_per_term,
            terms_remaining,
            ge_units_done: 0,
            writing_satisfied: false,
        }
    }

    /// Sets the completed courses.
    pub fn with_completed<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the target.
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Sets the GE units already completed.
    pub fn with_ge_units_done(mut self, units: u32) -> Self {
        self.ge_units_done = units;
        self
    }

    /// Sets the writing requirement flag.
    pub fn with_writing_satisfied(mut self, satisfied: bool) -> Self {
        self.writing_satisfied = satisfied;
        self
    }

    /// Whether the course was already completed.
    #[inline]
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed_ids.contains(id)
    }
}

/// Boundary planning input.
///
/// Optional fields default the same way the request schema does: nothing
/// completed, the whole catalog targeted, no GE units done, writing pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanInput {
    #[serde(default)]
    pub completed_ids: Vec<String>,
    /// Completed courses named by code (matched case-insensitively).
    #[serde(default)]
    pub completed_codes: Vec<String>,
    #[serde(default)]
    pub target_ids: Target,
    /// Target courses named by code. When non-empty, replaces `target_ids`.
    #[serde(default)]
    pub target_codes: Vec<String>,
    pub start_year: i32,
    pub start_term: TermName,
    pub units_per_term: u32,
    pub terms_remaining: u32,
    #[serde(default)]
    pub ge_units_done: u32,
    #[serde(default)]
    pub writing_satisfied: bool,
}

impl PlanInput {
    /// Creates an input with schema defaults for every optional field.
    pub fn new(
        start_year: i32,
        start_term: TermName,
        units_per_term: u32,
        terms_remaining: u32,
    ) -> Self {
        Self {
            completed_ids: Vec::new(),
            completed_codes: Vec::new(),
            target_ids: Target::All,
            target_codes: Vec::new(),
            start_year,
            start_term,
            units_per_term,
            terms_remaining,
            ge_units_done: 0,
            writing_satisfied: false,
        }
    }

    /// Adds completed course codes.
    pub fn with_completed_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed_codes.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Adds completed course IDs.
    pub fn with_completed_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Sets target course codes.
    pub fn with_target_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the target by ID.
    pub fn with_target(mut self, target: Target) -> Self {
        self.target_ids = target;
        self
    }

    /// Sets the GE units already completed.
    pub fn with_ge_units_done(mut self, units: u32) -> Self {
        self.ge_units_done = units;
        self
    }

    /// Sets the writing requirement flag.
    pub fn with_writing_satisfied(mut self, satisfied: bool) -> Self {
        self.writing_satisfied = satisfied;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = PlanRequest::new(2025, TermName::Fall, 16, 4)
            .with_completed(["cse12"])
            .with_target(Target::ids(["cse100"]))
            .with_ge_units_done(12)
            .with_writing_satisfied(true);

        assert!(req.is_completed("cse12"));
        assert!(!req.is_completed("cse100"));
        assert_eq!(req.start, TermSlot::new(2025, TermName::Fall));
        assert_eq!(req.ge_units_done, 12);
        assert!(req.writing_satisfied);
    }

    #[test]
    fn test_input_defaults() {
        let json = r#"{
            "start_year": 2025,
            "start_term": "Fall",
            "units_per_term": 16,
            "terms_remaining": 4
        }"#;
        let input: PlanInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, PlanInput::new(2025, TermName::Fall, 16, 4));
        assert!(input.target_ids.is_all());
        assert_eq!(input.ge_units_done, 0);
        assert!(!input.writing_satisfied);
    }

    #[test]
    fn test_input_explicit_target() {
        let json = r#"{
            "target_ids": ["a", "b"],
            "completed_codes": ["cse 12"],
            "start_year": 2026,
            "start_term": "Winter",
            "units_per_term": 12,
            "terms_remaining": 2,
            "writing_satisfied": true
        }"#;
        let input: PlanInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.target_ids, Target::ids(["a", "b"]));
        assert_eq!(input.completed_codes, vec!["cse 12".to_string()]);
        assert!(input.writing_satisfied);
    }

    #[test]
    fn test_input_rejects_negative_ge_units() {
        let json = r#"{
            "start_year": 2025,
            "start_term": "Fall",
            "units_per_term": 16,
            "terms_remaining": 4,
            "ge_units_done": -4
        }"#;
        assert!(serde_json::from_str::<PlanInput>(json).is_err());
    }
}
