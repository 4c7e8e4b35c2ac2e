//! Planner configuration.
//!
//! Policy knobs of the planner. Every field has a default, so a partial JSON
//! document is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Workload weight assumed for a course without one.
pub const DEFAULT_WORKLOAD_WEIGHT: u32 = 3;

/// Soft cap on summed workload weight per term.
pub const DEFAULT_WORKLOAD_CAP: u32 = 10;

/// Largest GE filler increment added in one step.
pub const GE_CHUNK_UNITS: u32 = 3;

/// GE requirement used when the GE pool cannot be resolved.
pub const DEFAULT_GE_UNITS: u32 = 48;

/// Planner policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum summed workload weight per term.
    pub workload_cap: u32,
    /// Weight used for courses without a workload entry.
    pub default_workload_weight: u32,
    /// GE filler increment.
    pub ge_chunk_units: u32,
    /// GE requirement fallback.
    pub default_ge_units: u32,
    pub min_units_per_term: u32,
    pub max_units_per_term: u32,
    pub min_terms: u32,
    pub max_terms: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            workload_cap: DEFAULT_WORKLOAD_CAP,
            default_workload_weight: DEFAULT_WORKLOAD_WEIGHT,
            ge_chunk_units: GE_CHUNK_UNITS,
            default_ge_units: DEFAULT_GE_UNITS,
            min_units_per_term: 8,
            max_units_per_term: 20,
            min_terms: 1,
            max_terms: 20,
        }
    }
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the per-term workload cap.
    pub fn with_workload_cap(mut self, cap: u32) -> Self {
        self.workload_cap = cap;
        self
    }

    /// Sets the default workload weight.
    pub fn with_default_workload_weight(mut self, weight: u32) -> Self {
        self.default_workload_weight = weight;
        self
    }

    /// Sets the GE filler increment.
    pub fn with_ge_chunk_units(mut self, units: u32) -> Self {
        self.ge_chunk_units = units;
        self
    }

    /// Sets the GE requirement fallback.
    pub fn with_default_ge_units(mut self, units: u32) -> Self {
        self.default_ge_units = units;
        self
    }

    /// Sets the accepted range for units per term.
    pub fn with_units_range(mut self, min: u32, max: u32) -> Self {
        self.min_units_per_term = min;
        self.max_units_per_term = max;
        self
    }

    /// Sets the accepted range for the number of terms.
    pub fn with_terms_range(mut self, min: u32, max: u32) -> Self {
        self.min_terms = min;
        self.max_terms = max;
        self
    }
}
