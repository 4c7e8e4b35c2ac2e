//! Input validation for planning requests and catalogs.
//!
//! The planner itself accepts any structurally valid request. These checks
//! run at the boundary, before a request reaches the planner:
//! - Units per term and term count within the configured ranges
//! - Duplicate course IDs
//! - Zero-unit courses
//! - Prerequisites referencing unknown courses
//! - Circular prerequisites (DAG validation)
//!
//! All problems are collected; validation does not stop at the first one.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::config::PlannerConfig;
use crate::models::{CourseRef, PlanInput};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Units per term outside the accepted range.
    UnitsOutOfRange,
    /// Number of terms outside the accepted range.
    TermsOutOfRange,
    /// Two courses share the same ID.
    DuplicateId,
    /// A course carries zero units.
    InvalidUnits,
    /// A prerequisite references a course that doesn't exist.
    InvalidPrerequisite,
    /// A course lists itself as a prerequisite.
    SelfPrerequisite,
    /// Prerequisite graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a planning input against the configured ranges.
///
/// Checks:
/// 1. `units_per_term` within `[min_units_per_term, max_units_per_term]`
/// 2. `terms_remaining` within `[min_terms, max_terms]`
pub fn validate_request(input: &PlanInput, config: &PlannerConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let units = config.min_units_per_term..=config.max_units_per_term;
    if !units.contains(&input.units_per_term) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnitsOutOfRange,
            format!(
                "units_per_term {} not in {}..={}",
                input.units_per_term,
                units.start(),
                units.end()
            ),
        ));
    }

    let terms = config.min_terms..=config.max_terms;
    if !terms.contains(&input.terms_remaining) {
        errors.push(ValidationError::new(
            ValidationErrorKind::TermsOutOfRange,
            format!(
                "terms_remaining {} not in {}..={}",
                input.terms_remaining,
                terms.start(),
                terms.end()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates catalog integrity.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. Every course has at least one unit
/// 3. Every prerequisite references an existing course
/// 4. No course requires itself
/// 5. No circular prerequisites
///
/// The planner tolerates every one of these (unknown or cyclic
/// prerequisites only leave courses unplaced); this check exists so catalog
/// maintainers can find them.
pub fn validate_catalog(courses: &[CourseRef]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for course in courses {
        if !ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }
        if course.units == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidUnits,
                format!("Course '{}' has zero units", course.id),
            ));
        }
    }

    for course in courses {
        for prereq in &course.prerequisites {
            if prereq == &course.id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfPrerequisite,
                    format!("Course '{}' requires itself", course.id),
                ));
            } else if !ids.contains(prereq.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPrerequisite,
                    format!(
                        "Course '{}' references unknown prerequisite '{}'",
                        course.id, prereq
                    ),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(courses) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles of two or more courses using DFS.
///
/// Self-loops are reported separately by the caller. Roots are visited in
/// catalog order so the reported course is deterministic.
fn detect_cycles(courses: &[CourseRef]) -> Option<ValidationError> {
    // prereq → dependents
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for course in courses {
        for prereq in &course.prerequisites {
            if prereq != &course.id {
                adj.entry(prereq.as_str()).or_default().push(course.id.as_str());
            }
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for course in courses {
        let node = course.id.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular prerequisite detected involving course '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
