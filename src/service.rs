//! Planning service.
//!
//! Glues the planner to its collaborators: validates a [`PlanInput`], takes
//! one catalog snapshot, resolves course codes against it, resolves the GE
//! pool and runs the [`TermPlanner`].

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::{
    resolve_required_ge_units, CatalogProvider, CatalogSnapshot, GePoolResolver,
};
use crate::error::PlanError;
use crate::models::{PlanInput, PlanRequest, PlanResult, Target, TermSlot};
use crate::scheduler::TermPlanner;
use crate::validation::validate_request;

/// Planning entry point backed by a catalog and a GE pool.
#[derive(Debug, Clone)]
pub struct PlanService<C, G> {
    catalog: C,
    ge_pool: G,
    planner: TermPlanner,
}

impl<C: CatalogProvider, G: GePoolResolver> PlanService<C, G> {
    /// Creates a service with a default planner.
    pub fn new(catalog: C, ge_pool: G) -> Self {
        Self {
            catalog,
            ge_pool,
            planner: TermPlanner::new(),
        }
    }

    /// Replaces the planner.
    pub fn with_planner(mut self, planner: TermPlanner) -> Self {
        self.planner = planner;
        self
    }

    /// The catalog collaborator.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Validates, canonicalizes and plans `input`.
    ///
    /// # Errors
    /// - [`PlanError::Invalid`] if the input is out of range.
    /// - [`PlanError::Catalog`] if the catalog cannot be read.
    ///
    /// A failing GE pool does not fail the call; the configured default
    /// requirement is used instead.
    pub fn plan(&self, input: &PlanInput) -> Result<PlanResult, PlanError> {
        let config = self.planner.config();
        validate_request(input, config).map_err(PlanError::Invalid)?;

        let snapshot = CatalogSnapshot::new(self.catalog.fetch_courses(&Target::All)?)?;
        debug!(courses = snapshot.len(), "catalog snapshot taken");
        let request = canonicalize(input, &snapshot);

        let ge_required = resolve_required_ge_units(&self.ge_pool, config.default_ge_units);
        Ok(self.planner.plan(&snapshot, ge_required, &request))
    }
}

/// Converts boundary input into a canonical request.
///
/// Codes are matched against `snapshot`. Completed codes merge into the
/// completed IDs. Non-empty target codes replace the target IDs, even when
/// none of them match.
pub fn canonicalize(input: &PlanInput, snapshot: &CatalogSnapshot) -> PlanRequest {
    let mut completed_ids: BTreeSet<String> = input.completed_ids.iter().cloned().collect();
    completed_ids.extend(snapshot.ids_for_codes(&input.completed_codes));

    let target = if input.target_codes.is_empty() {
        input.target_ids.clone()
    } else {
        Target::ids(snapshot.ids_for_codes(&input.target_codes))
    };

    PlanRequest {
        completed_ids,
        target,
        start: TermSlot::new(input.start_year, input.start_term),
        units_per_term: input.units_per_term,
        terms_remaining: input.terms_remaining,
        ge_units_done: input.ge_units_done,
        writing_satisfied: input.writing_satisfied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FixedGePool, InMemoryCatalog};
    use crate::error::CatalogError;
    use crate::models::{CourseRef, TermName};
    use crate::validation::ValidationErrorKind;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            CourseRef::new("cse100", 4)
                .with_code("CSE 100")
                .with_offering(2025, TermName::Fall),
            CourseRef::new("cse101", 4)
                .with_code("CSE 101")
                .with_prerequisite("cse100")
                .with_offering(2026, TermName::Winter),
            CourseRef::new("cse110", 4)
                .with_code("CSE 110")
                .with_offering(2025, TermName::Fall),
        ])
        .unwrap()
    }

    struct DownCatalog;

    impl CatalogProvider for DownCatalog {
        fn fetch_courses(&self, _target: &Target) -> Result<Vec<CourseRef>, CatalogError> {
            Err(CatalogError::Unavailable("connection refused".into()))
        }
    }

    struct DownGePool;

    impl GePoolResolver for DownGePool {
        fn required_ge_units(&self) -> Result<u32, CatalogError> {
            Err(CatalogError::Unavailable("no pool".into()))
        }
    }

    #[test]
    fn test_plan_end_to_end() {
        let service = PlanService::new(catalog(), FixedGePool::new(0));
        let input = PlanInput::new(2025, TermName::Fall, 16, 2)
            .with_target_codes(["cse 100", "CSE 101"]);
        let result = service.plan(&input).unwrap();
        assert_eq!(result.terms[0].course_ids, vec!["cse100"]);
        assert_eq!(result.terms[1].course_ids, vec!["cse101"]);
        assert!(!result.is_placed("cse110"));
    }

    #[test]
    fn test_completed_codes_merge() {
        let input = PlanInput::new(2025, TermName::Fall, 16, 1)
            .with_completed_ids(["cse110"])
            .with_completed_codes([" cse 100 "]);
        let request = canonicalize(&input, &catalog().snapshot());
        assert!(request.is_completed("cse100"));
        assert!(request.is_completed("cse110"));
        assert!(request.target.is_all());
    }

    #[test]
    fn test_unmatched_target_codes_yield_empty_target() {
        let input = PlanInput::new(2025, TermName::Fall, 16, 1).with_target_codes(["BIO 1"]);
        let request = canonicalize(&input, &catalog().snapshot());
        assert_eq!(request.target, Target::Ids(BTreeSet::new()));
    }

    #[test]
    fn test_invalid_input_rejected() {
        let service = PlanService::new(catalog(), FixedGePool::new(0));
        let err = service
            .plan(&PlanInput::new(2025, TermName::Fall, 40, 0))
            .unwrap_err();
        match err {
            PlanError::Invalid(errors) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].kind, ValidationErrorKind::UnitsOutOfRange);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    /// Counts catalog reads and records the targets asked for.
    #[derive(Default)]
    struct CountingCatalog {
        inner: InMemoryCatalog,
        reads: std::sync::Mutex<Vec<Target>>,
    }

    impl CatalogProvider for CountingCatalog {
        fn fetch_courses(&self, target: &Target) -> Result<Vec<CourseRef>, CatalogError> {
            self.reads.lock().unwrap().push(target.clone());
            self.inner.fetch_courses(target)
        }
    }

    #[test]
    fn test_catalog_read_once_per_call() {
        let service = PlanService::new(
            CountingCatalog {
                inner: catalog(),
                ..Default::default()
            },
            FixedGePool::new(0),
        );
        let input = PlanInput::new(2025, TermName::Fall, 16, 2)
            .with_completed_codes(["CSE 110"])
            .with_target_codes(["CSE 100", "CSE 101"]);
        let result = service.plan(&input).unwrap();

        assert_eq!(result.terms[1].course_ids, vec!["cse101"]);
        assert_eq!(*service.catalog().reads.lock().unwrap(), vec![Target::All]);
    }

    #[test]
    fn test_catalog_failure_surfaces() {
        let service = PlanService::new(DownCatalog, FixedGePool::new(0));
        let err = service
            .plan(&PlanInput::new(2025, TermName::Fall, 16, 1))
            .unwrap_err();
        assert!(matches!(err, PlanError::Catalog(CatalogError::Unavailable(_))));
    }

    #[test]
    fn test_ge_pool_failure_uses_default() {
        let service = PlanService::new(catalog(), DownGePool);
        let input = PlanInput::new(2025, TermName::Fall, 12, 20)
            .with_target(Target::Ids(BTreeSet::new()));
        let result = service.plan(&input).unwrap();
        // Default 48 units, 12 per term → four full terms of GE
        assert_eq!(result.total_ge_units(), 48);
        assert_eq!(result.terms[3].ge_units, 12);
        assert_eq!(result.terms[4].ge_units, 0);
    }
}
