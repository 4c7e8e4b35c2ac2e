//! End-to-end planning scenarios.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use u_courseplan::catalog::{CatalogSnapshot, FixedGePool, InMemoryCatalog};
use u_courseplan::models::{
    CourseRef, PlanInput, PlanRequest, Target, TermName, TermSlot, WritingStatus,
};
use u_courseplan::scheduler::{TermPlanner, UNRESOLVED_WARNING};
use u_courseplan::validation::validate_catalog;
use u_courseplan::{PlanError, PlanService};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A small slice of a real CS/DS catalog.
fn ucsd_catalog() -> Vec<CourseRef> {
    use TermName::*;
    vec![
        CourseRef::new("math18", 4).with_code("MATH 18").with_workload(3)
            .with_offering(2025, Fall).with_offering(2026, Winter),
        CourseRef::new("math20c", 4).with_code("MATH 20C").with_workload(3)
            .with_offering(2025, Fall).with_offering(2026, Spring),
        CourseRef::new("cse100", 4).with_code("CSE 100").with_workload(4)
            .with_offering(2025, Fall).with_offering(2026, Spring),
        CourseRef::new("cse101", 4).with_code("CSE 101").with_workload(5)
            .with_prerequisite("cse100")
            .with_offering(2026, Winter).with_offering(2026, Fall),
        CourseRef::new("cse110", 4).with_code("CSE 110").with_workload(5)
            .with_offering(2025, Fall).with_offering(2026, Winter).with_offering(2026, Spring),
        CourseRef::new("cse151a", 4).with_code("CSE 151A").with_workload(4)
            .with_prerequisite("math18").with_prerequisite("math20c")
            .with_offering(2026, Winter).with_offering(2026, Fall),
        CourseRef::new("cse151b", 4).with_code("CSE 151B").with_workload(5)
            .with_prerequisite("cse151a")
            .with_offering(2026, Spring).with_offering(2027, Winter),
        CourseRef::new("cse158", 4).with_code("CSE 158").with_workload(3)
            .with_prerequisite("cse100")
            .with_offering(2026, Winter).with_offering(2026, Spring),
    ]
}

fn term_of(result: &u_courseplan::models::PlanResult, id: &str) -> usize {
    result
        .term_index_of(id)
        .unwrap_or_else(|| panic!("{id} not placed"))
}

#[test]
fn prerequisite_chain_across_two_terms() {
    init_tracing();
    let snapshot = CatalogSnapshot::new(vec![
        CourseRef::new("CSE 100", 4).with_offering(2025, TermName::Fall),
        CourseRef::new("CSE 101", 4)
            .with_prerequisite("CSE 100")
            .with_offering(2026, TermName::Winter),
    ])
    .unwrap();
    let request = PlanRequest::new(2025, TermName::Fall, 16, 2)
        .with_target(Target::ids(["CSE 100", "CSE 101"]));

    let result = TermPlanner::new().plan(&snapshot, 48, &request);

    assert_eq!(result.terms[0].slot(), TermSlot::new(2025, TermName::Fall));
    assert_eq!(result.terms[0].course_ids, vec!["CSE 100"]);
    assert_eq!(result.terms[0].units, 16);
    assert_eq!(result.terms[0].ge_units, 12);
    assert_eq!(result.terms[1].slot(), TermSlot::new(2026, TermName::Winter));
    assert_eq!(result.terms[1].course_ids, vec!["CSE 101"]);
    assert!(result.warnings.is_empty());
}

#[test]
fn nothing_offered_yields_ge_only_terms() {
    init_tracing();
    let snapshot = CatalogSnapshot::new(vec![
        CourseRef::new("a", 4),
        CourseRef::new("b", 4).with_prerequisite("a"),
        CourseRef::new("c", 4).with_offering(2030, TermName::Fall),
    ])
    .unwrap();
    let request = PlanRequest::new(2025, TermName::Fall, 16, 4);

    let result = TermPlanner::new().plan(&snapshot, 48, &request);

    assert!(result.warnings.is_empty());
    assert!(result.terms.iter().all(|t| t.course_ids.is_empty()));
    let ge: Vec<u32> = result.terms.iter().map(|t| t.ge_units).collect();
    assert_eq!(ge, vec![16, 16, 16, 0]);
    assert_eq!(result.summary.ge_units_remaining, 0);
    assert_eq!(result.summary.total_units, 48);
}

#[test]
fn ge_filler_stops_at_debt() {
    let snapshot = CatalogSnapshot::default();
    let request = PlanRequest::new(2025, TermName::Fall, 10, 1);

    let result = TermPlanner::new().plan(&snapshot, 7, &request);

    assert_eq!(result.terms[0].ge_units, 7);
    assert_eq!(result.terms[0].units, 7);
    assert_eq!(result.summary.ge_units_remaining, 0);
}

#[test]
fn mutual_prerequisites_are_excluded_with_one_warning() {
    init_tracing();
    let snapshot = CatalogSnapshot::new(vec![
        CourseRef::new("x", 4)
            .with_prerequisite("y")
            .with_offering(2025, TermName::Fall)
            .with_offering(2025, TermName::Winter),
        CourseRef::new("y", 4)
            .with_prerequisite("x")
            .with_offering(2025, TermName::Fall)
            .with_offering(2025, TermName::Winter),
    ])
    .unwrap();
    let request = PlanRequest::new(2025, TermName::Fall, 16, 2)
        .with_target(Target::ids(["x", "y"]));

    let result = TermPlanner::new().plan(&snapshot, 0, &request);

    assert!(!result.is_placed("x"));
    assert!(!result.is_placed("y"));
    assert_eq!(result.warnings, vec![UNRESOLVED_WARNING.to_string()]);
}

#[test]
fn realistic_catalog_respects_order_and_caps() {
    init_tracing();
    let courses = ucsd_catalog();
    assert!(validate_catalog(&courses).is_ok());

    let snapshot = CatalogSnapshot::new(courses).unwrap();
    let request = PlanRequest::new(2025, TermName::Fall, 16, 6).with_ge_units_done(36);
    let result = TermPlanner::new().plan(&snapshot, 48, &request);

    for term in &result.terms {
        assert!(term.units <= 16, "{term:?}");
        assert!(term.workload <= 10, "{term:?}");
    }

    // Fall 2025: cse110 (5) + cse100 (4) fill workload 9; math18 (3) would hit 12
    assert_eq!(result.terms[0].course_ids, vec!["cse110", "cse100"]);

    assert!(term_of(&result, "cse101") > term_of(&result, "cse100"));
    assert!(term_of(&result, "cse158") > term_of(&result, "cse100"));
    assert!(term_of(&result, "cse151a") > term_of(&result, "math18"));
    assert!(term_of(&result, "cse151a") > term_of(&result, "math20c"));
    assert!(term_of(&result, "cse151b") > term_of(&result, "cse151a"));

    assert_eq!(result.summary.ge_units_remaining, 0);
    assert_eq!(result.summary.writing, WritingStatus::Pending);
}

#[test]
fn repeated_calls_are_identical() {
    let snapshot = CatalogSnapshot::new(ucsd_catalog()).unwrap();
    let request = PlanRequest::new(2025, TermName::Fall, 12, 8).with_completed(["math18"]);
    let planner = TermPlanner::new();

    let first = planner.plan(&snapshot, 48, &request);
    for _ in 0..5 {
        assert_eq!(planner.plan(&snapshot, 48, &request), first);
    }
}

#[test]
fn parallel_calls_share_one_snapshot() {
    let snapshot = CatalogSnapshot::new(ucsd_catalog()).unwrap();
    let planner = Arc::new(TermPlanner::new());
    let expected = planner.plan(&snapshot, 48, &PlanRequest::new(2025, TermName::Fall, 16, 6));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let snapshot = snapshot.clone();
            let planner = Arc::clone(&planner);
            thread::spawn(move || {
                planner.plan(&snapshot, 48, &PlanRequest::new(2025, TermName::Fall, 16, 6))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn service_plans_from_codes() {
    init_tracing();
    let catalog = InMemoryCatalog::new(ucsd_catalog()).unwrap();
    let service = PlanService::new(catalog, FixedGePool::new(48));

    let input: PlanInput = serde_json::from_str(
        r#"{
            "completed_codes": ["cse 100"],
            "target_codes": ["CSE 101", "CSE 158"],
            "start_year": 2025,
            "start_term": "Winter",
            "units_per_term": 12,
            "terms_remaining": 3,
            "ge_units_done": 40,
            "writing_satisfied": true
        }"#,
    )
    .unwrap();

    let result = service.plan(&input).unwrap();

    // Horizon is Winter, Spring, Summer 2025; neither target is offered yet
    assert_eq!(result.terms[0].slot(), TermSlot::new(2025, TermName::Winter));
    assert!(result.terms.iter().all(|t| t.course_ids.is_empty()));
    assert_eq!(result.total_ge_units(), 8);
    assert_eq!(result.summary.writing, WritingStatus::Done);
}

#[test]
fn service_rejects_out_of_range_terms() {
    let catalog = InMemoryCatalog::new(ucsd_catalog()).unwrap();
    let service = PlanService::new(catalog, FixedGePool::new(48));
    let input = PlanInput::new(2025, TermName::Fall, 16, 21);
    assert!(matches!(service.plan(&input), Err(PlanError::Invalid(_))));
}

#[test]
fn completed_set_excluded_everywhere() {
    let snapshot = CatalogSnapshot::new(ucsd_catalog()).unwrap();
    let completed: BTreeSet<String> = ["cse100", "math18", "math20c"]
        .into_iter()
        .map(String::from)
        .collect();
    let mut request = PlanRequest::new(2025, TermName::Fall, 16, 6);
    request.completed_ids = completed.clone();

    let result = TermPlanner::new().plan(&snapshot, 0, &request);
    for id in &completed {
        assert!(!result.is_placed(id));
    }
    // Completed prerequisites unlock dependents in the first offering term
    assert_eq!(term_of(&result, "cse151a"), 1);
}
