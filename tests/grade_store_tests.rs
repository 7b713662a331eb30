//! Grade boundary store.

mod support;

use rust_decimal_macros::dec;
use schooldesk::domain::GradeBoundaryRequest;
use schooldesk::error::ApiError;
use schooldesk::testkit::domain::grade_boundary;
use support::harness::Harness;

fn scale() -> Vec<schooldesk::domain::GradeBoundary> {
    vec![
        grade_boundary(3, "C", dec!(50), dec!(64.99), true),
        grade_boundary(1, "A", dec!(80), dec!(100), true),
        grade_boundary(4, "F", dec!(0), dec!(32.99), false),
        grade_boundary(2, "B", dec!(65), dec!(79.99), true),
    ]
}

#[tokio::test]
async fn derived_views_split_and_sort() {
    let h = Harness::new();
    h.backend.respond("get_all_grade_boundaries", scale());
    let store = &h.app.grade_boundaries;

    store.load_grade_boundaries().await.unwrap();

    let passing: Vec<String> = store.passing_grades().into_iter().map(|b| b.grade).collect();
    assert_eq!(passing, vec!["C", "A", "B"]);
    let failing: Vec<String> = store.failing_grades().into_iter().map(|b| b.grade).collect();
    assert_eq!(failing, vec!["F"]);
    let sorted: Vec<String> = store
        .sorted_grade_boundaries()
        .into_iter()
        .map(|b| b.grade)
        .collect();
    assert_eq!(sorted, vec!["A", "B", "C", "F"]);
    // Sorting is a view; the cache keeps server order.
    assert_eq!(store.grade_boundaries()[0].grade, "C");
}

#[tokio::test]
async fn calculate_grade_remembers_last_result() {
    let h = Harness::new();
    h.backend.respond("calculate_grade", "B".to_string());
    let store = &h.app.grade_boundaries;

    let grade = store.calculate_grade(dec!(72.50)).await.unwrap();

    assert_eq!(grade, "B");
    assert_eq!(store.last_calculated_grade().as_deref(), Some("B"));
    assert_eq!(h.backend.last_args("calculate_grade").as_deref(), Some("72.5"));
}

#[tokio::test]
async fn failed_calculation_keeps_previous_grade() {
    let h = Harness::new();
    h.backend
        .respond("calculate_grade", "A".to_string())
        .fail(
            "calculate_grade",
            ApiError::Http {
                status: 404,
                message: Some("No grade boundary for 120".into()),
            },
        );
    let store = &h.app.grade_boundaries;
    store.calculate_grade(dec!(91)).await.unwrap();

    assert!(store.calculate_grade(dec!(120)).await.is_err());
    assert_eq!(store.last_calculated_grade().as_deref(), Some("A"));
    assert_eq!(store.error().as_deref(), Some("No grade boundary for 120"));
}

#[tokio::test]
async fn setup_defaults_replaces_cache() {
    let h = Harness::new();
    h.backend
        .respond(
            "get_all_grade_boundaries",
            vec![grade_boundary(9, "X", dec!(0), dec!(100), true)],
        )
        .respond("setup_default_grade_boundaries", scale());
    let store = &h.app.grade_boundaries;
    store.load_grade_boundaries().await.unwrap();

    store.setup_default_grade_boundaries().await.unwrap();

    let ids: Vec<i64> = store.grade_boundaries().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![3, 1, 4, 2]);
}

#[tokio::test]
async fn create_update_delete_boundary() {
    let h = Harness::new();
    let request = GradeBoundaryRequest {
        grade: "D".into(),
        min_percentage: dec!(33),
        max_percentage: dec!(49.99),
        is_passing: true,
    };
    h.backend
        .respond("create_grade_boundary", grade_boundary(5, "D", dec!(33), dec!(49.99), true))
        .respond("update_grade_boundary", grade_boundary(5, "D", dec!(35), dec!(49.99), true))
        .respond("delete_grade_boundary", "Deleted".to_string());
    let store = &h.app.grade_boundaries;

    store.create_grade_boundary(&request).await.unwrap();
    assert_eq!(store.grade_boundaries()[0].id, 5);
    store.set_selected_grade_boundary(store.grade_boundaries().first().cloned());

    store.update_grade_boundary(5, &request).await.unwrap();
    assert_eq!(store.grade_boundaries()[0].min_percentage, dec!(35));
    assert_eq!(
        store.selected_grade_boundary().map(|b| b.min_percentage),
        Some(dec!(35))
    );

    store.delete_grade_boundary(5).await.unwrap();
    assert!(!store.has_grade_boundaries());
    assert_eq!(store.selected_grade_boundary(), None);
}
