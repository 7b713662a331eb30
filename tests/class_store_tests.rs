//! Class and subject stores against a scripted backend.

mod support;

use schooldesk::domain::{ClassRequest, ListParams, SubjectRequest};
use schooldesk::error::ApiError;
use schooldesk::testkit::domain::{class, page, subject};
use support::harness::Harness;

fn class_request(name: &str) -> ClassRequest {
    ClassRequest {
        session_id: 1,
        class_name: name.to_string(),
        section: Some("A".into()),
        capacity: Some(35),
    }
}

#[tokio::test]
async fn classes_load_by_session_with_pagination() {
    let h = Harness::new();
    h.backend.respond(
        "get_classes_by_session",
        page(vec![class(1, 4, "Grade 1"), class(2, 4, "Grade 2")], 0, 2, 5),
    );
    let store = &h.app.classes;
    assert_eq!(store.total_pages(), 0);

    let classes = store.load_classes_by_session(4, 0, Some(2)).await.unwrap();

    assert_eq!(classes.len(), 2);
    assert!(store.has_classes());
    assert!(store.can_load_more());
    assert_eq!(store.current_page(), 0);
    assert_eq!(store.total_pages(), 3);
    assert_eq!(
        h.backend.last_args("get_classes_by_session").as_deref(),
        Some("4 0 Some(2)")
    );
}

#[tokio::test]
async fn active_classes_fill_their_own_slot() {
    let h = Harness::new();
    h.backend
        .respond("get_active_classes_by_session", vec![class(3, 4, "Grade 3")]);
    let store = &h.app.classes;
    assert!(!store.has_active_classes());

    store.load_active_classes_by_session(4).await.unwrap();

    assert_eq!(store.active_classes().len(), 1);
    assert!(store.has_active_classes());
    assert!(store.classes().is_empty());
    assert!(!store.has_classes());
}

#[tokio::test]
async fn deactivate_twice_keeps_class_inactive() {
    let h = Harness::new();
    h.backend
        .respond("get_all_classes", page(vec![class(1, 1, "Grade 1")], 0, 10, 1))
        .respond("get_class_by_id", class(1, 1, "Grade 1"))
        .respond("deactivate_class", "Class deactivated".to_string())
        .respond("deactivate_class", "Class deactivated".to_string())
        .respond("activate_class", "Class activated".to_string());
    let store = &h.app.classes;
    store.load_classes(&ListParams::default()).await.unwrap();
    store.load_class_by_id(1).await.unwrap();

    store.deactivate_class(1).await.unwrap();
    store.deactivate_class(1).await.unwrap();
    assert!(!store.classes()[0].is_active);
    assert_eq!(store.selected_class().map(|c| c.is_active), Some(false));

    store.activate_class(1).await.unwrap();
    assert!(store.classes()[0].is_active);
}

#[tokio::test]
async fn class_create_update_delete_cycle() {
    let h = Harness::new();
    let mut renamed = class(8, 1, "Grade 8");
    renamed.section = Some("B".into());
    h.backend
        .respond("create_class", class(8, 1, "Grade 8"))
        .respond("update_class", renamed.clone())
        .respond("delete_class", "Class deleted".to_string());
    let store = &h.app.classes;

    store.create_class(&class_request("Grade 8")).await.unwrap();
    assert_eq!(store.classes()[0].id, 8);

    store.set_selected_class(Some(class(8, 1, "Grade 8")));
    store.update_class(8, &class_request("Grade 8")).await.unwrap();
    assert_eq!(store.classes(), vec![renamed.clone()]);
    assert_eq!(store.selected_class(), Some(renamed));

    store.delete_class(8).await.unwrap();
    assert!(!store.has_classes());
    assert_eq!(store.selected_class(), None);
}

#[tokio::test]
async fn class_delete_failure_keeps_cache() {
    let h = Harness::new();
    h.backend
        .respond("create_class", class(8, 1, "Grade 8"))
        .fail(
            "delete_class",
            ApiError::Http {
                status: 409,
                message: Some("Class has enrolled students".into()),
            },
        );
    let store = &h.app.classes;
    store.create_class(&class_request("Grade 8")).await.unwrap();

    assert!(store.delete_class(8).await.is_err());
    assert_eq!(store.classes().len(), 1);
    assert_eq!(store.error().as_deref(), Some("Class has enrolled students"));

    store.clear_error();
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn subjects_by_status_and_active_list() {
    let h = Harness::new();
    let mut archived = subject(2, "Latin", "LAT");
    archived.is_active = false;
    h.backend
        .respond("get_subjects_by_status", page(vec![archived], 0, 10, 1))
        .respond(
            "get_active_subjects",
            vec![subject(1, "Mathematics", "MATH"), subject(3, "Physics", "PHY")],
        );
    let store = &h.app.subjects;

    let inactive = store.load_subjects_by_status(false, 0, None).await.unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(store.subjects().len(), 1);
    assert_eq!(store.current_page(), 0);
    assert_eq!(store.total_pages(), 1);
    assert!(!store.can_load_more());
    assert!(!store.has_active_subjects());

    store.load_active_subjects().await.unwrap();
    assert_eq!(store.active_subjects().len(), 2);
    assert!(store.has_active_subjects());
    assert_eq!(store.subjects().len(), 1);
}

#[tokio::test]
async fn subject_failure_without_message_uses_fallback() {
    let h = Harness::new();
    h.backend.fail("create_subject", ApiError::Network("timed out".into()));
    let store = &h.app.subjects;

    let request = SubjectRequest {
        subject_name: "Biology".into(),
        subject_code: "BIO".into(),
        is_active: None,
    };
    assert!(store.create_subject(&request).await.is_err());
    assert_eq!(store.error().as_deref(), Some("Failed to create subject"));
    assert!(!store.has_subjects());
}

#[tokio::test]
async fn subject_activation_patches_list_and_selection() {
    let h = Harness::new();
    let mut latin = subject(2, "Latin", "LAT");
    latin.is_active = false;
    h.backend
        .respond("get_all_subjects", page(vec![latin.clone()], 0, 10, 1))
        .respond("activate_subject", "Subject activated".to_string())
        .respond("delete_subject", "Subject deleted".to_string());
    let store = &h.app.subjects;
    store.load_subjects(&ListParams::default()).await.unwrap();
    store.set_selected_subject(Some(latin));

    store.activate_subject(2).await.unwrap();
    assert!(store.subjects()[0].is_active);
    assert_eq!(store.selected_subject().map(|s| s.is_active), Some(true));

    store.delete_subject(2).await.unwrap();
    assert!(store.subjects().is_empty());
    assert_eq!(store.selected_subject(), None);
}
