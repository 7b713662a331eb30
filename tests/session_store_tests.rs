//! Session store behaviour against a scripted backend.

mod support;

use chrono::NaiveDate;
use schooldesk::domain::{ListParams, SessionRequest, SessionStatus};
use schooldesk::error::ApiError;
use schooldesk::store::SessionState;
use schooldesk::testkit::domain::{page, session, session_with_status};
use support::harness::Harness;

fn request(name: &str) -> SessionRequest {
    SessionRequest {
        session_name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
    }
}

#[tokio::test]
async fn first_page_of_three_sessions_fits_one_page() {
    let h = Harness::new();
    h.backend.respond(
        "get_all_sessions",
        page(
            vec![session(1, "2022-23"), session(2, "2023-24"), session(3, "2024-25")],
            0,
            10,
            3,
        ),
    );

    let sessions = h
        .app
        .sessions
        .load_sessions(&ListParams::page(0, 10))
        .await
        .unwrap();

    let store = &h.app.sessions;
    assert_eq!(sessions.len(), 3);
    assert_eq!(store.sessions().len(), 3);
    assert_eq!(store.pagination().total_pages, 1);
    assert_eq!(store.total_pages(), 1);
    assert!(!store.can_load_more());
    assert!(store.has_sessions());
    assert!(!store.is_loading());
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn created_session_appears_once_at_head() {
    let h = Harness::new();
    h.backend
        .respond(
            "get_all_sessions",
            page(vec![session(1, "2023-24"), session(2, "2024-25")], 0, 10, 2),
        )
        .respond("create_session", session(9, "2025-26"))
        .respond("create_session", session(2, "2024-25"));
    let store = &h.app.sessions;
    store.load_sessions(&ListParams::default()).await.unwrap();

    store.create_session(&request("2025-26")).await.unwrap();
    let ids: Vec<i64> = store.sessions().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![9, 1, 2]);

    // A create echoing an already cached id does not duplicate it.
    store.create_session(&request("2024-25")).await.unwrap();
    let ids: Vec<i64> = store.sessions().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2, 9, 1]);
}

#[tokio::test]
async fn failed_create_records_server_message_and_keeps_items() {
    let h = Harness::new();
    h.backend
        .respond("get_all_sessions", page(vec![session(1, "2023-24")], 0, 10, 1))
        .fail(
            "create_session",
            ApiError::Http {
                status: 500,
                message: Some("Session name already exists".into()),
            },
        );
    let store = &h.app.sessions;
    store.load_sessions(&ListParams::default()).await.unwrap();
    let before = store.sessions();

    let result = store.create_session(&request("2023-24")).await;

    assert!(result.is_err());
    assert_eq!(store.error().as_deref(), Some("Session name already exists"));
    assert_eq!(store.sessions(), before);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn failed_create_without_message_uses_fallback() {
    let h = Harness::new();
    h.backend.fail(
        "create_session",
        ApiError::Http {
            status: 500,
            message: None,
        },
    );

    let result = h.app.sessions.create_session(&request("2025-26")).await;

    assert!(result.is_err());
    assert_eq!(
        h.app.sessions.error().as_deref(),
        Some("Failed to create session")
    );
    assert!(h.app.sessions.sessions().is_empty());
}

#[tokio::test]
async fn next_operation_clears_previous_error() {
    let h = Harness::new();
    h.backend
        .fail("get_active_session", ApiError::Network("refused".into()))
        .respond("get_active_session", session_with_status(4, "2024-25", SessionStatus::Active));
    let store = &h.app.sessions;

    assert!(store.load_active_session().await.is_err());
    assert_eq!(store.error().as_deref(), Some("Failed to load active session"));

    store.load_active_session().await.unwrap();
    assert_eq!(store.error(), None);
    assert!(store.has_active_session());
    assert_eq!(store.active_session().map(|s| s.id), Some(4));
}

#[tokio::test]
async fn loading_flag_tracks_the_pending_call() {
    let h = Harness::new();
    h.backend
        .respond("get_upcoming_session", session_with_status(5, "2025-26", SessionStatus::Upcoming));
    let release = h.backend.pause("get_upcoming_session");
    let store = &h.app.sessions;

    let observe = async {
        tokio::task::yield_now().await;
        let pending = store.is_loading();
        release.send(()).unwrap();
        pending
    };
    let (result, was_loading) = tokio::join!(store.load_upcoming_session(), observe);

    assert!(was_loading);
    assert!(result.is_ok());
    assert!(!store.is_loading());
    assert!(store.has_upcoming_session());
}

#[tokio::test]
async fn overlapping_calls_each_apply_their_own_update() {
    let h = Harness::new();
    h.backend
        .respond(
            "get_all_sessions",
            page(vec![session(1, "2023-24"), session(2, "2024-25")], 0, 10, 2),
        )
        .respond("create_session", session(9, "2025-26"))
        .respond("delete_session", "Session deleted successfully".to_string());
    let store = &h.app.sessions;
    store.load_sessions(&ListParams::default()).await.unwrap();
    let release = h.backend.pause("create_session");

    let interleave = async {
        tokio::task::yield_now().await;
        assert!(store.is_loading());
        store.delete_session(1).await.unwrap();
        // The delete finished last so far; its completion decides the flag.
        let loading_after_delete = store.is_loading();
        let ids_after_delete: Vec<i64> = store.sessions().iter().map(|s| s.id).collect();
        release.send(()).unwrap();
        (loading_after_delete, ids_after_delete)
    };
    let create_req = request("2025-26");
    let (created, (loading_after_delete, ids_after_delete)) =
        tokio::join!(store.create_session(&create_req), interleave);

    assert_eq!(created.unwrap().id, 9);
    assert!(!loading_after_delete);
    assert_eq!(ids_after_delete, vec![2]);
    let ids: Vec<i64> = store.sessions().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![9, 2]);
    assert!(!store.is_loading());
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn delete_removes_item_and_clears_selection() {
    let h = Harness::new();
    h.backend
        .respond(
            "get_all_sessions",
            page(vec![session(1, "2023-24"), session(2, "2024-25")], 0, 10, 2),
        )
        .respond("delete_session", "Session deleted successfully".to_string());
    let store = &h.app.sessions;
    store.load_sessions(&ListParams::default()).await.unwrap();
    store.set_selected_session(Some(session(2, "2024-25")));

    store.delete_session(2).await.unwrap();

    assert!(store.sessions().iter().all(|s| s.id != 2));
    assert_eq!(store.selected_session(), None);
}

#[tokio::test]
async fn update_keeps_list_and_selection_in_step() {
    let h = Harness::new();
    let mut renamed = session(1, "2023-2024");
    renamed.status = SessionStatus::Active;
    h.backend
        .respond("get_all_sessions", page(vec![session(1, "2023-24")], 0, 10, 1))
        .respond("get_session_by_id", session(1, "2023-24"))
        .respond("update_session", renamed.clone());
    let store = &h.app.sessions;
    store.load_sessions(&ListParams::default()).await.unwrap();
    store.load_session_by_id(1).await.unwrap();

    store.update_session(1, &request("2023-2024")).await.unwrap();

    assert_eq!(store.sessions(), vec![renamed.clone()]);
    assert_eq!(store.selected_session(), Some(renamed));
}

#[tokio::test]
async fn status_transitions_are_idempotent() {
    let h = Harness::new();
    h.backend
        .respond("get_all_sessions", page(vec![session(3, "2024-25")], 0, 10, 1))
        .respond("activate_session", "Session activated".to_string())
        .respond("activate_session", "Session activated".to_string())
        .respond("archive_session", "Session archived".to_string());
    let store = &h.app.sessions;
    store.load_sessions(&ListParams::default()).await.unwrap();
    store.set_selected_session(Some(session(3, "2024-25")));

    store.activate_session(3).await.unwrap();
    store.activate_session(3).await.unwrap();
    assert_eq!(store.sessions()[0].status, SessionStatus::Active);
    assert_eq!(
        store.selected_session().map(|s| s.status),
        Some(SessionStatus::Active)
    );
    assert_eq!(h.backend.call_count("activate_session"), 2);

    store.archive_session(3).await.unwrap();
    assert_eq!(store.sessions()[0].status, SessionStatus::Archived);
}

#[tokio::test]
async fn status_listing_replaces_items_and_pagination() {
    let h = Harness::new();
    h.backend.respond(
        "get_sessions_by_status",
        page(
            vec![session_with_status(7, "2019-20", SessionStatus::Archived)],
            1,
            1,
            3,
        ),
    );
    let store = &h.app.sessions;

    store
        .load_sessions_by_status(SessionStatus::Archived, 1, Some(1))
        .await
        .unwrap();

    assert_eq!(store.sessions().len(), 1);
    assert_eq!(store.current_page(), 1);
    assert!(store.can_load_more());
    assert_eq!(
        h.backend.last_args("get_sessions_by_status").as_deref(),
        Some("ARCHIVED 1 Some(1)")
    );
}

#[tokio::test]
async fn subscribers_see_each_write() {
    let h = Harness::new();
    h.backend
        .respond("get_session_by_id", session(1, "2023-24"));
    let store = &h.app.sessions;
    let mut rx = store.subscribe();

    store.load_session_by_id(1).await.unwrap();

    let pending = rx.recv().await.unwrap();
    assert!(pending.is_loading);
    let settled = rx.recv().await.unwrap();
    assert!(!settled.is_loading);
    assert_eq!(settled.selected_session.map(|s| s.id), Some(1));
}

#[tokio::test]
async fn reset_restores_initial_state() {
    let h = Harness::new();
    h.backend.respond("get_all_sessions", page(vec![session(1, "2023-24")], 0, 10, 1));
    let store = &h.app.sessions;
    store.load_sessions(&ListParams::default()).await.unwrap();

    store.reset();

    assert!(!store.has_sessions());
    assert_eq!(store.state(), SessionState::default());
}
