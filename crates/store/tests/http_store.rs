//! Integration tests for the HTTP registrant store client, driven against
//! the in-process stub server.

mod common;

use assert_matches::assert_matches;
use serde_json::json;

use regdesk_store::wire::{NewVisitor, VisitorPatch};
use regdesk_store::{HttpVisitorStore, StoreError, VisitorStore};

async fn client() -> (HttpVisitorStore, common::SharedState) {
    let state = common::seeded_state();
    let base_url = common::spawn_stub(state.clone()).await;
    (HttpVisitorStore::new(base_url), state)
}

// ---------------------------------------------------------------------------
// Test: GET /visitors decodes the wire dialect including nulls
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_visitors_decodes_wire_shape() {
    let (store, _state) = client().await;

    let records = store.list_visitors().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "1");
    assert_eq!(records[0].attendance.as_deref(), Some("1"));
    assert_eq!(records[0].hall, Some(1));
    // Null wire fields decode to None.
    assert_eq!(records[1].email, None);
    assert_eq!(records[1].attendance, None);
    assert_eq!(records[1].hall, None);
}

// ---------------------------------------------------------------------------
// Test: POST /visitors returns the server-assigned id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_visitor_returns_server_assigned_id() {
    let (store, state) = client().await;

    let body = NewVisitor {
        name: "Michael Lee".to_string(),
        email: Some("mlee@example.com".to_string()),
        phone: None,
        organization: Some("Global Systems".to_string()),
        department: None,
        job_title: Some("Director".to_string()),
        country: Some("UK".to_string()),
        attendance: Some("1".to_string()),
        hall: Some(2),
    };
    let record = store.create_visitor(&body).await.unwrap();

    assert_eq!(record.id, "3");
    assert_eq!(record.name, "Michael Lee");
    assert_eq!(record.hall, Some(2));

    // The stub persisted exactly what was sent, plus the id.
    let state = state.lock().unwrap();
    assert_eq!(state.visitors.len(), 3);
    assert_eq!(state.visitors[2]["attendance"], json!("1"));
    assert_eq!(state.visitors[2]["phone"], json!(null));
}

// ---------------------------------------------------------------------------
// Test: PUT /visitors/{id} confirms the new hall
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_visitor_confirms_hall_change() {
    let (store, _state) = client().await;

    let patch = VisitorPatch {
        id: "2".to_string(),
        hall: Some(2),
    };
    let record = store.update_visitor("2", &patch).await.unwrap();

    assert_eq!(record.id, "2");
    assert_eq!(record.hall, Some(2));
}

#[tokio::test]
async fn update_clears_hall_with_null() {
    let (store, state) = client().await;

    let patch = VisitorPatch {
        id: "1".to_string(),
        hall: None,
    };
    let record = store.update_visitor("1", &patch).await.unwrap();

    assert_eq!(record.hall, None);
    let state = state.lock().unwrap();
    assert_eq!(state.visitors[0]["hall"], json!(null));
}

// ---------------------------------------------------------------------------
// Test: DELETE /visitors/{id} removes the row
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_visitor_removes_record() {
    let (store, state) = client().await;

    store.delete_visitor("1").await.unwrap();

    let state = state.lock().unwrap();
    assert_eq!(state.visitors.len(), 1);
    assert_eq!(state.visitors[0]["id"], json!("2"));
}

// ---------------------------------------------------------------------------
// Test: GET /halls decodes into the domain hall type
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_halls_decodes() {
    let (store, _state) = client().await;

    let halls = store.list_halls().await.unwrap();

    assert_eq!(halls.len(), 2);
    assert_eq!(halls[0].name, "Blue Hall");
    assert_eq!(halls[0].capacity, 100);
    assert_eq!(halls[0].availability, 60);
}

// ---------------------------------------------------------------------------
// Test: non-2xx responses surface as typed API errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_visitor_surfaces_api_error() {
    let (store, _state) = client().await;

    let patch = VisitorPatch {
        id: "99".to_string(),
        hall: Some(1),
    };
    let err = store.update_visitor("99", &patch).await.unwrap_err();

    assert_matches!(err, StoreError::Api { status: 404, .. });
}

#[tokio::test]
async fn delete_of_unknown_visitor_surfaces_api_error() {
    let (store, _state) = client().await;

    let err = store.delete_visitor("99").await.unwrap_err();

    assert_matches!(err, StoreError::Api { status: 404, .. });
}
