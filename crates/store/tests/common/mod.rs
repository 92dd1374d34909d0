//! Shared test harness: an in-process stub of the registrant store.
//!
//! Binds an axum router to an ephemeral loopback port and serves the five
//! collaborator endpoints over plain JSON values, so the HTTP client is
//! exercised against real request/response plumbing.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Mutable stub state shared between the server task and the test body.
#[derive(Debug)]
pub struct StubState {
    pub visitors: Vec<Value>,
    pub halls: Vec<Value>,
    pub next_id: i64,
}

pub type SharedState = Arc<Mutex<StubState>>;

/// Seed rows matching the store's wire dialect.
pub fn seeded_state() -> SharedState {
    Arc::new(Mutex::new(StubState {
        visitors: vec![
            json!({
                "id": "1",
                "name": "Alex Chen",
                "email": "alex.chen@example.com",
                "phone": "+1-555-0123",
                "organization": "Vercel Inc.",
                "department": "Engineering",
                "job_title": "Senior Developer",
                "country": "USA",
                "attendance": "1",
                "hall": 1,
            }),
            json!({
                "id": "2",
                "name": "Sarah Johnson",
                "email": null,
                "phone": null,
                "organization": "Tech Innovations",
                "department": null,
                "job_title": "Product Manager",
                "country": null,
                "attendance": null,
                "hall": null,
            }),
        ],
        halls: vec![
            json!({ "id": 1, "name": "Blue Hall", "capacity": 100, "availability": 60 }),
            json!({ "id": 2, "name": "Green Hall", "capacity": 50, "availability": 50 }),
        ],
        next_id: 3,
    }))
}

/// Spawn the stub server on an ephemeral port; returns its base URL.
pub async fn spawn_stub(state: SharedState) -> String {
    let app = Router::new()
        .route("/visitors", get(list_visitors).post(create_visitor))
        .route(
            "/visitors/{id}",
            axum::routing::put(update_visitor).delete(delete_visitor),
        )
        .route("/halls", get(list_halls))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    format!("http://{addr}")
}

async fn list_visitors(State(state): State<SharedState>) -> Json<Value> {
    let state = state.lock().unwrap();
    Json(Value::Array(state.visitors.clone()))
}

async fn create_visitor(
    State(state): State<SharedState>,
    Json(mut body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    let id = state.next_id;
    state.next_id += 1;
    body["id"] = json!(id.to_string());
    state.visitors.push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn update_visitor(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut state = state.lock().unwrap();
    let row = state
        .visitors
        .iter_mut()
        .find(|v| v["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    row["hall"] = patch["hall"].clone();
    Ok(Json(row.clone()))
}

async fn delete_visitor(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> StatusCode {
    let mut state = state.lock().unwrap();
    let before = state.visitors.len();
    state.visitors.retain(|v| v["id"] != json!(id));
    if state.visitors.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn list_halls(State(state): State<SharedState>) -> Json<Value> {
    let state = state.lock().unwrap();
    Json(Value::Array(state.halls.clone()))
}
