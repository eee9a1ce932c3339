//! In-process stub backend for integration tests.
//!
//! Serves the five portfolio endpoints from an in-memory collection so
//! the controller can be exercised over real HTTP. Each handler bumps
//! a request counter, letting tests assert that an operation issued
//! zero network calls.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use vitrine_core::project::{Project, ProjectDraft};
use vitrine_core::site::SiteConfig;
use vitrine_core::types::DbId;

/// Shared state behind the stub's handlers.
pub struct StubState {
    pub projects: Mutex<Vec<Project>>,
    pub config: SiteConfig,
    next_id: AtomicI64,
    requests: AtomicUsize,
    /// When set, `POST /projects` answers 400 with this message.
    pub create_error: Mutex<Option<String>>,
    /// When `true`, `GET /projects` answers 500.
    pub fail_list: Mutex<bool>,
}

/// A running stub server plus the state handle tests poke at.
pub struct StubServer {
    pub state: Arc<StubState>,
    /// Base URL including the `/api` prefix.
    pub base_url: String,
}

impl StubState {
    /// Total requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

/// A distinctly non-default config, so tests can tell adoption from
/// the seeded defaults.
pub fn stub_config() -> SiteConfig {
    SiteConfig {
        designer_name: "Marina Duarte".to_string(),
        designer_title: "Illustrator & Art Director".to_string(),
        designer_description: "Editorial illustration and visual direction.".to_string(),
        email: "marina@studio.example".to_string(),
        phone: "+55 (21) 98888-7777".to_string(),
        location: "Rio de Janeiro, RJ".to_string(),
    }
}

/// A fully populated project for seeding the stub's collection.
pub fn seed_project(id: DbId, title: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        image: format!("https://img.example/{id}.jpg"),
        category: "Branding".to_string(),
        year: "2025".to_string(),
        client: "Acme".to_string(),
    }
}

/// Start a stub backend on an ephemeral port, pre-seeded with the
/// given projects. Ids for created projects continue after the
/// highest seeded id.
pub async fn spawn_stub(seed: Vec<Project>) -> StubServer {
    let next_id = seed.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    let state = Arc::new(StubState {
        projects: Mutex::new(seed),
        config: stub_config(),
        next_id: AtomicI64::new(next_id),
        requests: AtomicUsize::new(0),
        create_error: Mutex::new(None),
        fail_list: Mutex::new(false),
    });

    let app = Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/{id}",
            axum::routing::put(update_project).delete(delete_project),
        )
        .route("/api/config", get(get_config))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    StubServer {
        state,
        base_url: format!("http://{addr}/api"),
    }
}

async fn list_projects(State(state): State<Arc<StubState>>) -> impl IntoResponse {
    state.requests.fetch_add(1, Ordering::SeqCst);
    if *state.fail_list.lock().unwrap() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "boom" })),
        )
            .into_response();
    }
    Json(state.projects.lock().unwrap().clone()).into_response()
}

async fn get_config(State(state): State<Arc<StubState>>) -> impl IntoResponse {
    state.requests.fetch_add(1, Ordering::SeqCst);
    Json(state.config.clone())
}

async fn create_project(
    State(state): State<Arc<StubState>>,
    Json(draft): Json<ProjectDraft>,
) -> impl IntoResponse {
    state.requests.fetch_add(1, Ordering::SeqCst);

    if let Some(message) = state.create_error.lock().unwrap().clone() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": message })),
        )
            .into_response();
    }

    let created = Project {
        id: state.next_id.fetch_add(1, Ordering::SeqCst),
        title: draft.title,
        description: draft.description,
        image: draft.image,
        category: draft.category,
        year: draft.year,
        client: draft.client,
    };
    state.projects.lock().unwrap().push(created.clone());
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn update_project(
    State(state): State<Arc<StubState>>,
    Path(id): Path<DbId>,
    Json(mut body): Json<Project>,
) -> impl IntoResponse {
    state.requests.fetch_add(1, Ordering::SeqCst);
    body.id = id;

    let mut projects = state.projects.lock().unwrap();
    match projects.iter_mut().find(|p| p.id == id) {
        Some(slot) => {
            *slot = body.clone();
            Json(body).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "project not found" })),
        )
            .into_response(),
    }
}

async fn delete_project(
    State(state): State<Arc<StubState>>,
    Path(id): Path<DbId>,
) -> impl IntoResponse {
    state.requests.fetch_add(1, Ordering::SeqCst);

    let mut projects = state.projects.lock().unwrap();
    let before = projects.len();
    projects.retain(|p| p.id != id);
    if projects.len() != before {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "project not found" })),
        )
            .into_response()
    }
}
