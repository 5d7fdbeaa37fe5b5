//! Axum HTTP surface over the clinic-flow core.
//!
//! The transport layer only parses requests, calls one store/workflow
//! operation under the state mutex and serializes the result. Error kinds
//! map onto status codes: validation → 400, conflict → 409, not-found → 404.

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};
use tower_http::cors::{Any, CorsLayer};

use anyhow::Context;
use clinic_flow_core::{
    ClinicError, PatientRecord, RecordStore, TreatmentForm, TreatmentWorkflow,
};

pub mod config;
pub use config::ServerConfig;

/// Shared state for the axum application.
///
/// Requests are handled one mutation at a time behind the mutex; the store
/// itself carries no concurrency machinery.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<Mutex<RecordStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Wrapper giving `ClinicError` an HTTP response shape.
pub struct ApiError(ClinicError);

impl From<ClinicError> for ApiError {
    fn from(err: ClinicError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ClinicError::Validation(_) => StatusCode::BAD_REQUEST,
            ClinicError::Conflict(_) => StatusCode::CONFLICT,
            ClinicError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

// Absent fields default to empty strings so presence checks stay in the
// core instead of failing at deserialization with a generic 422.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePatientRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    national_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BeginRequest {
    #[serde(default)]
    national_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompleteRequest {
    #[serde(default)]
    national_code: String,
    #[serde(flatten)]
    form: TreatmentForm,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CancelRequest {
    #[serde(default)]
    national_code: String,
    tozihat: Option<String>,
}

async fn create_patient(
    State(state): State<AppState>,
    Json(payload): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<PatientRecord>), ApiError> {
    let mut store = state.store.lock().await;
    let record = store.create(&payload.name, &payload.phone, &payload.national_code)?;
    tracing::info!(id = record.id, "patient registered");
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_patients(State(state): State<AppState>) -> Json<Vec<PatientRecord>> {
    let store = state.store.lock().await;
    Json(store.list_all().to_vec())
}

async fn begin_treatment(
    State(state): State<AppState>,
    Json(payload): Json<BeginRequest>,
) -> Result<Json<PatientRecord>, ApiError> {
    let mut store = state.store.lock().await;
    let record = TreatmentWorkflow::new(&mut store).begin(&payload.national_code)?;
    tracing::info!(id = record.id, "treatment started");
    Ok(Json(record))
}

async fn complete_treatment(
    State(state): State<AppState>,
    Json(payload): Json<CompleteRequest>,
) -> Result<Json<PatientRecord>, ApiError> {
    let mut store = state.store.lock().await;
    let record =
        TreatmentWorkflow::new(&mut store).complete(&payload.national_code, &payload.form)?;
    tracing::info!(id = record.id, "treatment completed");
    Ok(Json(record))
}

async fn cancel_treatment(
    State(state): State<AppState>,
    Json(payload): Json<CancelRequest>,
) -> Result<Json<PatientRecord>, ApiError> {
    let mut store = state.store.lock().await;
    let record =
        TreatmentWorkflow::new(&mut store).cancel(&payload.national_code, payload.tozihat)?;
    tracing::info!(id = record.id, "treatment canceled");
    Ok(Json(record))
}

async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_origin(Any);

    Router::new()
        .route("/api/v1/health", get(health_check))
        .route("/api/v1/patients", post(create_patient).get(list_patients))
        .route("/api/v1/patients/begin", put(begin_treatment))
        .route("/api/v1/patients/complete", put(complete_treatment))
        .route("/api/v1/patients/cancel", put(cancel_treatment))
        .with_state(state)
        .layer(cors)
}

/// Bind and serve until the shutdown signal fires.
pub async fn start_server(
    config: ServerConfig,
    shutdown_rx: oneshot::Receiver<()>,
) -> anyhow::Result<()> {
    let addr = config.addr();
    let router = app(AppState::new());

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    tracing::info!(%addr, "clinic-flow server listening");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
            tracing::info!("shutdown signal received");
        })
        .await
        .context("server error")?;

    tracing::info!("clinic-flow server stopped");
    Ok(())
}
