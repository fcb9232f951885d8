use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use pv_core::{ProofRequest, Reason, VerificationResult, VerifierError};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::keys::KeySource;

pub struct AppState {
    pub keys: KeySource,
    pub verify_timeout: Duration,
}

pub type SharedState = Arc<AppState>;

type ApiError = (StatusCode, Json<serde_json::Value>);

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/verify", post(verify_proof))
        .route("/v1/health", get(health))
        .route("/v1/vk", get(get_vk))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_vk(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let vk = state.keys.load().await.map_err(unavailable)?;
    Ok(Json(json!({
        "curve": vk.curve,
        "scheme": vk.scheme.as_deref().unwrap_or("g16"),
        "public_inputs": vk.public_input_count(),
    })))
}

async fn verify_proof(
    State(state): State<SharedState>,
    payload: Result<Json<ProofRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VerificationResult>), ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            info!("malformed request body: {}", rejection.body_text());
            let result = VerificationResult::rejected(
                Reason::MalformedInput,
                format!("invalid proof format: {}", rejection.body_text()),
            );
            return Ok((StatusCode::BAD_REQUEST, Json(result)));
        }
    };

    let vk = state.keys.load().await.map_err(unavailable)?;
    let result = pv_core::verify_with_deadline(vk, Arc::new(request), state.verify_timeout)
        .await
        .map_err(internal)?;
    Ok((StatusCode::OK, Json(result)))
}

fn unavailable(e: pv_core::KeyError) -> ApiError {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "error": format!("verification key unavailable: {e}") })),
    )
}

fn internal(e: VerifierError) -> ApiError {
    error!("{e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
}
