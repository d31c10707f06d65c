//! HTTP surface for the intake pipeline.
//!
//! One POST endpoint runs the whole pipeline: parse → validate →
//! normalize → map → forward → report. Every response, errors and
//! pre-flight included, carries permissive cross-origin headers so the
//! public form can call the endpoint from any browser context.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use crate::demand::model::RawSubmission;
use crate::demand::validate::validate_and_normalize;
use crate::error::{ForwardError, IntakeError, ValidationError};
use crate::forward::Forwarder;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<Forwarder>,
}

/// Build the Axum router with the intake routes and CORS layer.
pub fn intake_routes(forwarder: Arc<Forwarder>) -> Router {
    let state = AppState { forwarder };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/submit-demand",
            post(submit_demand).fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "demand-intake"
    }))
}

// ── Method guard ────────────────────────────────────────────────────

/// Non-POST, non-OPTIONS methods land here. OPTIONS never reaches the
/// router: the `CorsLayer` answers every pre-flight probe directly
/// with an empty 200 and the permissive headers, skipping validation.
async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Método não permitido. Use POST." })),
    )
}

// ── Submission ──────────────────────────────────────────────────────

/// POST /api/submit-demand
///
/// Receives the raw form body, validates and normalizes it, and relays
/// the record downstream. Stateless: nothing survives the request.
async fn submit_demand(State(state): State<AppState>, body: Bytes) -> Response {
    // The body is untrusted; a non-object (or unparseable) body simply
    // yields an empty submission, which the required-field check rejects.
    let value: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let raw = RawSubmission::from_value(&value);

    let record = match validate_and_normalize(&raw, chrono::Utc::now()) {
        Ok(record) => record,
        Err(err) => {
            info!(%err, "Submission rejected");
            return validation_response(err);
        }
    };

    match state.forwarder.forward(&record).await {
        Ok(result) => {
            info!(
                solicitante = %record.solicitante,
                setor = %record.setor,
                downstream_status = result.downstream_status,
                "Demand registered"
            );
            (
                StatusCode::OK,
                Json(json!({
                    "message": "Solicitação registrada com sucesso no SharePoint."
                })),
            )
                .into_response()
        }
        Err(err) => forward_response(err),
    }
}

/// Map a validation failure to its 400 payload. The missing-field list
/// is included only for the aggregated missing-fields case.
fn validation_response(err: ValidationError) -> Response {
    let payload = match &err {
        ValidationError::MissingFields(fields) => json!({
            "error": "Campos obrigatórios ausentes.",
            "missing": fields,
        }),
        ValidationError::InvalidEmail => json!({
            "error": "E-mail corporativo inválido."
        }),
    };
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

/// Map a forwarding-stage failure onto the caller-facing taxonomy:
/// configuration → 500, downstream rejection → 502, transport → 500.
fn forward_response(err: IntakeError) -> Response {
    match err {
        IntakeError::Config(config_err) => {
            error!(%config_err, "Automation configuration error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Erro de configuração no servidor de automação."
                })),
            )
                .into_response()
        }
        IntakeError::Forward(ForwardError::Rejected { status, detail }) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({
                "error": "O Power Automate recusou a requisição.",
                "status": status,
                "detail": detail,
            })),
        )
            .into_response(),
        IntakeError::Forward(ForwardError::Transport(message)) => {
            warn!(%message, "Transport failure toward workflow webhook");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Erro interno ao processar demanda.",
                    "message": message,
                })),
            )
                .into_response()
        }
        // Validation never reaches the forwarding stage.
        IntakeError::Validation(err) => validation_response(err),
    }
}
