//! Voice skill endpoint
//!
//! Receives platform requests, checks the application id, and answers with
//! exactly one response envelope.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;

use super::ApiState;
use crate::skill::{ResponseEnvelope, VoiceEvent};

/// Error body for requests rejected before dispatch
#[derive(Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

fn reject(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { ok: false, error })).into_response()
}

/// Handle one voice request
pub async fn handle_request(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<VoiceEvent>, JsonRejection>,
) -> Response {
    let event = match payload {
        Ok(Json(event)) => event,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "malformed voice request");
            return reject(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let application_id = event.application_id().unwrap_or("<missing>").to_string();

    if let Err(e) = state.skill.verify_application(&event) {
        tracing::warn!(error = %e, "rejecting request for another application");
        return reject(StatusCode::FORBIDDEN, e.to_string());
    }

    tracing::info!(
        application_id = %application_id,
        request_id = %event.request_id(),
        request_type = %event.request.kind,
        "beginning skill execution"
    );

    let envelope = match state.skill.dispatch(&event).await {
        Some(speech) => {
            tracing::debug!(?speech, "emitting response");
            ResponseEnvelope::from(&speech)
        }
        None => ResponseEnvelope::empty(),
    };

    tracing::info!(
        application_id = %application_id,
        request_id = %event.request_id(),
        "ending skill execution"
    );

    (StatusCode::OK, Json(envelope)).into_response()
}

/// Build skill router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/alexa", post(handle_request))
        .with_state(state)
}
