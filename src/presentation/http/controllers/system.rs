// src/presentation/http/controllers/system.rs
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub async fn livez(
    Extension(state): Extension<HttpState>,
) -> (StatusCode, Json<StatusResponse>) {
    if state.health.is_live() {
        (StatusCode::OK, Json(StatusResponse { status: "ok" }))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(StatusResponse { status: "down" }),
        )
    }
}

pub async fn readyz(
    Extension(state): Extension<HttpState>,
) -> (StatusCode, Json<StatusResponse>) {
    if state.health.is_ready() {
        (StatusCode::OK, Json(StatusResponse { status: "ok" }))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(StatusResponse {
                status: "not ready",
            }),
        )
    }
}
