use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use claimcheck_core::SanitizedConfig;

use super::envelope::ApiResponse;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> ApiResponse<SanitizedConfig> {
    ApiResponse::success(state.sanitized_config())
}
