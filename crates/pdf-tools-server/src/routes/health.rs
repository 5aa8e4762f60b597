use crate::models::{HealthResponse, RootResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Image to PDF Converter API".to_string(),
        version: state.config.app_version.clone(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: format!("{} is running", state.config.app_name),
        version: state.config.app_version.clone(),
    })
}
