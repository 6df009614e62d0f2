use crate::core::service::GenerationService;
use crate::domain::model::{GenerateRequest, GenerateResponse};
use crate::domain::ports::CombinationStore;
use crate::utils::error::ServiceError;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub type AppState<S> = Arc<GenerationService<S>>;

pub fn router<S: CombinationStore + 'static>(service: AppState<S>) -> Router {
    Router::new()
        .route("/generate", post(generate::<S>))
        .route("/health", get(health_check))
        .with_state(service)
}

async fn generate<S: CombinationStore + 'static>(
    State(service): State<AppState<S>>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ServiceError> {
    let response = service.process(payload).await?;
    Ok(Json(response))
}

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
