//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{DistrictDetails, FeatureCollection, HealthResponse, MandalDetails};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Always 200. `status` is `degraded` if any dataset failed to load.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.as_ref();
    Json(HealthResponse {
        status: if store.is_complete() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        loaded_at: store.loaded_at(),
        datasets: store.status(),
    })
}

// =============================================================================
// Map Endpoints
// =============================================================================

/// GET /api/bihar-map-data
///
/// All districts, each annotated with its statistics and a `displayType`.
pub async fn get_bihar_map_data(State(state): State<AppState>) -> HandlerResult<FeatureCollection> {
    // Annotation clones every district geometry.
    let data = tokio::task::spawn_blocking(move || {
        services::state_map(&state.store, &state.display)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(data))
}

/// GET /api/district-data/{district_name}
///
/// Pie chart figures for the district and the blocks inside it.
pub async fn get_district_data(
    State(state): State<AppState>,
    Path(district_name): Path<String>,
) -> HandlerResult<DistrictDetails> {
    let data = services::district_details(&state.store, &district_name)?;
    Ok(Json(data))
}

/// GET /api/mandal-data/{mandal_name}
///
/// Bar graph figures for the mandal and the villages inside it.
pub async fn get_mandal_data(
    State(state): State<AppState>,
    Path(mandal_name): Path<String>,
) -> HandlerResult<MandalDetails> {
    let data = services::mandal_details(&state.store, &mandal_name)?;
    Ok(Json(data))
}
