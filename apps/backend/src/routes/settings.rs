//! Settings endpoints

use axum::{extract::State, Json};

use crate::models::*;
use crate::AppState;

/// GET /api/settings
pub async fn get_global(State(state): State<AppState>) -> Json<EvaluationSettings> {
    Json(state.settings.as_ref().clone())
}
