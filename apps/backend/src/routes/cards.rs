//! Card evaluation endpoints

use axum::{extract::State, Json};

use answer_core::{evaluate, EvaluationError};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/cards/evaluate
pub async fn evaluate_card(
    State(state): State<AppState>,
    Json(request): Json<EvaluateCardRequest>,
) -> Result<Json<Evaluation>> {
    let settings = EffectiveSettings::merge(&state.settings, request.overrides.as_ref());

    match evaluate(request.kind, &request.expected, &request.answer, &settings) {
        Ok(evaluation) => Ok(Json(evaluation)),
        Err(err @ EvaluationError::UnsupportedCardKind { .. }) => {
            tracing::warn!(kind = %request.kind, "evaluation requested for unsupported card kind");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
