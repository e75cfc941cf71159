//! Typed answer endpoints

use axum::{extract::State, Json};

use answer_core::{align, EffectiveSettings};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// Global settings with the request's case rule applied, if it has one.
fn settings_for(state: &AppState, request: &AnswerRequest) -> EffectiveSettings {
    let overrides = CardKindSettings {
        case_insensitive: request.case_insensitive,
        ..Default::default()
    };
    EffectiveSettings::merge(&state.settings, Some(&overrides))
}

/// POST /api/answers/align
pub async fn align_answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AlignResponse>> {
    let settings = settings_for(&state, &request);
    let path = align(&request.user, &request.correct, settings.case_insensitive);

    Ok(Json(AlignResponse {
        distance: path.distance(),
        operations: path.operations().to_vec(),
    }))
}

/// POST /api/answers/highlight
pub async fn highlight(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<HighlightResponse>> {
    let settings = settings_for(&state, &request);
    let evaluation = TextEvaluation::new(&request.user, &request.correct, &settings);

    tracing::debug!(
        distance = evaluation.distance,
        segments = evaluation.segments.len(),
        "highlighted answer"
    );

    Ok(Json(evaluation))
}
