//! Translation comparison endpoints

use axum::Json;

use answer_core::grade;

use crate::error::Result;
use crate::models::*;

/// POST /api/comparisons/validate
pub async fn validate(
    Json(request): Json<ValidateComparisonRequest>,
) -> Result<Json<ValidateComparisonResponse>> {
    Ok(Json(grade(&request.expected, &request.submitted)))
}
