//! Request and response types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// Re-export shared types from answer-core
pub use answer_core::{
    Answer, CardKind, CardKindSettings, ComparisonMatch, ComparisonOutcome, EditOperation,
    EffectiveSettings, Evaluation, EvaluationSettings, ExpectedAnswer, TextEvaluation,
};

/// Body shared by the align and highlight endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub user: String,
    pub correct: String,
    /// Overrides the configured case rule for this request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_insensitive: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignResponse {
    pub distance: usize,
    pub operations: Vec<EditOperation>,
}

/// Highlighted answer, as returned by `POST /api/answers/highlight`
pub type HighlightResponse = TextEvaluation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateComparisonRequest {
    pub expected: HashMap<i64, i64>,
    #[serde(default)]
    pub submitted: Vec<ComparisonMatch<i64, i64>>,
}

pub type ValidateComparisonResponse = ComparisonOutcome<i64, i64>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateCardRequest {
    pub kind: CardKind,
    pub expected: ExpectedAnswer,
    pub answer: Answer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<CardKindSettings>,
}
