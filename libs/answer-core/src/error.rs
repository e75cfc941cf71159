//! Error types for answer-core.

use thiserror::Error;

use crate::card::CardKind;

/// Result type alias using EvaluationError.
pub type Result<T> = std::result::Result<T, EvaluationError>;

/// Errors raised around the evaluation core.
///
/// Alignment, classification and comparison scoring are total and never
/// produce one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("card kind {kind} is not supported")]
    UnsupportedCardKind { kind: CardKind },

    #[error("answer shape does not fit card kind {kind}")]
    AnswerMismatch { kind: CardKind },

    #[error("unknown card kind: {value}")]
    UnknownCardKind { value: String },

    #[error("invalid color {value:?}, expected #RRGGBB")]
    InvalidColor { value: String },
}
