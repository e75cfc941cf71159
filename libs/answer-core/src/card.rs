//! Card kinds and dispatch of a submitted answer to the right checker.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alignment::align;
use crate::comparison::{grade, ComparisonMatch, ComparisonOutcome};
use crate::error::{EvaluationError, Result};
use crate::segment::classify;
use crate::settings::EffectiveSettings;
use crate::style::StyledSegment;

/// The closed set of exercise types a lesson can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Translate,
    ReverseTranslate,
    EnterWord,
    TranslationComparison,
    SentenceToStudiedLanguage,
    SentenceToStudentLanguage,
}

impl CardKind {
    pub const ALL: [CardKind; 6] = [
        Self::Translate,
        Self::ReverseTranslate,
        Self::EnterWord,
        Self::TranslationComparison,
        Self::SentenceToStudiedLanguage,
        Self::SentenceToStudentLanguage,
    ];

    /// Get the card kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::ReverseTranslate => "reverse_translate",
            Self::EnterWord => "enter_word",
            Self::TranslationComparison => "translation_comparison",
            Self::SentenceToStudiedLanguage => "sentence_to_studied_language",
            Self::SentenceToStudentLanguage => "sentence_to_student_language",
        }
    }

    /// Whether answers for this kind can be evaluated.
    pub fn is_supported(&self) -> bool {
        !matches!(
            self,
            Self::SentenceToStudiedLanguage | Self::SentenceToStudentLanguage
        )
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardKind {
    type Err = EvaluationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EvaluationError::UnknownCardKind { value: s.to_string() })
    }
}

/// What the card expects, taken from stored card data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedAnswer {
    Text(String),
    /// Slot id to word id.
    Comparison(HashMap<i64, i64>),
}

/// What the learner submitted. An unanswered card is an empty text or an
/// empty list, never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Text(String),
    Comparison(Vec<ComparisonMatch<i64, i64>>),
}

/// Result of checking a typed answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEvaluation {
    pub distance: usize,
    pub is_correct: bool,
    pub similarity: f64,
    pub segments: Vec<StyledSegment>,
}

impl TextEvaluation {
    /// Align, classify and color a typed answer.
    pub fn new(typed: &str, correct: &str, settings: &EffectiveSettings) -> Self {
        let path = align(typed, correct, settings.case_insensitive);
        let segments = settings.styles.apply(&classify(&path));

        Self {
            distance: path.distance(),
            is_correct: path.is_exact(),
            similarity: path.similarity(),
            segments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Evaluation {
    /// Flip card: the learner rates their own recall.
    SelfGraded,
    Text(TextEvaluation),
    Comparison(ComparisonOutcome<i64, i64>),
}

/// Evaluate an answer for a card of the given kind.
pub fn evaluate(
    kind: CardKind,
    expected: &ExpectedAnswer,
    answer: &Answer,
    settings: &EffectiveSettings,
) -> Result<Evaluation> {
    tracing::debug!(%kind, "evaluating answer");

    match kind {
        CardKind::Translate | CardKind::ReverseTranslate => Ok(Evaluation::SelfGraded),
        CardKind::EnterWord => match (expected, answer) {
            (ExpectedAnswer::Text(correct), Answer::Text(typed)) => {
                Ok(Evaluation::Text(TextEvaluation::new(typed, correct, settings)))
            }
            _ => Err(EvaluationError::AnswerMismatch { kind }),
        },
        CardKind::TranslationComparison => match (expected, answer) {
            (ExpectedAnswer::Comparison(pairs), Answer::Comparison(matches)) => {
                Ok(Evaluation::Comparison(grade(pairs, matches)))
            }
            _ => Err(EvaluationError::AnswerMismatch { kind }),
        },
        CardKind::SentenceToStudiedLanguage | CardKind::SentenceToStudentLanguage => {
            Err(EvaluationError::UnsupportedCardKind { kind })
        }
    }
}
