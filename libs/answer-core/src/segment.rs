//! Turning an alignment into highlighted text runs.

use serde::{Deserialize, Serialize};

use crate::alignment::{align, AlignmentPath, EditOperation};

/// How a run of text is shown back to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Typed correctly.
    Match,
    /// Typed, but wrong or extra.
    Incorrect,
    /// Not typed, taken from the correct answer.
    Missing,
}

/// A run of adjacent characters sharing one classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The user's characters, or for `Missing` runs the correct answer's.
    pub text: String,
    pub classification: Classification,
}

impl Segment {
    pub fn new(text: impl Into<String>, classification: Classification) -> Self {
        Self {
            text: text.into(),
            classification,
        }
    }
}

/// The character shown for an operation and its classification.
///
/// Extra characters typed by the user are shown like substitutions.
fn classify_operation(op: &EditOperation) -> (char, Classification) {
    match *op {
        EditOperation::Match { user, .. } => (user, Classification::Match),
        EditOperation::Substitution { user, .. } => (user, Classification::Incorrect),
        EditOperation::Deletion { user } => (user, Classification::Incorrect),
        EditOperation::Insertion { correct } => (correct, Classification::Missing),
    }
}

/// Classify every step of the path, merging adjacent characters with the
/// same classification into one segment.
pub fn classify(path: &AlignmentPath) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for op in path.operations() {
        let (ch, classification) = classify_operation(op);
        match segments.last_mut() {
            Some(last) if last.classification == classification => last.text.push(ch),
            _ => segments.push(Segment {
                text: ch.to_string(),
                classification,
            }),
        }
    }

    segments
}

/// Align and classify in one call.
pub fn highlight(user: &str, correct: &str, case_insensitive: bool) -> Vec<Segment> {
    classify(&align(user, correct, case_insensitive))
}
