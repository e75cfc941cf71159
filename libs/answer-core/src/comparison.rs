//! Scoring for translation comparison exercises.
//!
//! The learner pairs each slot (a word in one language) with a word from a
//! shuffled list. Each slot is right or wrong on its own; the exercise score
//! is the share of slots paired correctly.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Review quality for a correctly paired slot.
pub const MAX_QUALITY: u8 = 5;
/// Review quality for a wrong or unanswered slot.
pub const MIN_QUALITY: u8 = 0;

/// One pairing submitted by the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonMatch<S, W> {
    pub slot_id: S,
    /// The chosen word, or `None` when the slot was left empty.
    pub selected_word_id: Option<W>,
}

impl<S, W> ComparisonMatch<S, W> {
    pub fn new(slot_id: S, selected_word_id: Option<W>) -> Self {
        Self {
            slot_id,
            selected_word_id,
        }
    }
}

/// Result for a single expected slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotResult<S, W> {
    pub slot_id: S,
    pub expected_word_id: W,
    pub selected_word_id: Option<W>,
    pub correct: bool,
    pub quality: u8,
}

/// Detailed result of a comparison exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutcome<S, W> {
    /// Share of correctly paired slots, 0.0 to 1.0.
    pub score: f64,
    pub correct_count: usize,
    pub total: usize,
    /// Per slot, in ascending slot order.
    pub slots: Vec<SlotResult<S, W>>,
    /// The exercise should be shown again because at least one slot was wrong.
    pub should_repeat: bool,
}

/// Index submissions by slot. A later entry for the same slot replaces an earlier one.
fn index_submitted<S, W>(submitted: &[ComparisonMatch<S, W>]) -> HashMap<&S, Option<&W>>
where
    S: Eq + Hash,
{
    submitted
        .iter()
        .map(|m| (&m.slot_id, m.selected_word_id.as_ref()))
        .collect()
}

fn ratio(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    correct as f64 / total as f64
}

/// Score submitted pairings against the expected slot to word mapping.
///
/// Slots without a submission count as wrong. Submissions for slots that are
/// not expected are ignored. An exercise with no slots scores 1.0.
pub fn validate<S, W>(expected: &HashMap<S, W>, submitted: &[ComparisonMatch<S, W>]) -> f64
where
    S: Eq + Hash,
    W: PartialEq,
{
    let answers = index_submitted(submitted);
    let correct = expected
        .iter()
        .filter(|(slot, word)| matches!(answers.get(slot), Some(Some(selected)) if *selected == *word))
        .count();

    ratio(correct, expected.len())
}

/// Score submitted pairings and report every slot.
pub fn grade<S, W>(expected: &HashMap<S, W>, submitted: &[ComparisonMatch<S, W>]) -> ComparisonOutcome<S, W>
where
    S: Eq + Hash + Ord + Clone,
    W: PartialEq + Clone,
{
    let answers = index_submitted(submitted);

    let mut expected_slots: Vec<(&S, &W)> = expected.iter().collect();
    expected_slots.sort_by(|a, b| a.0.cmp(b.0));

    let slots: Vec<SlotResult<S, W>> = expected_slots
        .into_iter()
        .map(|(slot, word)| {
            let selected = answers.get(slot).copied().flatten();
            let correct = selected == Some(word);
            SlotResult {
                slot_id: slot.clone(),
                expected_word_id: word.clone(),
                selected_word_id: selected.cloned(),
                correct,
                quality: if correct { MAX_QUALITY } else { MIN_QUALITY },
            }
        })
        .collect();

    let correct_count = slots.iter().filter(|s| s.correct).count();
    let total = slots.len();
    let score = ratio(correct_count, total);

    tracing::debug!(correct_count, total, score, "graded comparison exercise");

    ComparisonOutcome {
        score,
        correct_count,
        total,
        should_repeat: correct_count < total,
        slots,
    }
}
