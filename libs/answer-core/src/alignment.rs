//! Character-level alignment of a typed answer against the correct answer.
//!
//! The alignment works on Unicode scalar values (`char`), not grapheme
//! clusters: a combining mark is its own element and can be matched,
//! substituted or dropped independently of its base character.

use serde::{Deserialize, Serialize};

/// A single step of an alignment between the user's answer and the correct one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOperation {
    /// Both characters are equal under the case rule in effect.
    Match { user: char, correct: char },
    /// The user typed a different character in this position.
    Substitution { user: char, correct: char },
    /// A character of the correct answer the user left out.
    Insertion { correct: char },
    /// An extra character typed by the user with no counterpart.
    Deletion { user: char },
}

impl EditOperation {
    /// Cost of this step in the edit distance.
    pub fn cost(&self) -> usize {
        match self {
            Self::Match { .. } => 0,
            _ => 1,
        }
    }

    /// The user-side character consumed by this step, if any.
    pub fn user_char(&self) -> Option<char> {
        match *self {
            Self::Match { user, .. } | Self::Substitution { user, .. } | Self::Deletion { user } => {
                Some(user)
            }
            Self::Insertion { .. } => None,
        }
    }

    /// The correct-side character consumed by this step, if any.
    pub fn correct_char(&self) -> Option<char> {
        match *self {
            Self::Match { correct, .. }
            | Self::Substitution { correct, .. }
            | Self::Insertion { correct } => Some(correct),
            Self::Deletion { .. } => None,
        }
    }
}

/// One optimal alignment, in left-to-right reading order.
///
/// Only `align` builds one, so `distance` always equals the summed cost of
/// the operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentPath {
    operations: Vec<EditOperation>,
    distance: usize,
}

impl AlignmentPath {
    /// The operations of the path.
    pub fn operations(&self) -> &[EditOperation] {
        &self.operations
    }

    /// Minimum edit distance between the two inputs.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Whether the answers are equal under the case rule used for alignment.
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }

    /// The user's answer, rebuilt from the path.
    pub fn user_text(&self) -> String {
        self.operations.iter().filter_map(EditOperation::user_char).collect()
    }

    /// The correct answer, rebuilt from the path.
    pub fn correct_text(&self) -> String {
        self.operations.iter().filter_map(EditOperation::correct_char).collect()
    }

    /// Similarity between 0.0 and 1.0, derived from the distance and the
    /// longer of the two inputs (counted in chars).
    pub fn similarity(&self) -> f64 {
        let user_len = self.operations.iter().filter(|op| op.user_char().is_some()).count();
        let correct_len = self.operations.iter().filter(|op| op.correct_char().is_some()).count();
        let max_len = user_len.max(correct_len);
        if max_len == 0 {
            return 1.0; // Both empty strings are identical
        }
        1.0 - (self.distance as f64 / max_len as f64)
    }

    /// Number of operations in the path.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// True only when both inputs were empty.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Single-char uppercase mapping. A char whose uppercase expands to several
/// chars (`ß` to `SS`) stays as it is.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Single-char lowercase mapping. Only `İ` (U+0130) expands when lowercased,
/// and its single-char mapping is the leading `i`.
fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Compare two chars, optionally ignoring case.
///
/// Case-insensitive equality works one char at a time: both chars are
/// uppercased, then compared as is and again after lowercasing.
pub(crate) fn chars_equal(a: char, b: char, case_insensitive: bool) -> bool {
    if a == b {
        return true;
    }
    if !case_insensitive {
        return false;
    }
    let (upper_a, upper_b) = (simple_uppercase(a), simple_uppercase(b));
    upper_a == upper_b || simple_lowercase(upper_a) == simple_lowercase(upper_b)
}

/// Align the user's answer against the correct answer.
///
/// Builds the full edit-distance table and walks back from the bottom-right
/// corner, preferring the diagonal step, then a deletion, then an insertion.
/// The tie-break is fixed so the same inputs always highlight the same way.
pub fn align(user: &str, correct: &str, case_insensitive: bool) -> AlignmentPath {
    let user_chars: Vec<char> = user.chars().collect();
    let correct_chars: Vec<char> = correct.chars().collect();

    let m = user_chars.len();
    let n = correct_chars.len();

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(!chars_equal(user_chars[i - 1], correct_chars[j - 1], case_insensitive));

            dp[i][j] = (dp[i - 1][j] + 1) // deletion
                .min(dp[i][j - 1] + 1) // insertion
                .min(dp[i - 1][j - 1] + cost); // match / substitution
        }
    }

    let mut operations = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let user = user_chars[i - 1];
            let correct = correct_chars[j - 1];
            let same = chars_equal(user, correct, case_insensitive);
            if dp[i][j] == dp[i - 1][j - 1] + usize::from(!same) {
                operations.push(if same {
                    EditOperation::Match { user, correct }
                } else {
                    EditOperation::Substitution { user, correct }
                });
                i -= 1;
                j -= 1;
                continue;
            }
        }

        if i > 0 && dp[i][j] == dp[i - 1][j] + 1 {
            operations.push(EditOperation::Deletion { user: user_chars[i - 1] });
            i -= 1;
        } else {
            // The table guarantees a horizontal step is optimal here, so j > 0.
            operations.push(EditOperation::Insertion { correct: correct_chars[j - 1] });
            j -= 1;
        }
    }
    operations.reverse();

    let distance = dp[m][n];
    tracing::trace!(user_len = m, correct_len = n, distance, "aligned answer");

    AlignmentPath { operations, distance }
}
