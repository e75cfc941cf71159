//! Answer checking core shared by the study client and the backend.
//!
//! Provides:
//! - Character-level answer alignment (minimum edit distance with a fixed tie-break)
//! - Classification of an alignment into highlighted text runs
//! - Slot/word scoring for translation comparison exercises
//! - Highlight colors and evaluation settings
//! - Card kind dispatch over the closed set of exercise types

pub mod alignment;
pub mod card;
pub mod comparison;
pub mod error;
pub mod segment;
pub mod settings;
pub mod style;

pub use alignment::{align, AlignmentPath, EditOperation};
pub use card::{evaluate, Answer, CardKind, Evaluation, ExpectedAnswer, TextEvaluation};
pub use comparison::{grade, validate, ComparisonMatch, ComparisonOutcome, SlotResult};
pub use error::{EvaluationError, Result};
pub use segment::{classify, highlight, Classification, Segment};
pub use settings::{CardKindSettings, EffectiveSettings, EvaluationSettings};
pub use style::{Color, HighlightStyles, StyledSegment};
