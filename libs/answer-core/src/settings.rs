//! Evaluation settings: global defaults and per card kind overrides.

use serde::{Deserialize, Serialize};

use crate::style::HighlightStyles;

/// Ease factor assigned to new cards when nothing else is configured.
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Global settings configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationSettings {
    pub case_insensitive: bool,
    pub styles: HighlightStyles,
    /// Opaque scheduling parameter, stored and handed on untouched.
    pub default_ease_factor: f64,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            styles: HighlightStyles::default(),
            default_ease_factor: DEFAULT_EASE_FACTOR,
        }
    }
}

/// Per card kind settings (all fields optional for overrides).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardKindSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_insensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<HighlightStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease_factor: Option<f64>,
}

/// Effective settings (global merged with card kind overrides).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveSettings {
    pub case_insensitive: bool,
    pub styles: HighlightStyles,
    pub ease_factor: f64,
}

impl EffectiveSettings {
    /// Merge global settings with optional card kind settings.
    pub fn merge(global: &EvaluationSettings, kind: Option<&CardKindSettings>) -> Self {
        match kind {
            Some(k) => Self {
                case_insensitive: k.case_insensitive.unwrap_or(global.case_insensitive),
                styles: k.styles.unwrap_or(global.styles),
                ease_factor: k.ease_factor.unwrap_or(global.default_ease_factor),
            },
            None => Self::from(global),
        }
    }
}

impl From<&EvaluationSettings> for EffectiveSettings {
    fn from(global: &EvaluationSettings) -> Self {
        Self {
            case_insensitive: global.case_insensitive,
            styles: global.styles,
            ease_factor: global.default_ease_factor,
        }
    }
}

impl Default for EffectiveSettings {
    fn default() -> Self {
        Self::from(&EvaluationSettings::default())
    }
}
