//! Highlight colors handed to the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::segment::{Classification, Segment};

/// A 24-bit RGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EvaluationError::InvalidColor { value: s.to_string() };

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = EvaluationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Background colors per classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightStyles {
    pub match_color: Color,
    pub incorrect_color: Color,
    pub missing_color: Color,
}

impl Default for HighlightStyles {
    fn default() -> Self {
        Self {
            match_color: Color::rgb(0x4C, 0xAF, 0x50),
            incorrect_color: Color::rgb(0xF4, 0x43, 0x36),
            missing_color: Color::rgb(0xFF, 0xEB, 0x3B),
        }
    }
}

impl HighlightStyles {
    pub fn color_for(&self, classification: Classification) -> Color {
        match classification {
            Classification::Match => self.match_color,
            Classification::Incorrect => self.incorrect_color,
            Classification::Missing => self.missing_color,
        }
    }

    /// Attach a color to each segment.
    pub fn apply(&self, segments: &[Segment]) -> Vec<StyledSegment> {
        segments
            .iter()
            .map(|segment| StyledSegment {
                text: segment.text.clone(),
                classification: segment.classification,
                color: self.color_for(segment.classification),
            })
            .collect()
    }
}

/// A segment ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSegment {
    pub text: String,
    pub classification: Classification,
    pub color: Color,
}
