//! Service configuration loaded from the environment.

use answer_core::{Color, EvaluationSettings};
use std::str::FromStr;

use crate::error::{ApiError, Result};

/// Runtime configuration for the backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub evaluation: EvaluationSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            evaluation: EvaluationSettings::default(),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set but unparseable keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = parse_var(&lookup, "PORT")? {
            config.port = port;
        }

        let evaluation = &mut config.evaluation;
        if let Some(case_insensitive) = parse_var(&lookup, "ANSWER_CASE_INSENSITIVE")? {
            evaluation.case_insensitive = case_insensitive;
        }
        if let Some(color) = parse_var::<Color, _>(&lookup, "ANSWER_COLOR_MATCH")? {
            evaluation.styles.match_color = color;
        }
        if let Some(color) = parse_var::<Color, _>(&lookup, "ANSWER_COLOR_INCORRECT")? {
            evaluation.styles.incorrect_color = color;
        }
        if let Some(color) = parse_var::<Color, _>(&lookup, "ANSWER_COLOR_MISSING")? {
            evaluation.styles.missing_color = color;
        }
        if let Some(ease) = parse_var(&lookup, "ANSWER_EASE_FACTOR")? {
            evaluation.default_ease_factor = ease;
        }

        Ok(config)
    }

    /// Socket address string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ApiError::Config(format!("{}={:?}: {}", key, raw, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert!(config.evaluation.case_insensitive);
        assert_eq!(config.evaluation.styles.match_color.to_string(), "#4CAF50");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ANSWER_CASE_INSENSITIVE", "false"),
            ("ANSWER_COLOR_MISSING", "#0000ff"),
            ("ANSWER_EASE_FACTOR", "2.3"),
        ]))
        .unwrap();

        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert!(!config.evaluation.case_insensitive);
        assert_eq!(config.evaluation.styles.missing_color, Color::rgb(0, 0, 255));
        assert_eq!(config.evaluation.default_ease_factor, 2.3);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        for (key, value) in [
            ("PORT", "eighty"),
            ("ANSWER_CASE_INSENSITIVE", "yes"),
            ("ANSWER_COLOR_MATCH", "green"),
            ("ANSWER_EASE_FACTOR", "high"),
        ] {
            let err = Config::from_lookup(lookup(&[(key, value)])).unwrap_err();
            assert!(matches!(err, ApiError::Config(ref msg) if msg.starts_with(key)), "{key}");
        }
    }
}
