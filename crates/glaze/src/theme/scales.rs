//! Scale tables for themes.
//!
//! Scales are ordered token tables (`"1" -> "4px"`) stored on a theme and
//! used by call sites as value sources. The resolver never reads them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::style::format_number;

/// Steps used by [`modular_scale`] when none are given.
pub const DEFAULT_MODULAR_STEPS: &[f64] = &[-1.0, -0.5, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

/// An ordered table of design tokens.
///
/// Tokens may be written as strings or numbers in theme files; numbers are
/// stored in their CSS text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, RawToken>", into = "IndexMap<String, String>")]
pub struct Scale {
    tokens: IndexMap<String, String>,
}

impl Scale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token, returning the updated scale for chaining.
    pub fn token(mut self, key: &str, value: impl Into<String>) -> Self {
        self.tokens.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tokens.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawToken {
    Str(String),
    Number(f64),
}

impl From<IndexMap<String, RawToken>> for Scale {
    fn from(raw: IndexMap<String, RawToken>) -> Self {
        let tokens = raw
            .into_iter()
            .map(|(key, token)| {
                let value = match token {
                    RawToken::Str(s) => s,
                    RawToken::Number(n) => format_number(n),
                };
                (key, value)
            })
            .collect();
        Self { tokens }
    }
}

impl From<Scale> for IndexMap<String, String> {
    fn from(scale: Scale) -> Self {
        scale.tokens
    }
}

/// Builds a modular type scale in `rem`.
///
/// Each step `s` maps to `ratio^s`, rounded to three decimals. Keys are the
/// steps in their CSS number form (`"-0.5"`, `"0"`, `"1"`).
///
/// # Example
///
/// ```rust
/// use glaze::theme::modular_scale;
///
/// let sizes = modular_scale(2.0, &[-1.0, 0.0, 1.0]);
/// assert_eq!(sizes.get("-1"), Some("0.5rem"));
/// assert_eq!(sizes.get("0"), Some("1rem"));
/// assert_eq!(sizes.get("1"), Some("2rem"));
/// ```
pub fn modular_scale(ratio: f64, steps: &[f64]) -> Scale {
    let tokens = steps
        .iter()
        .map(|&step| {
            let value = (ratio.powf(step) * 1e3).round() / 1e3;
            (format_number(step), format!("{}rem", format_number(value)))
        })
        .collect();
    Scale { tokens }
}

/// Mirrors a scale into negative values.
///
/// Every token except `"0"` gains a `-key -> -value` counterpart, appended
/// after the original tokens.
pub fn symmetric_scale(scale: &Scale) -> Scale {
    let mut tokens = scale.tokens.clone();
    for (key, value) in scale.tokens.iter().filter(|(key, _)| key.as_str() != "0") {
        tokens.insert(format!("-{}", key), format!("-{}", value));
    }
    Scale { tokens }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modular_scale_default_steps() {
        let scale = modular_scale(1.25, DEFAULT_MODULAR_STEPS);
        assert_eq!(scale.len(), 9);
        assert_eq!(scale.get("0"), Some("1rem"));
        assert_eq!(scale.get("1"), Some("1.25rem"));
        assert_eq!(scale.get("2"), Some("1.563rem"));
        assert_eq!(scale.get("-1"), Some("0.8rem"));
        assert_eq!(scale.get("-0.5"), Some("0.894rem"));
    }

    #[test]
    fn test_modular_scale_keeps_step_order() {
        let scale = modular_scale(2.0, &[3.0, 1.0]);
        let keys: Vec<&str> = scale.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["3", "1"]);
    }

    #[test]
    fn test_symmetric_scale_skips_zero() {
        let space = Scale::new().token("0", "0").token("1", "4px").token("2", "8px");
        let symmetric = symmetric_scale(&space);

        assert_eq!(symmetric.len(), 5);
        assert_eq!(symmetric.get("-1"), Some("-4px"));
        assert_eq!(symmetric.get("-2"), Some("-8px"));
        assert_eq!(symmetric.get("-0"), None);
        assert_eq!(symmetric.get("1"), Some("4px"));
    }

    #[test]
    fn test_scale_deserializes_numbers() {
        let scale: Scale = serde_json::from_str(r#"{"0": 0, "1": 4, "2": "0.5rem"}"#).unwrap();
        assert_eq!(scale.get("0"), Some("0"));
        assert_eq!(scale.get("1"), Some("4"));
        assert_eq!(scale.get("2"), Some("0.5rem"));
    }
}
