//! Style values and descriptions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value in a [`StyleDescription`].
///
/// Primitive values are applied as literal CSS values. Nested descriptions
/// are reserved for selectors and media queries and are currently skipped
/// by the resolver.
///
/// Deserialization accepts any shape: booleans become their text, while
/// null and arrays load as [`StyleValue::Unsupported`] and are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "RawValue")]
pub enum StyleValue {
    Str(String),
    Number(f64),
    Nested(StyleDescription),
    Unsupported,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Str(String),
    Bool(bool),
    Number(f64),
    Nested(StyleDescription),
    Other(serde::de::IgnoredAny),
}

impl From<RawValue> for StyleValue {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Str(s) => StyleValue::Str(s),
            RawValue::Bool(b) => StyleValue::from(b),
            RawValue::Number(n) => StyleValue::Number(n),
            RawValue::Nested(nested) => StyleValue::Nested(nested),
            RawValue::Other(_) => StyleValue::Unsupported,
        }
    }
}

impl StyleValue {
    /// Returns the literal CSS text for primitive values.
    pub fn as_css(&self) -> Option<String> {
        match self {
            StyleValue::Str(s) => Some(s.clone()),
            StyleValue::Number(n) => Some(format_number(*n)),
            StyleValue::Nested(_) | StyleValue::Unsupported => None,
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, StyleValue::Nested(_))
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Str(s) => f.write_str(s),
            StyleValue::Number(n) => f.write_str(&format_number(*n)),
            StyleValue::Nested(_) => f.write_str("[object]"),
            StyleValue::Unsupported => f.write_str("[unsupported]"),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Str(b.to_string())
    }
}

impl From<StyleDescription> for StyleValue {
    fn from(nested: StyleDescription) -> Self {
        StyleValue::Nested(nested)
    }
}

/// A per-call style description: keys mapped to values, in insertion order.
///
/// # Example
///
/// ```rust
/// use glaze::StyleDescription;
///
/// let style = StyleDescription::new()
///     .set("m", "4px")
///     .set("color", "red")
///     .set("zIndex", 10);
///
/// assert_eq!(style.len(), 3);
/// assert_eq!(style.get("zIndex").unwrap().to_string(), "10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleDescription {
    entries: IndexMap<String, StyleValue>,
}

impl StyleDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key, returning the updated description for chaining.
    ///
    /// Setting an existing key replaces its value but keeps its position.
    pub fn set<V: Into<StyleValue>>(mut self, key: &str, value: V) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleDescription {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Formats a number the way CSS values are written by hand: integral values
/// without a fractional part, no signed zero.
pub(crate) fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integral() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-12.0), "-12");
    }

    #[test]
    fn test_format_number_fractional() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.707), "0.707");
    }

    #[test]
    fn test_format_number_signed_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_set_keeps_insertion_order() {
        let style = StyleDescription::new()
            .set("b", "1")
            .set("a", "2")
            .set("b", "3");

        let keys: Vec<&str> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(style.get("b"), Some(&StyleValue::from("3")));
    }

    #[test]
    fn test_nested_has_no_css() {
        let nested = StyleValue::from(StyleDescription::new().set("color", "red"));
        assert!(nested.is_nested());
        assert_eq!(nested.as_css(), None);
    }

    #[test]
    fn test_deserialize_preserves_order_and_shapes() {
        let style: StyleDescription = serde_json::from_str(
            r#"{"p": 2, "color": "red", ":hover": {"color": "blue"}}"#,
        )
        .unwrap();

        let keys: Vec<&str> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["p", "color", ":hover"]);
        assert_eq!(style.get("p"), Some(&StyleValue::Number(2.0)));
        assert!(style.get(":hover").unwrap().is_nested());
    }

    #[test]
    fn test_deserialize_tolerates_other_json_shapes() {
        let style: StyleDescription = serde_json::from_str(
            r#"{"a": null, "b": true, "c": [1, 2], "color": "red"}"#,
        )
        .unwrap();

        assert_eq!(style.len(), 4);
        assert_eq!(style.get("a"), Some(&StyleValue::Unsupported));
        assert_eq!(style.get("b").and_then(StyleValue::as_css).as_deref(), Some("true"));
        assert_eq!(style.get("c").unwrap().as_css(), None);
        assert_eq!(style.get("color"), Some(&StyleValue::from("red")));
    }

    #[test]
    fn test_from_iterator() {
        let style: StyleDescription = vec![("m", "1px"), ("p", "2px")].into_iter().collect();
        assert_eq!(style.len(), 2);
    }
}
