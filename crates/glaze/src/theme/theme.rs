//! Theme struct holding alias and shorthand tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::scales::Scale;
use crate::error::ThemeError;

/// Alias, shorthand and scale tables used when resolving style descriptions.
///
/// Aliases map a short key to a canonical property. Shorthands map a
/// canonical property to the ordered list of properties it sets. Keys that
/// are neither resolve to themselves.
///
/// # Example
///
/// ```rust
/// use glaze::Theme;
///
/// let theme = Theme::new()
///     .alias("m", "margin")
///     .alias("mx", "marginX")
///     .shorthand("margin", ["marginTop", "marginRight", "marginBottom", "marginLeft"])
///     .shorthand("marginX", ["marginLeft", "marginRight"]);
///
/// assert_eq!(theme.resolve_alias("m"), "margin");
/// assert_eq!(theme.expand("marginX"), ["marginLeft", "marginRight"]);
/// assert_eq!(theme.expand("color"), ["color"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    aliases: HashMap<String, String>,
    shorthands: HashMap<String, Vec<String>>,
    scales: IndexMap<String, Scale>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alias, returning an updated theme for chaining.
    pub fn alias(mut self, alias: &str, property: &str) -> Self {
        self.aliases.insert(alias.to_string(), property.to_string());
        self
    }

    /// Adds a shorthand, returning an updated theme for chaining.
    ///
    /// An empty expansion is accepted here and rejected by [`Theme::validate`].
    pub fn shorthand<I, S>(mut self, property: &str, expanded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shorthands.insert(
            property.to_string(),
            expanded.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Adds a named scale, returning an updated theme for chaining.
    pub fn with_scale(mut self, name: &str, scale: Scale) -> Self {
        self.scales.insert(name.to_string(), scale);
        self
    }

    /// Resolves an alias to its canonical property, or returns the key verbatim.
    pub fn resolve_alias<'a>(&'a self, key: &'a str) -> &'a str {
        self.aliases.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Expands a canonical property through the shorthand table.
    ///
    /// Unknown properties expand to themselves.
    pub fn expand<'a>(&'a self, property: &'a str) -> Vec<&'a str> {
        match self.shorthands.get(property) {
            Some(expanded) if !expanded.is_empty() => {
                expanded.iter().map(String::as_str).collect()
            }
            _ => vec![property],
        }
    }

    pub fn aliases(&self) -> &HashMap<String, String> {
        &self.aliases
    }

    pub fn shorthands(&self) -> &HashMap<String, Vec<String>> {
        &self.shorthands
    }

    /// Returns a named scale.
    pub fn scale(&self, name: &str) -> Option<&Scale> {
        self.scales.get(name)
    }

    /// Looks up a single token in a named scale.
    pub fn token(&self, scale: &str, key: &str) -> Option<&str> {
        self.scales.get(scale).and_then(|s| s.get(key))
    }

    /// Validates that every shorthand expands to at least one property.
    ///
    /// This is called by the loaders, but can be called explicitly for
    /// themes built in code.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let mut empty: Vec<&String> = self
            .shorthands
            .iter()
            .filter(|(_, expanded)| expanded.is_empty())
            .map(|(property, _)| property)
            .collect();
        empty.sort();

        match empty.first() {
            Some(property) => Err(ThemeError::EmptyShorthand {
                property: (*property).clone(),
            }),
            None => Ok(()),
        }
    }

    /// Parses and validates a theme from JSON.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(source)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Parses and validates a theme from YAML.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_yaml::from_str(source)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Loads a theme file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&source),
            Some("yaml") | Some("yml") => Self::from_yaml(&source),
            _ => Err(ThemeError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
