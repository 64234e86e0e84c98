//! Static style index: precomputed declaration to class name mapping.
//!
//! The index is produced by an external build step that extracts styles
//! ahead of time. At runtime it is only read: a hit short-circuits dynamic
//! class synthesis entirely, so no style element or registry entry is
//! created for it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::IndexError;
use crate::naming::is_dynamic_class;
use crate::style::Declaration;

/// Immutable map from normalized `"property:value"` to a class name.
///
/// # Example
///
/// ```rust
/// use glaze::{Declaration, StaticStyleIndex};
///
/// let index = StaticStyleIndex::new()
///     .with("color:red", "c1")
///     .with("marginTop:4px", "m1");
///
/// assert_eq!(index.lookup(&Declaration::new("color", "red")), Some("c1"));
/// assert_eq!(index.get("color:blue"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticStyleIndex {
    classes: HashMap<String, String>,
}

impl StaticStyleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated index for chaining.
    pub fn with(mut self, declaration: &str, class_name: &str) -> Self {
        self.classes
            .insert(declaration.to_string(), class_name.to_string());
        self
    }

    /// Looks up a normalized declaration string.
    pub fn get(&self, normalized: &str) -> Option<&str> {
        self.classes.get(normalized).map(String::as_str)
    }

    pub fn lookup(&self, declaration: &Declaration) -> Option<&str> {
        self.get(&declaration.normalized())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Checks that no precomputed class could collide with a dynamic class.
    pub fn validate(&self) -> Result<(), IndexError> {
        let mut reserved: Vec<(&String, &String)> = self
            .classes
            .iter()
            .filter(|(_, class_name)| is_dynamic_class(class_name))
            .collect();
        reserved.sort();

        match reserved.first() {
            Some((declaration, class_name)) => Err(IndexError::ReservedClassName {
                declaration: (*declaration).clone(),
                class_name: (*class_name).clone(),
            }),
            None => Ok(()),
        }
    }

    /// Parses and validates an index from a JSON object.
    pub fn from_json(source: &str) -> Result<Self, IndexError> {
        let index: StaticStyleIndex = serde_json::from_str(source)?;
        index.validate()?;
        Ok(index)
    }

    /// Loads and validates an index from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticStyleIndex {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            classes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
