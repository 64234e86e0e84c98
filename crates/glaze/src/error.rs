//! Error types for theme loading, static index loading and instance bookkeeping.
//!
//! Resolution itself never fails: unknown keys and nested values degrade
//! silently. Only configuration loading and registry corruption surface
//! errors.

use std::path::PathBuf;

/// Error returned when a theme cannot be loaded or fails validation.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A shorthand expands to nothing.
    #[error("shorthand '{property}' expands to no properties")]
    EmptyShorthand { property: String },

    /// The theme file could not be read.
    #[error("failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme file extension is neither JSON nor YAML.
    #[error("unsupported theme format for '{path}' (expected .json, .yaml or .yml)")]
    UnknownFormat { path: PathBuf },

    #[error("invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML theme: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Error returned when a static style index cannot be loaded or validated.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// A precomputed class name uses a prefix reserved for dynamic classes.
    #[error("static class '{class_name}' for '{declaration}' uses a reserved dynamic prefix")]
    ReservedClassName {
        declaration: String,
        class_name: String,
    },

    #[error("failed to read static style index '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid static style index: {0}")]
    Json(#[from] serde_json::Error),
}

/// Registry corruption detected while a consumer detaches.
///
/// These indicate a bookkeeping bug (double release, or a ledger that was
/// never matched by registry increments). They are never produced by valid
/// use of [`Styling`](crate::Styling).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The ledger references a class with no live registry entry.
    #[error("no live instance for dynamic class '{class_name}'")]
    MissingInstance { class_name: String },

    /// The ledger releases more usages than the registry holds.
    #[error("cannot release {released} usages of '{class_name}': only {live} live")]
    CountUnderflow {
        class_name: String,
        live: usize,
        released: usize,
    },
}
