//! Style descriptions passed to the resolver.
//!
//! This module provides the input primitives:
//!
//! - [`StyleValue`]: A literal CSS value or a nested description
//! - [`StyleDescription`]: An insertion-ordered map of keys to values
//! - [`Declaration`]: One normalized `property:value` pair
//!
//! Keys of a description may be canonical CSS properties, theme aliases or
//! theme shorthands. Expansion happens in [`crate::resolve`].

mod declaration;
mod value;

pub use declaration::Declaration;
pub use value::{StyleDescription, StyleValue};

pub(crate) use value::format_number;
