//! Theme system: aliases, shorthands and scale tables.
//!
//! This module provides:
//!
//! - [`Theme`]: Alias and shorthand tables with a fluent builder API
//! - [`Scale`]: An ordered table of design tokens
//! - [`modular_scale`] and [`symmetric_scale`]: Helpers producing scales
//!
//! A theme is read-only once handed to a [`GlazeContext`](crate::GlazeContext).

mod scales;
#[allow(clippy::module_inception)]
mod theme;

pub use scales::{modular_scale, symmetric_scale, Scale, DEFAULT_MODULAR_STEPS};
pub use theme::Theme;
