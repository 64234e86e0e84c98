//! # Glaze - runtime atomic CSS
//!
//! Glaze turns per-call style descriptions into atomic CSS classes. Every
//! `property:value` declaration maps to one class, so identical declarations
//! across the whole tree share a single rule.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: Aliases (`m` -> `margin`) and shorthands (`margin` -> four sides)
//! - [`StaticStyleIndex`]: Classes precomputed at build time, used first
//! - [`GlazeContext`]: Shared state of one render tree (registry + document head)
//! - [`Styling`]: One consumer; resolves with [`Styling::sx`], cleans up on detach
//! - [`ClassNaming`]: Readable names while developing, content hashes in production
//!
//! ## Lifecycle
//!
//! Declarations missing from the static index become dynamic classes. The
//! first usage injects a `<style>` element into the [`StyleHost`]; each
//! usage is counted in the context's registry and in the consumer's ledger.
//! When a consumer detaches it gives its usages back, and a class whose
//! count drops to zero has its element removed.
//!
//! ## Quick Start
//!
//! ```rust
//! use glaze::{ClassNaming, GlazeContext, StaticStyleIndex, StyleDescription, Theme};
//!
//! let theme = Theme::new()
//!     .alias("m", "margin")
//!     .shorthand("margin", ["marginTop", "marginRight", "marginBottom", "marginLeft"]);
//!
//! let context = GlazeContext::builder()
//!     .theme(theme)
//!     .index(StaticStyleIndex::new().with("color:red", "c1"))
//!     .naming(ClassNaming::Hashed)
//!     .build()
//!     .unwrap();
//!
//! let mut button = context.styling();
//! let class = button.sx(&StyleDescription::new().set("color", "red").set("m", "4px"));
//!
//! // One static class plus four dynamic ones.
//! assert!(class.starts_with("c1 d_"));
//! assert_eq!(class.split(' ').count(), 5);
//! assert_eq!(context.with_host(|head| head.len()), Some(4));
//!
//! button.detach().unwrap();
//! assert_eq!(context.with_host(|head| head.len()), Some(0));
//! ```
//!
//! ## Loading Configuration
//!
//! Themes load from JSON or YAML ([`Theme::from_file`]); static indexes from
//! JSON ([`StaticStyleIndex::from_file`]). The naming strategy defaults to
//! [`ClassNaming::env_default`], which reads `GLAZE_CLASS_NAMES`, then
//! `GLAZE_ENV` / `NODE_ENV`.
//!
//! ## Logging
//!
//! Glaze emits `tracing` events under the `glaze` target: style injection and
//! removal at `debug`, skipped values at `trace`, registry corruption at
//! `error`.

mod context;
mod error;
pub mod host;
mod index;
mod ledger;
pub mod naming;
pub mod registry;
pub mod resolve;
mod style;
mod styling;
pub mod theme;

pub use context::{ContextBuilder, GlazeContext};
pub use error::{IndexError, RegistryError, ThemeError};
pub use host::{MemoryHead, StyleHost};
pub use index::StaticStyleIndex;
pub use ledger::OwnershipLedger;
pub use naming::ClassNaming;
pub use style::{Declaration, StyleDescription, StyleValue};
pub use styling::Styling;
pub use theme::{modular_scale, symmetric_scale, Scale, Theme};
