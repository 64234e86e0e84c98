//! The render-tree context shared by every consumer.
//!
//! A [`GlazeContext`] bundles the read-only inputs (theme, static index,
//! naming strategy) with the shared mutable state (instance registry and
//! style host). Cloning it is cheap and every clone sees the same state.
//!
//! Registry and host live under one lock, so creating an element, bumping
//! a count, or releasing a class is a single step relative to other calls.

use std::fmt::Write as _;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, trace};

use crate::error::{IndexError, RegistryError};
use crate::host::{MemoryHead, StyleHost};
use crate::index::StaticStyleIndex;
use crate::naming::ClassNaming;
use crate::registry::{InstanceRegistry, Release};
use crate::style::Declaration;
use crate::styling::Styling;
use crate::theme::Theme;

/// Shared state of one render tree.
///
/// # Example
///
/// ```rust
/// use glaze::{ClassNaming, GlazeContext, StyleDescription, Theme};
///
/// let context = GlazeContext::builder()
///     .theme(Theme::new().alias("bg", "background"))
///     .naming(ClassNaming::Readable)
///     .build()
///     .unwrap();
///
/// let mut styling = context.styling();
/// let class = styling.sx(&StyleDescription::new().set("bg", "white"));
/// assert_eq!(class, "DYNAMIC_background-white");
/// assert_eq!(context.instance_count(&class), Some(1));
///
/// drop(styling);
/// assert_eq!(context.instance_count(&class), None);
/// ```
pub struct GlazeContext<H: StyleHost = MemoryHead> {
    inner: Arc<Inner<H>>,
}

struct Inner<H: StyleHost> {
    theme: Theme,
    index: StaticStyleIndex,
    naming: ClassNaming,
    shared: Mutex<Shared<H>>,
}

pub(crate) struct Shared<H: StyleHost> {
    registry: InstanceRegistry<H::Handle>,
    host: Option<H>,
}

impl<H: StyleHost> Shared<H> {
    /// Adds one usage of a dynamic class, injecting its element on first use.
    ///
    /// Returns `None` without touching anything when there is no document.
    pub(crate) fn attach(&mut self, class_name: &str, declaration: &Declaration) -> Option<usize> {
        let host = self.host.as_mut()?;
        let count = self.registry.acquire(class_name, || {
            let css = style_rule(class_name, declaration);
            debug!(target: "glaze", class_name, css = css.as_str(), "injecting dynamic style");
            host.insert_style(class_name, &css)
        });
        Some(count)
    }

    /// Releases usages of a dynamic class, removing its element at zero.
    pub(crate) fn release(&mut self, class_name: &str, usages: usize) -> Result<(), RegistryError> {
        match self.registry.release(class_name, usages)? {
            Release::Retained(remaining) => {
                trace!(target: "glaze", class_name, remaining, "dynamic style still in use");
            }
            Release::Freed(handle) => {
                if let Some(host) = self.host.as_mut() {
                    host.remove_style(handle);
                }
                debug!(target: "glaze", class_name, "removed unused dynamic style");
            }
        }
        Ok(())
    }
}

/// Builds the single-rule stylesheet for a dynamic class.
///
/// The class is escaped as a CSS identifier, so readable names carrying
/// `#`, `.` or `%` from their value still select correctly.
pub(crate) fn style_rule(class_name: &str, declaration: &Declaration) -> String {
    let mut css = String::with_capacity(
        class_name.len() + declaration.property.len() + declaration.value.len() + 4,
    );
    css.push('.');
    // Writing into a String cannot fail.
    let _ = cssparser::serialize_identifier(class_name, &mut css);
    let _ = write!(css, "{{{}}}", declaration);
    css
}

impl GlazeContext<MemoryHead> {
    /// Starts building a context backed by an in-memory head.
    ///
    /// Use [`ContextBuilder::host`] to plug in another host.
    pub fn builder() -> ContextBuilder<MemoryHead> {
        ContextBuilder::new()
    }
}

impl<H: StyleHost> GlazeContext<H> {
    /// Creates a context that injects dynamic styles into `host`.
    ///
    /// Fails if a static class uses a prefix reserved for dynamic classes.
    pub fn new(
        theme: Theme,
        index: StaticStyleIndex,
        naming: ClassNaming,
        host: H,
    ) -> Result<Self, IndexError> {
        Self::from_parts(theme, index, naming, Some(host))
    }

    /// Creates a context without a document.
    ///
    /// Only the static index resolves classes; declarations it misses
    /// contribute nothing.
    pub fn headless(
        theme: Theme,
        index: StaticStyleIndex,
        naming: ClassNaming,
    ) -> Result<Self, IndexError> {
        Self::from_parts(theme, index, naming, None)
    }

    fn from_parts(
        theme: Theme,
        index: StaticStyleIndex,
        naming: ClassNaming,
        host: Option<H>,
    ) -> Result<Self, IndexError> {
        if let Err(err) = index.validate() {
            error!(target: "glaze", %err, "static style index collides with dynamic classes");
            return Err(err);
        }

        Ok(Self {
            inner: Arc::new(Inner {
                theme,
                index,
                naming,
                shared: Mutex::new(Shared {
                    registry: InstanceRegistry::new(),
                    host,
                }),
            }),
        })
    }

    /// Creates a consumer with an empty ownership ledger.
    pub fn styling(&self) -> Styling<H> {
        Styling::new(self.clone())
    }

    pub fn theme(&self) -> &Theme {
        &self.inner.theme
    }

    pub fn index(&self) -> &StaticStyleIndex {
        &self.inner.index
    }

    pub fn naming(&self) -> ClassNaming {
        self.inner.naming
    }

    /// Returns true when there is no document to inject styles into.
    pub fn is_headless(&self) -> bool {
        self.lock().host.is_none()
    }

    /// Usage count of a live dynamic class.
    pub fn instance_count(&self, class_name: &str) -> Option<usize> {
        self.lock().registry.count(class_name)
    }

    /// Number of live dynamic classes.
    pub fn live_classes(&self) -> usize {
        self.lock().registry.len()
    }

    /// Runs `f` with read access to the host, if there is one.
    pub fn with_host<R>(&self, f: impl FnOnce(&H) -> R) -> Option<R> {
        self.lock().host.as_ref().map(f)
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Shared<H>> {
        // Every mutation completes before anything that can panic, so the
        // state behind a poisoned lock is still consistent.
        self.inner
            .shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<H: StyleHost> Clone for GlazeContext<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Fluent builder for [`GlazeContext`].
///
/// Defaults: empty theme, empty static index, naming from
/// [`ClassNaming::env_default`], and an in-memory head.
pub struct ContextBuilder<H: StyleHost = MemoryHead> {
    theme: Theme,
    index: StaticStyleIndex,
    naming: Option<ClassNaming>,
    host: Option<H>,
}

impl ContextBuilder<MemoryHead> {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            index: StaticStyleIndex::default(),
            naming: None,
            host: Some(MemoryHead::new()),
        }
    }
}

impl Default for ContextBuilder<MemoryHead> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: StyleHost> ContextBuilder<H> {
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn index(mut self, index: StaticStyleIndex) -> Self {
        self.index = index;
        self
    }

    pub fn naming(mut self, naming: ClassNaming) -> Self {
        self.naming = Some(naming);
        self
    }

    /// Replaces the host, changing the builder's host type.
    pub fn host<H2: StyleHost>(self, host: H2) -> ContextBuilder<H2> {
        ContextBuilder {
            theme: self.theme,
            index: self.index,
            naming: self.naming,
            host: Some(host),
        }
    }

    /// Drops the host: the built context resolves through the static index only.
    pub fn headless(mut self) -> Self {
        self.host = None;
        self
    }

    /// Builds the context, validating the static index against the
    /// prefixes reserved for dynamic classes.
    pub fn build(self) -> Result<GlazeContext<H>, IndexError> {
        let naming = self.naming.unwrap_or_else(ClassNaming::env_default);
        GlazeContext::from_parts(self.theme, self.index, naming, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_rule_plain() {
        let decl = Declaration::new("color", "red");
        assert_eq!(style_rule("d_abc", &decl), ".d_abc{color:red}");
    }

    #[test]
    fn test_style_rule_escapes_class() {
        let decl = Declaration::new("border", "1px solid #fff");
        let class_name = ClassNaming::Readable.class_name(&decl);
        let css = style_rule(&class_name, &decl);
        assert_eq!(css, r".DYNAMIC_border-1px_solid_\#fff{border:1px solid #fff}");
    }

    #[test]
    fn test_builder_defaults() {
        let context = GlazeContext::builder()
            .naming(ClassNaming::Hashed)
            .build()
            .unwrap();
        assert!(!context.is_headless());
        assert!(context.theme().aliases().is_empty());
        assert!(context.index().is_empty());
        assert_eq!(context.naming(), ClassNaming::Hashed);
        assert_eq!(context.live_classes(), 0);
    }

    #[test]
    fn test_builder_headless() {
        let context = GlazeContext::builder().headless().build().unwrap();
        assert!(context.is_headless());
        assert_eq!(context.with_host(|head| head.len()), None);
    }

    #[test]
    fn test_build_rejects_index_shadowing_dynamic_classes() {
        let shadowed = ClassNaming::Hashed.class_name(&Declaration::new("foo", "bar"));
        let index = StaticStyleIndex::new().with("color:blue", &shadowed);

        let result = GlazeContext::builder()
            .index(index.clone())
            .naming(ClassNaming::Hashed)
            .build();
        assert!(matches!(
            result,
            Err(IndexError::ReservedClassName { class_name, .. }) if class_name == shadowed
        ));

        let headless: Result<GlazeContext, _> =
            GlazeContext::headless(Theme::new(), index, ClassNaming::Readable);
        assert!(headless.is_err());
    }

    #[test]
    fn test_attach_injects_once() {
        let context = GlazeContext::new(
            Theme::new(),
            StaticStyleIndex::new(),
            ClassNaming::Hashed,
            MemoryHead::new(),
        )
        .unwrap();
        let decl = Declaration::new("color", "red");

        assert_eq!(context.lock().attach("d_x", &decl), Some(1));
        assert_eq!(context.lock().attach("d_x", &decl), Some(2));
        assert_eq!(context.with_host(|head| head.count("d_x")), Some(1));
        assert_eq!(
            context.with_host(|head| head.css("d_x").map(str::to_string)),
            Some(Some(".d_x{color:red}".to_string()))
        );
    }

    #[test]
    fn test_attach_headless_is_noop() {
        let context: GlazeContext =
            GlazeContext::headless(Theme::new(), StaticStyleIndex::new(), ClassNaming::Hashed)
                .unwrap();
        let decl = Declaration::new("color", "red");

        assert_eq!(context.lock().attach("d_x", &decl), None);
        assert_eq!(context.live_classes(), 0);
    }

    #[test]
    fn test_release_removes_element_at_zero() {
        let context = GlazeContext::builder()
            .naming(ClassNaming::Hashed)
            .build()
            .unwrap();
        let decl = Declaration::new("color", "red");
        context.lock().attach("d_x", &decl);
        context.lock().attach("d_x", &decl);

        context.lock().release("d_x", 1).unwrap();
        assert_eq!(context.instance_count("d_x"), Some(1));
        assert_eq!(context.with_host(|head| head.contains("d_x")), Some(true));

        context.lock().release("d_x", 1).unwrap();
        assert_eq!(context.instance_count("d_x"), None);
        assert_eq!(context.with_host(|head| head.is_empty()), Some(true));
    }
}
