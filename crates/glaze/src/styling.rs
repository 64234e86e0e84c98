//! Per-consumer style resolution and cleanup.
//!
//! A [`Styling`] is created for each logical attach point (a component, a
//! widget, a view) from a [`GlazeContext`]. It turns style descriptions into
//! class strings with [`Styling::sx`], remembering which dynamic classes it
//! added usages for. When the attach point goes away the consumer detaches,
//! explicitly with [`Styling::detach`] or implicitly on drop, and gives those
//! usages back. Styles nobody uses anymore are removed from the document.

use tracing::{error, trace};

use crate::context::GlazeContext;
use crate::error::RegistryError;
use crate::host::{MemoryHead, StyleHost};
use crate::ledger::OwnershipLedger;
use crate::resolve;
use crate::style::{Declaration, StyleDescription};

/// A style consumer bound to one [`GlazeContext`].
///
/// # Example
///
/// ```rust
/// use glaze::{ClassNaming, GlazeContext, StaticStyleIndex, StyleDescription, Theme};
///
/// let context = GlazeContext::builder()
///     .theme(Theme::new().alias("m", "margin").shorthand("margin", ["marginTop", "marginBottom"]))
///     .index(StaticStyleIndex::new().with("marginTop:0", "mt0"))
///     .naming(ClassNaming::Readable)
///     .build()
///     .unwrap();
///
/// let mut card = context.styling();
/// assert_eq!(card.sx(&StyleDescription::new().set("m", 0)), "mt0 DYNAMIC_marginBottom-0");
///
/// card.detach().unwrap();
/// assert_eq!(context.live_classes(), 0);
/// ```
pub struct Styling<H: StyleHost = MemoryHead> {
    context: GlazeContext<H>,
    ledger: OwnershipLedger,
}

impl<H: StyleHost> Styling<H> {
    pub(crate) fn new(context: GlazeContext<H>) -> Self {
        Self {
            context,
            ledger: OwnershipLedger::new(),
        }
    }

    /// Resolves a style description to a space-separated class string.
    ///
    /// Each declaration resolves through the static index first. On a miss
    /// a dynamic class is synthesized and its usage recorded, injecting the
    /// style element on first use. Without a document, misses contribute
    /// nothing. This never fails.
    pub fn sx(&mut self, style: &StyleDescription) -> String {
        let declarations = resolve::declarations(self.context.theme(), style);

        let mut classes: Vec<String> = Vec::with_capacity(declarations.len());
        for declaration in &declarations {
            if let Some(class_name) = self.class_for(declaration) {
                classes.push(class_name);
            }
        }
        classes.join(" ")
    }

    fn class_for(&mut self, declaration: &Declaration) -> Option<String> {
        if let Some(class_name) = self.context.index().lookup(declaration) {
            return Some(class_name.to_string());
        }

        let class_name = self.context.naming().class_name(declaration);
        match self.context.lock().attach(&class_name, declaration) {
            Some(_) => {
                self.ledger.record(&class_name);
                Some(class_name)
            }
            None => {
                trace!(target: "glaze", %declaration, "no document; dropping dynamic style");
                None
            }
        }
    }

    /// The dynamic usages this consumer currently holds.
    pub fn ledger(&self) -> &OwnershipLedger {
        &self.ledger
    }

    pub fn context(&self) -> &GlazeContext<H> {
        &self.context
    }

    /// Gives back every usage this consumer recorded.
    ///
    /// Classes still used by other consumers keep their element with a lower
    /// count; the rest are removed from the document. An error means the
    /// registry was corrupted (a class was released elsewhere); all other
    /// classes are still released.
    pub fn detach(mut self) -> Result<(), RegistryError> {
        self.release_owned()
    }

    fn release_owned(&mut self) -> Result<(), RegistryError> {
        let owned = self.ledger.take();
        if owned.is_empty() {
            return Ok(());
        }

        let mut shared = self.context.lock();
        let mut first_error = None;
        for (class_name, usages) in owned {
            if let Err(err) = shared.release(&class_name, usages) {
                error!(target: "glaze", %err, "instance registry corrupted on detach");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<H: StyleHost> Drop for Styling<H> {
    fn drop(&mut self) {
        if let Err(err) = self.release_owned() {
            if cfg!(debug_assertions) && !std::thread::panicking() {
                panic!("instance registry corrupted: {err}");
            }
        }
    }
}
