//! Instance registry for dynamic classes.
//!
//! The registry is the single source of truth for whether a dynamic class
//! is still used anywhere in a render tree. Each entry holds a usage count
//! and the handle to the style element injected for it. A class name is
//! present exactly while its element exists: entries are created together
//! with the element and removed together with it, never left at zero.

use std::collections::HashMap;

use crate::error::RegistryError;

#[derive(Debug)]
struct Instance<T> {
    count: usize,
    handle: T,
}

/// Outcome of [`InstanceRegistry::release`].
#[derive(Debug, PartialEq, Eq)]
pub enum Release<T> {
    /// Other consumers still use the class; carries the remaining count.
    Retained(usize),
    /// The last usage went away; the caller must release the handle.
    Freed(T),
}

/// Map from dynamic class name to usage count and element handle.
#[derive(Debug)]
pub struct InstanceRegistry<T> {
    instances: HashMap<String, Instance<T>>,
}

impl<T> Default for InstanceRegistry<T> {
    fn default() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }
}

impl<T> InstanceRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one usage of a class and returns the new count.
    ///
    /// `create` runs only when the class has no entry yet; its handle is
    /// stored with the entry.
    pub fn acquire(&mut self, class_name: &str, create: impl FnOnce() -> T) -> usize {
        let instance = self
            .instances
            .entry(class_name.to_string())
            .or_insert_with(|| Instance {
                count: 0,
                handle: create(),
            });
        instance.count += 1;
        instance.count
    }

    /// Removes `usages` usages of a class.
    ///
    /// When the count reaches zero the entry is deleted and its handle is
    /// returned. Releasing a class that has no entry, or more usages than
    /// it holds, leaves the registry untouched and reports corruption.
    pub fn release(&mut self, class_name: &str, usages: usize) -> Result<Release<T>, RegistryError> {
        let live = match self.instances.get_mut(class_name) {
            Some(instance) => instance,
            None => {
                return Err(RegistryError::MissingInstance {
                    class_name: class_name.to_string(),
                })
            }
        };

        if usages > live.count {
            return Err(RegistryError::CountUnderflow {
                class_name: class_name.to_string(),
                live: live.count,
                released: usages,
            });
        }

        live.count -= usages;
        if live.count > 0 {
            return Ok(Release::Retained(live.count));
        }

        match self.instances.remove(class_name) {
            Some(instance) => Ok(Release::Freed(instance.handle)),
            None => Err(RegistryError::MissingInstance {
                class_name: class_name.to_string(),
            }),
        }
    }

    /// Current usage count of a class, if it is live.
    pub fn count(&self, class_name: &str) -> Option<usize> {
        self.instances.get(class_name).map(|i| i.count)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.instances.contains_key(class_name)
    }

    /// Iterates live class names with their counts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.instances.iter().map(|(k, i)| (k.as_str(), i.count))
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
