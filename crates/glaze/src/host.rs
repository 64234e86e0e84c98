//! The document head where dynamic style elements live.
//!
//! [`StyleHost`] is the seam between the engine and whatever owns the
//! document: a browser binding, a native renderer, or the in-memory
//! [`MemoryHead`] used for tests and off-screen rendering.

use indexmap::IndexMap;

/// A place style elements can be inserted into and removed from.
///
/// The engine calls [`insert_style`](Self::insert_style) at most once per
/// live dynamic class and hands the returned handle back to
/// [`remove_style`](Self::remove_style) when the class is no longer used.
pub trait StyleHost {
    /// Opaque handle to one inserted style element.
    type Handle;

    /// Inserts a style element with the given id and CSS text.
    fn insert_style(&mut self, id: &str, css: &str) -> Self::Handle;

    /// Removes a previously inserted style element.
    fn remove_style(&mut self, handle: Self::Handle);
}

/// A style element held by a [`MemoryHead`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    pub id: String,
    pub css: String,
}

/// Handle to an element in a [`MemoryHead`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryHandle(u64);

/// In-memory document head.
///
/// Elements keep their insertion order, so [`stylesheet`](Self::stylesheet)
/// reproduces the cascade order a browser would see.
///
/// # Example
///
/// ```rust
/// use glaze::host::{MemoryHead, StyleHost};
///
/// let mut head = MemoryHead::new();
/// let handle = head.insert_style("a", ".a{color:red}");
/// assert_eq!(head.css("a"), Some(".a{color:red}"));
///
/// head.remove_style(handle);
/// assert!(head.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryHead {
    next: u64,
    elements: IndexMap<u64, StyleElement>,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an element with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.count(id) > 0
    }

    /// Number of elements carrying this id.
    pub fn count(&self, id: &str) -> usize {
        self.elements.values().filter(|e| e.id == id).count()
    }

    /// CSS text of the first element with this id.
    pub fn css(&self, id: &str) -> Option<&str> {
        self.elements
            .values()
            .find(|e| e.id == id)
            .map(|e| e.css.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.values().map(|e| e.id.as_str())
    }

    pub fn elements(&self) -> impl Iterator<Item = &StyleElement> {
        self.elements.values()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Concatenates all element rules, one per line.
    pub fn stylesheet(&self) -> String {
        self.elements
            .values()
            .map(|e| e.css.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StyleHost for MemoryHead {
    type Handle = MemoryHandle;

    fn insert_style(&mut self, id: &str, css: &str) -> MemoryHandle {
        let key = self.next;
        self.next += 1;
        self.elements.insert(
            key,
            StyleElement {
                id: id.to_string(),
                css: css.to_string(),
            },
        );
        MemoryHandle(key)
    }

    fn remove_style(&mut self, handle: MemoryHandle) {
        self.elements.shift_remove(&handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_head_insert_and_query() {
        let mut head = MemoryHead::new();
        head.insert_style("a", ".a{color:red}");
        head.insert_style("b", ".b{color:blue}");

        assert!(head.contains("a"));
        assert_eq!(head.count("b"), 1);
        assert_eq!(head.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(head.stylesheet(), ".a{color:red}\n.b{color:blue}");
    }

    #[test]
    fn test_memory_head_remove_keeps_order() {
        let mut head = MemoryHead::new();
        head.insert_style("a", ".a{}");
        let b = head.insert_style("b", ".b{}");
        head.insert_style("c", ".c{}");

        head.remove_style(b);
        assert_eq!(head.ids().collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(!head.contains("b"));
    }

    #[test]
    fn test_memory_head_elements_in_insertion_order() {
        let mut head = MemoryHead::new();
        head.insert_style("a", ".a{color:red}");
        let b = head.insert_style("b", ".b{}");
        head.insert_style("c", ".c{color:blue}");
        head.remove_style(b);

        let elements: Vec<&StyleElement> = head.elements().collect();
        assert_eq!(
            elements,
            vec![
                &StyleElement { id: "a".to_string(), css: ".a{color:red}".to_string() },
                &StyleElement { id: "c".to_string(), css: ".c{color:blue}".to_string() },
            ]
        );
    }

    #[test]
    fn test_memory_head_counts_duplicate_ids() {
        let mut head = MemoryHead::new();
        head.insert_style("a", ".a{}");
        head.insert_style("a", ".a{}");
        assert_eq!(head.count("a"), 2);
    }
}
