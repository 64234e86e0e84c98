//! Per-consumer record of dynamic class usages.

use indexmap::IndexMap;

/// The usages one consumer added to the instance registry.
///
/// Counts here are only this consumer's share; the registry holds the
/// total across all consumers. On detach the ledger is drained and each
/// share is released from the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipLedger {
    owned: IndexMap<String, usize>,
}

impl OwnershipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more usage of a class and returns this consumer's count.
    pub fn record(&mut self, class_name: &str) -> usize {
        let count = self.owned.entry(class_name.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// This consumer's usage count for a class.
    pub fn contributed(&self, class_name: &str) -> Option<usize> {
        self.owned.get(class_name).copied()
    }

    /// Iterates classes in first-use order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.owned.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all usages recorded.
    pub fn total(&self) -> usize {
        self.owned.values().sum()
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    /// Empties the ledger, yielding every recorded share.
    pub(crate) fn take(&mut self) -> IndexMap<String, usize> {
        std::mem::take(&mut self.owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates() {
        let mut ledger = OwnershipLedger::new();
        assert_eq!(ledger.record("a"), 1);
        assert_eq!(ledger.record("a"), 2);
        assert_eq!(ledger.record("b"), 1);

        assert_eq!(ledger.contributed("a"), Some(2));
        assert_eq!(ledger.total(), 3);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_iter_first_use_order() {
        let mut ledger = OwnershipLedger::new();
        ledger.record("z");
        ledger.record("a");
        ledger.record("z");

        let order: Vec<(&str, usize)> = ledger.iter().collect();
        assert_eq!(order, vec![("z", 2), ("a", 1)]);
    }

    #[test]
    fn test_take_drains() {
        let mut ledger = OwnershipLedger::new();
        ledger.record("a");

        let taken = ledger.take();
        assert_eq!(taken.get("a"), Some(&1));
        assert!(ledger.is_empty());
    }
}
