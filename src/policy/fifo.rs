//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use super::{PolicyKind, Replacer};
use crate::common::PageId;

/// Evicts pages in the order they were admitted.
///
/// A hit does NOT refresh a page's position; that is the defining
/// difference from LRU.
#[derive(Debug, Clone, Default)]
pub struct FifoReplacer {
    /// Resident pages in arrival order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    in_queue: HashSet<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Replacer for FifoReplacer {
    const KIND: PolicyKind = PolicyKind::Fifo;

    fn contains(&self, page: PageId) -> bool {
        self.in_queue.contains(&page)
    }

    fn record_access(&mut self, _page: PageId, _step: usize) {}

    fn admit(&mut self, page: PageId, _step: usize) {
        if self.in_queue.insert(page) {
            self.queue.push_back(page);
        }
    }

    fn evict(&mut self, _step: usize) -> Option<PageId> {
        let victim = self.queue.pop_front()?;
        self.in_queue.remove(&victim);
        Some(victim)
    }

    fn size(&self) -> usize {
        self.queue.len()
    }

    fn resident(&self) -> Vec<PageId> {
        self.queue.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: u64) -> PageId {
        PageId::new(id)
    }

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new();

        replacer.admit(pid(1), 0);
        replacer.admit(pid(2), 1);
        replacer.admit(pid(3), 2);
        assert_eq!(replacer.size(), 3);

        // Should evict in FIFO order
        assert_eq!(replacer.evict(3), Some(pid(1)));
        assert_eq!(replacer.evict(3), Some(pid(2)));
        assert_eq!(replacer.evict(3), Some(pid(3)));
        assert_eq!(replacer.evict(3), None);
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut replacer = FifoReplacer::new();

        replacer.admit(pid(1), 0);
        replacer.admit(pid(2), 1);
        replacer.record_access(pid(1), 2); // Access again - should NOT reorder

        assert_eq!(replacer.resident(), vec![pid(1), pid(2)]);
        assert_eq!(replacer.evict(3), Some(pid(1)));
    }

    #[test]
    fn test_fifo_contains_tracks_eviction() {
        let mut replacer = FifoReplacer::new();

        replacer.admit(pid(7), 0);
        assert!(replacer.contains(pid(7)));
        replacer.evict(1);
        assert!(!replacer.contains(pid(7)));
        assert_eq!(replacer.size(), 0);
    }
}
