//! LRU (Least Recently Used) replacement policy.

use std::collections::{HashSet, VecDeque};

use super::{PolicyKind, Replacer};
use crate::common::PageId;

/// Evicts the page whose most recent reference is oldest.
///
/// Every reference, hit or miss, moves the page to the most-recently-used
/// end. Moving a page on a hit is O(frames).
#[derive(Debug, Clone, Default)]
pub struct LruReplacer {
    /// Resident pages by recency (front = least recently used).
    order: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Replacer for LruReplacer {
    const KIND: PolicyKind = PolicyKind::Lru;

    fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    fn record_access(&mut self, page: PageId, _step: usize) {
        if let Some(pos) = self.order.iter().position(|&p| p == page) {
            self.order.remove(pos);
            self.order.push_back(page);
        }
    }

    fn admit(&mut self, page: PageId, step: usize) {
        if self.resident.insert(page) {
            self.order.push_back(page);
        } else {
            self.record_access(page, step);
        }
    }

    fn evict(&mut self, _step: usize) -> Option<PageId> {
        let victim = self.order.pop_front()?;
        self.resident.remove(&victim);
        Some(victim)
    }

    fn size(&self) -> usize {
        self.order.len()
    }

    fn resident(&self) -> Vec<PageId> {
        self.order.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: u64) -> PageId {
        PageId::new(id)
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut replacer = LruReplacer::new();

        replacer.admit(pid(1), 0);
        replacer.admit(pid(2), 1);
        replacer.admit(pid(3), 2);

        assert_eq!(replacer.evict(3), Some(pid(1)));
        assert_eq!(replacer.evict(3), Some(pid(2)));
    }

    #[test]
    fn test_lru_hit_refreshes() {
        let mut replacer = LruReplacer::new();

        replacer.admit(pid(1), 0);
        replacer.admit(pid(2), 1);
        replacer.record_access(pid(1), 2);

        assert_eq!(replacer.resident(), vec![pid(2), pid(1)]);
        assert_eq!(replacer.evict(3), Some(pid(2)));
        assert_eq!(replacer.evict(3), Some(pid(1)));
        assert_eq!(replacer.evict(3), None);
    }

    #[test]
    fn test_lru_hit_on_missing_page_is_noop() {
        let mut replacer = LruReplacer::new();

        replacer.admit(pid(1), 0);
        replacer.record_access(pid(9), 1);
        assert_eq!(replacer.resident(), vec![pid(1)]);
        assert!(!replacer.contains(pid(9)));
    }
}
