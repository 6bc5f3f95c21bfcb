//! Optimal (clairvoyant) replacement policy.
//!
//! Evicts the resident page whose next reference lies farthest in the
//! future. A page that is never referenced again counts as infinitely far
//! away and is chosen immediately.
//!
//! # Tie-breaking
//! Resident pages are enumerated in admission order: oldest admission
//! first, an evicted page's slot is dropped and the new page is appended.
//! The first never-used-again page in that order wins; otherwise the page
//! with the strictly largest next-use index wins. Distinct pages cannot
//! share a next-use index, so ties only arise among never-used-again
//! pages.

use std::collections::{HashMap, HashSet};

use super::{PolicyKind, Replacer};
use crate::common::PageId;
use crate::reference::ReferenceString;

/// How the replacer finds each page's next use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lookahead {
    /// Next-occurrence table built once in a backward pass. O(n) total.
    #[default]
    Precomputed,

    /// Forward scan of the remaining references on every eviction.
    /// O(n * frames) per eviction; kept as the reference behavior.
    Scan,
}

#[derive(Debug, Clone, Copy)]
struct Resident {
    page: PageId,
    /// Next reference strictly after the page's latest reference.
    /// Only maintained under [`Lookahead::Precomputed`].
    next_use: Option<usize>,
}

/// Clairvoyant replacer over a known reference string.
///
/// Must be driven over the same reference string it was built from.
#[derive(Debug, Clone)]
pub struct OptimalReplacer<'a> {
    refs: &'a [PageId],
    lookahead: Lookahead,
    /// `next_use[i]` is the next index after `i` referencing `refs[i]`.
    next_use: Vec<Option<usize>>,
    /// Resident pages in admission order.
    frames: Vec<Resident>,
    resident: HashSet<PageId>,
}

impl<'a> OptimalReplacer<'a> {
    /// Create a replacer using precomputed next-occurrence indices.
    pub fn new(refs: &'a ReferenceString) -> Self {
        Self::with_lookahead(refs, Lookahead::Precomputed)
    }

    /// Create a replacer with an explicit lookahead strategy.
    pub fn with_lookahead(refs: &'a ReferenceString, lookahead: Lookahead) -> Self {
        let refs = refs.as_slice();
        let next_use = match lookahead {
            Lookahead::Precomputed => next_occurrences(refs),
            Lookahead::Scan => Vec::new(),
        };
        Self {
            refs,
            lookahead,
            next_use,
            frames: Vec::new(),
            resident: HashSet::new(),
        }
    }

    /// Lookahead strategy in use.
    pub fn lookahead(&self) -> Lookahead {
        self.lookahead
    }

    fn lookup(&self, step: usize) -> Option<usize> {
        self.next_use.get(step).copied().flatten()
    }

    /// Next use of `resident` strictly after `step`.
    fn next_use_after(&self, resident: &Resident, step: usize) -> Option<usize> {
        match self.lookahead {
            Lookahead::Precomputed => resident.next_use,
            Lookahead::Scan => self
                .refs
                .iter()
                .enumerate()
                .skip(step + 1)
                .find(|&(_, &p)| p == resident.page)
                .map(|(i, _)| i),
        }
    }
}

/// Build the next-occurrence table in one backward pass.
fn next_occurrences(refs: &[PageId]) -> Vec<Option<usize>> {
    let mut next = vec![None; refs.len()];
    let mut last_seen: HashMap<PageId, usize> = HashMap::new();

    for (i, &page) in refs.iter().enumerate().rev() {
        next[i] = last_seen.insert(page, i);
    }

    next
}

impl Replacer for OptimalReplacer<'_> {
    const KIND: PolicyKind = PolicyKind::Optimal;

    fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    fn record_access(&mut self, page: PageId, step: usize) {
        let next_use = self.lookup(step);
        if let Some(slot) = self.frames.iter_mut().find(|r| r.page == page) {
            slot.next_use = next_use;
        }
    }

    fn admit(&mut self, page: PageId, step: usize) {
        if !self.resident.insert(page) {
            self.record_access(page, step);
            return;
        }
        self.frames.push(Resident {
            page,
            next_use: self.lookup(step),
        });
    }

    fn evict(&mut self, step: usize) -> Option<PageId> {
        let mut victim = None;
        let mut farthest = None;

        for (idx, slot) in self.frames.iter().enumerate() {
            match self.next_use_after(slot, step) {
                None => {
                    victim = Some(idx);
                    break;
                }
                Some(next) => {
                    if farthest.map_or(true, |f| next > f) {
                        farthest = Some(next);
                        victim = Some(idx);
                    }
                }
            }
        }

        let evicted = self.frames.remove(victim?).page;
        self.resident.remove(&evicted);
        Some(evicted)
    }

    fn size(&self) -> usize {
        self.frames.len()
    }

    fn resident(&self) -> Vec<PageId> {
        self.frames.iter().map(|r| r.page).collect()
    }
}
