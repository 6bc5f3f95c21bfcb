//! Page-replacement policies.
//!
//! Every policy plugs into one shared simulation loop through the
//! [`Replacer`] trait. The loop owns fault detection and the capacity
//! bound; a replacer only decides ordering and which page to evict.
//!
//! Currently implements:
//! - [`FifoReplacer`] - First-In-First-Out (hits do not reorder)
//! - [`LruReplacer`] - Least Recently Used (every reference reorders)
//! - [`OptimalReplacer`] - Clairvoyant, evicts the page used farthest ahead

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::common::{Error, FrameCapacity, PageId};
use crate::reference::ReferenceString;
use crate::trace::{SimulationResult, Step, Trace};

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::{Lookahead, OptimalReplacer};

/// Eviction policy plugged into [`simulate_with`].
///
/// The driver calls exactly one of [`record_access`](Replacer::record_access)
/// (hit) or [`admit`](Replacer::admit) (fault) per step, and calls
/// [`evict`](Replacer::evict) before `admit` whenever the resident set is
/// full.
pub trait Replacer {
    /// Which policy this replacer implements.
    const KIND: PolicyKind;

    /// Is `page` currently resident?
    fn contains(&self, page: PageId) -> bool;

    /// Record a hit on a resident page at `step`.
    fn record_access(&mut self, page: PageId, step: usize);

    /// Admit a non-resident page at `step`. The caller guarantees room.
    fn admit(&mut self, page: PageId, step: usize);

    /// Choose and remove a victim while processing `step`.
    ///
    /// Returns None only when nothing is resident.
    fn evict(&mut self, step: usize) -> Option<PageId>;

    /// Number of resident pages.
    fn size(&self) -> usize;

    /// Resident pages in the replacer's own order.
    fn resident(&self) -> Vec<PageId>;
}

/// Run `replacer` over `refs` with `capacity` frames.
///
/// A step is a fault iff the page is not resident before the step. On a
/// fault with a full set, one page is evicted first, so the recorded
/// resident set never exceeds `capacity`.
pub fn simulate_with<R: Replacer>(
    mut replacer: R,
    refs: &ReferenceString,
    capacity: FrameCapacity,
) -> SimulationResult {
    let mut trace = Trace::with_capacity(refs.len());

    for (step, &page) in refs.iter().enumerate() {
        let fault = !replacer.contains(page);

        if fault {
            if replacer.size() >= capacity.get() {
                if let Some(victim) = replacer.evict(step) {
                    trace!(
                        "{}: step {} evicts page {} for page {}",
                        R::KIND,
                        step,
                        victim,
                        page
                    );
                }
            }
            replacer.admit(page, step);
        } else {
            replacer.record_access(page, step);
        }

        debug_assert!(replacer.size() <= capacity.get());
        trace.push(Step {
            page,
            resident: replacer.resident(),
            fault,
        });
    }

    let result = SimulationResult::new(R::KIND, trace);
    debug!(
        "{}: {} references, {} frames, {} faults",
        R::KIND,
        refs.len(),
        capacity,
        result.faults()
    );
    result
}

/// Run the named policy over `refs` with `capacity` frames.
///
/// Deterministic: identical inputs always produce identical traces.
///
/// # Example
/// ```
/// use pagesim::policy::{simulate, PolicyKind};
/// use pagesim::reference::parse_input;
///
/// let (refs, frames) = parse_input("1,2,3,4,1,2,5,1,2,3,4,5", "3").unwrap();
/// assert_eq!(simulate(PolicyKind::Fifo, &refs, frames).faults(), 9);
/// ```
pub fn simulate(
    policy: PolicyKind,
    refs: &ReferenceString,
    capacity: FrameCapacity,
) -> SimulationResult {
    match policy {
        PolicyKind::Fifo => simulate_with(FifoReplacer::new(), refs, capacity),
        PolicyKind::Lru => simulate_with(LruReplacer::new(), refs, capacity),
        PolicyKind::Optimal => simulate_with(OptimalReplacer::new(refs), refs, capacity),
    }
}

/// Available replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Optimal,
}

impl PolicyKind {
    /// All policies in tie-break preference order (FIFO, LRU, Optimal).
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
        }
    }

    /// Shorthand for [`simulate`].
    pub fn simulate(&self, refs: &ReferenceString, capacity: FrameCapacity) -> SimulationResult {
        simulate(*self, refs, capacity)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" => Ok(PolicyKind::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
