//! Running every policy over the same input and picking the best.

use log::debug;

use crate::common::FrameCapacity;
use crate::policy::{simulate, PolicyKind};
use crate::reference::ReferenceString;
use crate::trace::SimulationResult;

/// Results of all policies over one reference string and capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    /// One result per policy, in [`PolicyKind::ALL`] order.
    results: Vec<SimulationResult>,
    best: PolicyKind,
}

impl ComparisonResult {
    /// Policy with the fewest faults.
    ///
    /// Ties go to the earliest policy in FIFO, LRU, Optimal order.
    pub fn best(&self) -> PolicyKind {
        self.best
    }

    pub fn best_result(&self) -> &SimulationResult {
        &self.results[self.index_of(self.best)]
    }

    /// Result for `policy`.
    pub fn get(&self, policy: PolicyKind) -> &SimulationResult {
        &self.results[self.index_of(policy)]
    }

    /// All results in FIFO, LRU, Optimal order.
    pub fn results(&self) -> &[SimulationResult] {
        &self.results
    }

    pub fn iter(&self) -> impl Iterator<Item = (PolicyKind, &SimulationResult)> {
        self.results.iter().map(|r| (r.policy(), r))
    }

    fn index_of(&self, policy: PolicyKind) -> usize {
        // Discriminants follow `PolicyKind::ALL` order.
        policy as usize
    }
}

/// Run FIFO, LRU and Optimal independently and select the best.
///
/// The best policy is the first minimum-fault policy in FIFO, LRU, Optimal
/// order, so FIFO wins a tie with LRU and both win a tie with Optimal.
///
/// # Example
/// ```
/// use pagesim::compare::compare_all;
/// use pagesim::policy::PolicyKind;
/// use pagesim::reference::parse_input;
///
/// let (refs, frames) = parse_input("1,2,3,4,1,2,5,1,2,3,4,5", "3").unwrap();
/// assert_eq!(compare_all(&refs, frames).best(), PolicyKind::Optimal);
/// ```
pub fn compare_all(refs: &ReferenceString, capacity: FrameCapacity) -> ComparisonResult {
    let results: Vec<SimulationResult> = PolicyKind::ALL
        .iter()
        .map(|&policy| simulate(policy, refs, capacity))
        .collect();

    let mut best = PolicyKind::ALL[0];
    let mut fewest = usize::MAX;
    for result in &results {
        // Strict comparison keeps the earliest policy on ties.
        if result.faults() < fewest {
            fewest = result.faults();
            best = result.policy();
        }
    }

    debug!("best policy {} with {} faults", best, fewest);
    ComparisonResult { results, best }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::parse_input;

    #[test]
    fn test_belady_best_is_optimal() {
        let (refs, frames) = parse_input("1,2,3,4,1,2,5,1,2,3,4,5", "3").unwrap();
        let cmp = compare_all(&refs, frames);

        assert_eq!(cmp.best(), PolicyKind::Optimal);
        assert_eq!(cmp.get(PolicyKind::Fifo).faults(), 9);
        assert_eq!(cmp.get(PolicyKind::Lru).faults(), 10);
        assert_eq!(cmp.get(PolicyKind::Optimal).faults(), 7);
        assert_eq!(cmp.best_result().faults(), 7);
    }

    #[test]
    fn test_all_tied_prefers_fifo() {
        // Every page faults once regardless of policy.
        let (refs, frames) = parse_input("1,2,3,1,2,3", "3").unwrap();
        let cmp = compare_all(&refs, frames);
        assert!(cmp.results().iter().all(|r| r.faults() == 3));
        assert_eq!(cmp.best(), PolicyKind::Fifo);
    }

    #[test]
    fn test_lru_beats_fifo_tie_with_optimal_prefers_lru() {
        // FIFO: 5 faults; LRU and Optimal: 4 faults.
        let (refs, frames) = parse_input("1,2,1,3,1,2", "2").unwrap();
        let cmp = compare_all(&refs, frames);
        assert_eq!(cmp.get(PolicyKind::Fifo).faults(), 5);
        assert_eq!(cmp.get(PolicyKind::Lru).faults(), 4);
        assert_eq!(cmp.get(PolicyKind::Optimal).faults(), 4);
        assert_eq!(cmp.best(), PolicyKind::Lru);
    }

    #[test]
    fn test_results_in_preference_order() {
        let (refs, frames) = parse_input("4,2,4", "1").unwrap();
        let cmp = compare_all(&refs, frames);
        let order: Vec<PolicyKind> = cmp.iter().map(|(p, _)| p).collect();
        assert_eq!(order, PolicyKind::ALL.to_vec());
    }
}
