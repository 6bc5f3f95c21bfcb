//! Simulation traces and results.
//!
//! A [`Trace`] has one [`Step`] per reference, in reference order. Every
//! policy produces the same shape of trace, so results are directly
//! comparable; policies only differ in which page gets evicted.

use std::ops::Index;

use crate::common::PageId;
use crate::policy::PolicyKind;

/// One processed reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    /// Page referenced at this step.
    pub page: PageId,

    /// Resident pages *after* processing this step, in the policy's own
    /// order. Always contains `page`.
    pub resident: Vec<PageId>,

    /// True iff `page` was not resident before this step.
    pub fault: bool,
}

/// Ordered per-step history of a simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Number of steps flagged as faults.
    pub fn fault_count(&self) -> usize {
        self.steps.iter().filter(|s| s.fault).count()
    }

    /// Compute a CRC32 fingerprint of the trace.
    ///
    /// Each step is encoded as: page (u64 LE), fault (1 byte), resident
    /// count (u64 LE), then each resident page (u64 LE). Identical traces
    /// always produce the same fingerprint.
    pub fn checksum(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();

        for step in &self.steps {
            hasher.update(&step.page.0.to_le_bytes());
            hasher.update(&[step.fault as u8]);
            hasher.update(&(step.resident.len() as u64).to_le_bytes());
            for page in &step.resident {
                hasher.update(&page.0.to_le_bytes());
            }
        }

        hasher.finalize()
    }
}

impl Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Outcome of running one policy over one reference string.
///
/// `faults` is derived from the trace at construction and can never
/// disagree with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationResult {
    policy: PolicyKind,
    faults: usize,
    trace: Trace,
}

impl SimulationResult {
    pub fn new(policy: PolicyKind, trace: Trace) -> Self {
        Self {
            policy,
            faults: trace.fault_count(),
            trace,
        }
    }

    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Total page faults.
    pub fn faults(&self) -> usize {
        self.faults
    }

    /// Total hits (steps that were not faults).
    pub fn hits(&self) -> usize {
        self.trace.len() - self.faults
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn into_trace(self) -> Trace {
        self.trace
    }

    /// CRC32 fingerprint of the trace. See [`Trace::checksum`].
    pub fn checksum(&self) -> u32 {
        self.trace.checksum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(page: u64, resident: &[u64], fault: bool) -> Step {
        Step {
            page: PageId::new(page),
            resident: resident.iter().copied().map(PageId::new).collect(),
            fault,
        }
    }

    fn sample_trace() -> Trace {
        let mut trace = Trace::with_capacity(3);
        trace.push(step(1, &[1], true));
        trace.push(step(2, &[1, 2], true));
        trace.push(step(1, &[1, 2], false));
        trace
    }

    #[test]
    fn test_fault_count() {
        assert_eq!(sample_trace().fault_count(), 2);
    }

    #[test]
    fn test_result_faults_match_trace() {
        let result = SimulationResult::new(PolicyKind::Fifo, sample_trace());
        assert_eq!(result.faults(), 2);
        assert_eq!(result.hits(), 1);
        assert_eq!(result.faults(), result.trace().fault_count());
    }

    #[test]
    fn test_checksum_stable() {
        assert_eq!(sample_trace().checksum(), sample_trace().checksum());
    }

    #[test]
    fn test_checksum_detects_fault_flag_change() {
        let a = sample_trace();
        let mut b = Trace::with_capacity(3);
        b.push(step(1, &[1], true));
        b.push(step(2, &[1, 2], true));
        b.push(step(1, &[1, 2], true));
        assert_ne!(a.checksum(), b.checksum());
    }

    #[test]
    fn test_checksum_detects_resident_order() {
        let mut a = Trace::default();
        a.push(step(2, &[1, 2], true));
        let mut b = Trace::default();
        b.push(step(2, &[2, 1], true));
        assert_ne!(a.checksum(), b.checksum());
    }
}
