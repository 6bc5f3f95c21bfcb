//! Presentation-ready summaries of a completed simulation.
//!
//! Everything here reads the fault flags recorded during simulation. Fault
//! status is never recomputed from resident-set membership, so display and
//! simulation cannot disagree.

use std::fmt;

use crate::common::PageId;
use crate::trace::{SimulationResult, Trace};

/// Fault statistics for one run.
///
/// # Example
/// ```
/// use pagesim::policy::{simulate, PolicyKind};
/// use pagesim::reference::parse_input;
/// use pagesim::summary::summarize;
///
/// let (refs, frames) = parse_input("1,2,3,4,1,2,5,1,2,3,4,5", "3").unwrap();
/// let result = simulate(PolicyKind::Fifo, &refs, frames);
/// let summary = summarize(&result, refs.len());
/// assert_eq!(summary.fault_rate, 75.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub faults: usize,
    pub hits: usize,

    /// Faults as a percentage of references (0.0 to 100.0).
    pub fault_rate: f64,

    /// Recorded fault flag for each step.
    pub per_step_faults: Vec<bool>,
}

impl Summary {
    /// Hits as a percentage of references (0.0 to 100.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.faults;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary {{ faults: {}, hits: {}, fault_rate: {:.2}% }}",
            self.faults, self.hits, self.fault_rate
        )
    }
}

/// Summarize `result` for a reference string of `ref_len` references.
///
/// A zero `ref_len` yields a fault rate of 0.0.
pub fn summarize(result: &SimulationResult, ref_len: usize) -> Summary {
    let faults = result.faults();
    let fault_rate = if ref_len == 0 {
        0.0
    } else {
        faults as f64 / ref_len as f64 * 100.0
    };

    Summary {
        faults,
        hits: result.hits(),
        fault_rate,
        per_step_faults: result.trace().iter().map(|s| s.fault).collect(),
    }
}

/// Page-by-step residency matrix.
///
/// Rows are distinct referenced pages in first-appearance order; cell
/// `[row][step]` is true iff the page is resident after that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidencyGrid {
    pub pages: Vec<PageId>,
    pub cells: Vec<Vec<bool>>,
}

impl ResidencyGrid {
    /// Build the grid from a trace.
    pub fn from_trace(trace: &Trace) -> Self {
        let mut pages: Vec<PageId> = Vec::new();
        for step in trace {
            if !pages.contains(&step.page) {
                pages.push(step.page);
            }
        }

        let cells = pages
            .iter()
            .map(|page| trace.iter().map(|s| s.resident.contains(page)).collect())
            .collect();

        Self { pages, cells }
    }

    /// Number of steps (columns).
    pub fn steps(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }
}

/// One row per page: `#` resident, `.` absent.
impl fmt::Display for ResidencyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .pages
            .iter()
            .map(|p| p.to_string().len())
            .max()
            .unwrap_or(1);

        for (page, row) in self.pages.iter().zip(&self.cells) {
            write!(f, "{:>width$} |", page, width = width)?;
            for &present in row {
                f.write_str(if present { " #" } else { " ." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{simulate, PolicyKind};
    use crate::reference::parse_input;

    #[test]
    fn test_summarize_fault_rate() {
        let (refs, frames) = parse_input("1,2,3,4,1,2,5,1,2,3,4,5", "3").unwrap();
        let result = simulate(PolicyKind::Optimal, &refs, frames);
        let summary = summarize(&result, refs.len());

        assert_eq!(summary.faults, 7);
        assert_eq!(summary.hits, 5);
        assert!((summary.fault_rate - 7.0 / 12.0 * 100.0).abs() < 1e-9);
        assert!((summary.hit_rate() - 5.0 / 12.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_per_step_faults_reuse_recorded_flags() {
        let (refs, frames) = parse_input("1,2,1,3", "2").unwrap();
        let result = simulate(PolicyKind::Lru, &refs, frames);
        let summary = summarize(&result, refs.len());

        assert_eq!(summary.per_step_faults, vec![true, true, false, true]);
        let recorded: Vec<bool> = result.trace().iter().map(|s| s.fault).collect();
        assert_eq!(summary.per_step_faults, recorded);
    }

    #[test]
    fn test_summarize_zero_length() {
        let (refs, frames) = parse_input("1", "1").unwrap();
        let result = simulate(PolicyKind::Fifo, &refs, frames);
        assert_eq!(summarize(&result, 0).fault_rate, 0.0);
    }

    #[test]
    fn test_summary_display() {
        let (refs, frames) = parse_input("1,2,3,4,1,2,5,1,2,3,4,5", "3").unwrap();
        let result = simulate(PolicyKind::Fifo, &refs, frames);
        let display = format!("{}", summarize(&result, refs.len()));

        assert!(display.contains("faults: 9"));
        assert!(display.contains("75.00%"));
    }

    #[test]
    fn test_residency_grid() {
        let (refs, frames) = parse_input("2,1,2,3", "2").unwrap();
        let result = simulate(PolicyKind::Fifo, &refs, frames);
        let grid = ResidencyGrid::from_trace(result.trace());

        assert_eq!(
            grid.pages,
            vec![PageId::new(2), PageId::new(1), PageId::new(3)]
        );
        assert_eq!(grid.steps(), 4);
        // FIFO evicts 2 at the last step.
        assert_eq!(grid.cells[0], vec![true, true, true, false]);
        assert_eq!(grid.cells[1], vec![false, true, true, true]);
        assert_eq!(grid.cells[2], vec![false, false, false, true]);
    }

    #[test]
    fn test_residency_grid_display() {
        let (refs, frames) = parse_input("1,2", "1").unwrap();
        let result = simulate(PolicyKind::Lru, &refs, frames);
        let text = ResidencyGrid::from_trace(result.trace()).to_string();
        assert_eq!(text, "1 | # .\n2 | . #\n");
    }
}
