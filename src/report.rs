//! Plain-text reports for single runs and comparisons.

use std::fmt;

use crate::common::FrameCapacity;
use crate::compare::ComparisonResult;
use crate::reference::ReferenceString;
use crate::summary::{summarize, ResidencyGrid};
use crate::trace::SimulationResult;

/// Width of the resident-pages column in the step table.
const FRAMES_COLUMN: usize = 15;

/// Single-policy run: header, totals, and a step-by-step table.
///
/// The fault column is the flag recorded during simulation.
pub struct SingleReport<'a> {
    pub refs: &'a ReferenceString,
    pub capacity: FrameCapacity,
    pub result: &'a SimulationResult,
}

impl fmt::Display for SingleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = summarize(self.result, self.refs.len());

        writeln!(f, "Reference String: [{}]", self.refs)?;
        writeln!(f, "Number of Frames: {}", self.capacity)?;
        writeln!(f, "Replacement Strategy: {}", self.result.policy())?;
        writeln!(f, "Total Page Faults: {}", summary.faults)?;
        writeln!(f, "Fault Rate: {:.2}%", summary.fault_rate)?;
        writeln!(f)?;

        writeln!(f, "Step-by-Step Page Allocation:")?;
        writeln!(f, "Ref\tFrames\t\tFault")?;
        writeln!(f, "{}", "-".repeat(30))?;

        for step in self.result.trace() {
            let frames = if step.resident.is_empty() {
                String::from("-")
            } else {
                step.resident
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let fault = if step.fault { "Yes" } else { "No" };
            writeln!(
                f,
                "{}\t{:<width$}\t{}",
                step.page,
                frames,
                fault,
                width = FRAMES_COLUMN
            )?;
        }
        Ok(())
    }
}

/// Comparison table and the best policy.
pub struct ComparisonReport<'a> {
    pub refs: &'a ReferenceString,
    pub capacity: FrameCapacity,
    pub comparison: &'a ComparisonResult,
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reference String: [{}]", self.refs)?;
        writeln!(f, "Number of Frames: {}", self.capacity)?;
        writeln!(f)?;

        writeln!(f, "Comparison of Page Replacement Algorithms:")?;
        writeln!(f, "{}", "-".repeat(50))?;
        writeln!(f, "Algorithm\tPage Faults\tFault Rate")?;
        writeln!(f, "{}", "-".repeat(50))?;

        for (policy, result) in self.comparison.iter() {
            let summary = summarize(result, self.refs.len());
            writeln!(
                f,
                "{}\t\t{}\t\t{:.2}%",
                policy, summary.faults, summary.fault_rate
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Best algorithm for this reference string: {}",
            self.comparison.best()
        )
    }
}

pub fn render_single(
    refs: &ReferenceString,
    capacity: FrameCapacity,
    result: &SimulationResult,
) -> String {
    SingleReport {
        refs,
        capacity,
        result,
    }
    .to_string()
}

pub fn render_comparison(
    refs: &ReferenceString,
    capacity: FrameCapacity,
    comparison: &ComparisonResult,
) -> String {
    ComparisonReport {
        refs,
        capacity,
        comparison,
    }
    .to_string()
}

/// Render the residency grid with a title line.
pub fn render_grid(result: &SimulationResult) -> String {
    let grid = ResidencyGrid::from_trace(result.trace());
    format!(
        "{} Page Replacement (Faults: {})\n{}",
        result.policy(),
        result.faults(),
        grid
    )
}

/// Render one residency grid per policy, separated by blank lines.
pub fn render_comparison_grids(comparison: &ComparisonResult) -> String {
    comparison
        .results()
        .iter()
        .map(render_grid)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare_all;
    use crate::policy::{simulate, PolicyKind};
    use crate::reference::parse_input;

    #[test]
    fn test_render_single() {
        let (refs, frames) = parse_input("1,2,1", "1").unwrap();
        let result = simulate(PolicyKind::Fifo, &refs, frames);
        let text = render_single(&refs, frames, &result);

        assert!(text.contains("Reference String: [1, 2, 1]"));
        assert!(text.contains("Replacement Strategy: FIFO"));
        assert!(text.contains("Total Page Faults: 3"));
        assert!(text.contains("Fault Rate: 100.00%"));

        let rows: Vec<&str> = text.lines().skip_while(|l| !l.starts_with("---")).skip(1).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("1\t1"));
        assert!(rows[1].ends_with("Yes"));
    }

    #[test]
    fn test_render_single_hit_row() {
        let (refs, frames) = parse_input("4,4", "2").unwrap();
        let result = simulate(PolicyKind::Lru, &refs, frames);
        let text = render_single(&refs, frames, &result);
        assert!(text.lines().last().unwrap().ends_with("No"));
    }

    #[test]
    fn test_render_comparison() {
        let (refs, frames) = parse_input("1,2,3,4,1,2,5,1,2,3,4,5", "3").unwrap();
        let text = render_comparison(&refs, frames, &compare_all(&refs, frames));

        assert!(text.contains("FIFO\t\t9\t\t75.00%"));
        assert!(text.contains("LRU\t\t10\t\t83.33%"));
        assert!(text.contains("Optimal\t\t7\t\t58.33%"));
        assert!(text.ends_with("Best algorithm for this reference string: Optimal\n"));
    }

    #[test]
    fn test_render_comparison_grids() {
        let (refs, frames) = parse_input("1,2,3,4,1,2,5,1,2,3,4,5", "3").unwrap();
        let text = render_comparison_grids(&compare_all(&refs, frames));

        let titles: Vec<&str> = text
            .lines()
            .filter(|l| l.contains("Page Replacement"))
            .collect();
        assert_eq!(
            titles,
            vec![
                "FIFO Page Replacement (Faults: 9)",
                "LRU Page Replacement (Faults: 10)",
                "Optimal Page Replacement (Faults: 7)",
            ]
        );
        // 5 distinct pages per grid.
        assert_eq!(text.lines().filter(|l| l.contains(" | ")).count(), 15);
    }

    #[test]
    fn test_render_grid_title() {
        let (refs, frames) = parse_input("1,2", "2").unwrap();
        let result = simulate(PolicyKind::Optimal, &refs, frames);
        let text = render_grid(&result);
        assert!(text.starts_with("Optimal Page Replacement (Faults: 2)\n"));
    }
}
