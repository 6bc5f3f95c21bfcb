//! pagesim - A page-replacement policy simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                             pagesim                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │        Presentation (report/, bin/pagesim)              │    │
//! │  │      Step tables, comparison table, residency grid      │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! │                                ↑                                │
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │      Comparator (compare/) + Summarizer (summary/)      │    │
//! │  │     Best policy by fewest faults, fault rate, flags     │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! │                                ↑                                │
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │              Policy engine (policy/)                    │    │
//! │  │   ┌─────────────────────────────────────────────────┐   │    │
//! │  │   │   Replacers: FIFO | LRU | Optimal               │   │    │
//! │  │   │      (one shared simulation loop)               │   │    │
//! │  │   └─────────────────────────────────────────────────┘   │    │
//! │  │              Trace + SimulationResult                   │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! │                                ↑                                │
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │           Input (reference/)                            │    │
//! │  │     Validator + random reference-string generator       │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameCapacity, Error, config)
//! - [`reference`] - Reference strings, input validation, generation
//! - [`policy`] - Replacement policies and the simulation loop
//! - [`trace`] - Per-step traces and simulation results
//! - [`compare`] - Running all policies and picking the best
//! - [`summary`] - Fault rate, per-step flags, residency grid
//! - [`report`] - Plain-text rendering
//!
//! # Quick Start
//! ```
//! use pagesim::{compare_all, parse_input, simulate, summarize, PolicyKind};
//!
//! let (refs, frames) = parse_input("1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5", "3").unwrap();
//!
//! let lru = simulate(PolicyKind::Lru, &refs, frames);
//! assert_eq!(lru.faults(), 10);
//! assert_eq!(summarize(&lru, refs.len()).per_step_faults.len(), 12);
//!
//! assert_eq!(compare_all(&refs, frames).best(), PolicyKind::Optimal);
//! ```

pub mod common;
pub mod compare;
pub mod policy;
pub mod reference;
pub mod report;
pub mod summary;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameCapacity, PageId, Result};

pub use compare::{compare_all, ComparisonResult};
pub use policy::{simulate, PolicyKind, Replacer};
pub use reference::{parse_input, ReferenceString};
pub use summary::{summarize, Summary};
pub use trace::{SimulationResult, Step, Trace};
