//! Reference strings: the ordered page accesses that drive a simulation.
//!
//! # Components
//! - [`ReferenceString`] - Validated, immutable sequence of pages
//! - [`parse_input`] - Validates raw text input into a string + capacity
//! - [`generate`] - Random reference strings for experimentation

mod generator;
mod validator;

use std::fmt;
use std::ops::Index;

use crate::common::PageId;

pub use generator::{generate, GeneratorConfig};
pub use validator::{parse_frame_count, parse_input, parse_reference_string};

/// An ordered, non-empty, immutable sequence of page references.
///
/// Every policy replays the same `ReferenceString` without reordering or
/// mutating it. Order is exactly as entered: no sorting, no deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceString {
    pages: Vec<PageId>,
}

impl ReferenceString {
    /// Build from already-validated pages.
    ///
    /// Returns `None` for an empty sequence.
    pub fn new(pages: Vec<PageId>) -> Option<Self> {
        if pages.is_empty() {
            None
        } else {
            Some(Self { pages })
        }
    }

    /// Number of references.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageId> {
        self.pages.iter()
    }

    /// Distinct pages in order of first appearance.
    pub fn distinct_pages(&self) -> Vec<PageId> {
        let mut seen = std::collections::HashSet::new();
        self.pages
            .iter()
            .copied()
            .filter(|page| seen.insert(*page))
            .collect()
    }
}

impl Index<usize> for ReferenceString {
    type Output = PageId;

    fn index(&self, index: usize) -> &PageId {
        &self.pages[index]
    }
}

impl<'a> IntoIterator for &'a ReferenceString {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Comma-separated, the same format [`parse_reference_string`] accepts.
impl fmt::Display for ReferenceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(pages: &[u64]) -> ReferenceString {
        ReferenceString::new(pages.iter().copied().map(PageId::new).collect()).unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        assert!(ReferenceString::new(vec![]).is_none());
    }

    #[test]
    fn test_distinct_pages_first_appearance() {
        let r = refs(&[3, 1, 3, 2, 1]);
        assert_eq!(
            r.distinct_pages(),
            vec![PageId::new(3), PageId::new(1), PageId::new(2)]
        );
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        let r = refs(&[1, 2, 3, 4]);
        assert_eq!(r.to_string(), "1, 2, 3, 4");
        assert_eq!(parse_reference_string(&r.to_string()).unwrap(), r);
    }
}
