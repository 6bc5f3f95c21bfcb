//! Page identifier type.

use std::fmt;

/// Identifies a page in a reference string.
///
/// Pages are opaque positive integers; equality and hashing are by value.
/// The validator rejects zero and negative values before a `PageId` is ever
/// built from user input.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PageId {
    fn from(id: u64) -> Self {
        PageId(id)
    }
}
