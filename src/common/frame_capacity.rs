//! Frame capacity type.

use std::fmt;
use std::num::NonZeroUsize;

use super::error::{Error, Result};

/// Number of frames available to a simulation.
///
/// Always at least one, so every policy has room to admit the page being
/// referenced.
///
/// # Example
/// ```
/// use pagesim::FrameCapacity;
///
/// let cap = FrameCapacity::new(3).unwrap();
/// assert_eq!(cap.get(), 3);
/// assert!(FrameCapacity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameCapacity(NonZeroUsize);

impl FrameCapacity {
    /// Create a capacity, rejecting zero.
    pub fn new(frames: usize) -> Result<Self> {
        NonZeroUsize::new(frames)
            .map(FrameCapacity)
            .ok_or(Error::InvalidCapacity(0))
    }

    /// Number of frames.
    #[inline]
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for FrameCapacity {
    fn from(frames: NonZeroUsize) -> Self {
        FrameCapacity(frames)
    }
}

impl fmt::Display for FrameCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
