//! Configuration constants for pagesim.
//!
//! These mirror the defaults of the interactive front end. The core accepts
//! any positive frame count; [`MAX_SUGGESTED_FRAMES`] only bounds what a
//! front end offers by default.

/// Reference string pre-filled in front ends (Belady's classic example).
pub const DEFAULT_REFERENCE_STRING: &str = "1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5";

/// Default number of frames.
pub const DEFAULT_FRAMES: usize = 3;

/// Upper end of the frame range suggested to users.
pub const MAX_SUGGESTED_FRAMES: usize = 10;

/// Shortest randomly generated reference string.
pub const RANDOM_LENGTH_MIN: usize = 10;

/// Longest randomly generated reference string.
pub const RANDOM_LENGTH_MAX: usize = 20;

/// Largest page number produced by the random generator (pages start at 1).
pub const RANDOM_PAGE_MAX: u64 = 9;
