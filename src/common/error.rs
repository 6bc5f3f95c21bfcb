//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every variant is a validation failure detected before any simulation
/// runs. The policy engine itself is total over validated input and has no
/// error path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A token could not be parsed as an integer.
    ///
    /// `position` is the zero-based token index within the reference
    /// string, or `None` when the frame count itself is malformed.
    #[error("not an integer: {token:?}{}", fmt_position(.position))]
    Parse {
        token: String,
        position: Option<usize>,
    },

    /// Frame count was zero or negative.
    #[error("number of frames must be positive, got {0}")]
    InvalidCapacity(i64),

    /// A page number was zero or negative.
    #[error("page numbers must be positive integers, got {value} at position {position}")]
    InvalidPage { value: i64, position: usize },

    /// Policy name did not match any known replacement policy.
    #[error("unknown replacement policy: {0:?}")]
    UnknownPolicy(String),

    /// Random generator bounds were empty or non-positive.
    #[error("invalid generator bounds: length {min_len}..={max_len}, pages 1..={max_page}")]
    InvalidGenerator {
        min_len: usize,
        max_len: usize,
        max_page: u64,
    },
}

fn fmt_position(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(" at position {}", p),
        None => String::from(" (frame count)"),
    }
}
