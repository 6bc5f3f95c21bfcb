//! Validation of raw text input.
//!
//! Checks run in a fixed order: every reference token is parsed first, then
//! the frame count is parsed, then the capacity is range-checked, and page
//! values are range-checked last. So `"a, 2"` with frame count `"0"` is a
//! parse error, while `"1, -2"` with `"0"` is a capacity error.

use crate::common::{Error, FrameCapacity, PageId, Result};

use super::ReferenceString;

/// Validate a raw reference string and frame count together.
///
/// # Example
/// ```
/// use pagesim::reference::parse_input;
///
/// let (refs, frames) = parse_input("1, 2, 3", "3").unwrap();
/// assert_eq!(refs.len(), 3);
/// assert_eq!(frames.get(), 3);
/// ```
pub fn parse_input(raw_refs: &str, raw_frames: &str) -> Result<(ReferenceString, FrameCapacity)> {
    let values = parse_tokens(raw_refs)?;
    let frames = parse_integer(raw_frames, None)?;
    let capacity = check_capacity(frames)?;
    let refs = check_pages(values)?;
    Ok((refs, capacity))
}

/// Validate a raw comma-separated reference string on its own.
pub fn parse_reference_string(raw: &str) -> Result<ReferenceString> {
    check_pages(parse_tokens(raw)?)
}

/// Validate a raw frame count on its own.
pub fn parse_frame_count(raw: &str) -> Result<FrameCapacity> {
    check_capacity(parse_integer(raw, None)?)
}

fn parse_tokens(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .enumerate()
        .map(|(position, token)| parse_integer(token, Some(position)))
        .collect()
}

fn parse_integer(token: &str, position: Option<usize>) -> Result<i64> {
    let trimmed = token.trim();
    trimmed.parse::<i64>().map_err(|_| Error::Parse {
        token: trimmed.to_string(),
        position,
    })
}

fn check_capacity(frames: i64) -> Result<FrameCapacity> {
    if frames <= 0 {
        return Err(Error::InvalidCapacity(frames));
    }
    let frames = usize::try_from(frames).map_err(|_| Error::InvalidCapacity(frames))?;
    FrameCapacity::new(frames)
}

fn check_pages(values: Vec<i64>) -> Result<ReferenceString> {
    let pages = values
        .into_iter()
        .enumerate()
        .map(|(position, value)| {
            if value <= 0 {
                Err(Error::InvalidPage { value, position })
            } else {
                Ok(PageId::new(value as u64))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    // split(',') always yields at least one token, and an empty token fails
    // to parse, so a validated string is never empty.
    ReferenceString::new(pages).ok_or_else(|| Error::Parse {
        token: String::new(),
        position: Some(0),
    })
}
