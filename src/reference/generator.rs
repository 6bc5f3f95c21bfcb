//! Random reference-string generation.

use rand::Rng;

use crate::common::config::{RANDOM_LENGTH_MAX, RANDOM_LENGTH_MIN, RANDOM_PAGE_MAX};
use crate::common::{Error, PageId, Result};

use super::ReferenceString;

/// Bounds for [`generate`].
///
/// Length is drawn uniformly from `min_len..=max_len`, each page uniformly
/// from `1..=max_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    min_len: usize,
    max_len: usize,
    max_page: u64,
}

impl GeneratorConfig {
    /// Create a config, rejecting empty or non-positive bounds.
    pub fn new(min_len: usize, max_len: usize, max_page: u64) -> Result<Self> {
        if min_len == 0 || min_len > max_len || max_page == 0 {
            return Err(Error::InvalidGenerator {
                min_len,
                max_len,
                max_page,
            });
        }
        Ok(Self {
            min_len,
            max_len,
            max_page,
        })
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn max_page(&self) -> u64 {
        self.max_page
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_len: RANDOM_LENGTH_MIN,
            max_len: RANDOM_LENGTH_MAX,
            max_page: RANDOM_PAGE_MAX,
        }
    }
}

/// Generate a random reference string.
///
/// Deterministic for a seeded RNG.
///
/// # Example
/// ```
/// use pagesim::reference::{generate, GeneratorConfig};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let refs = generate(&mut rng, &GeneratorConfig::default());
/// assert!(refs.len() >= 10 && refs.len() <= 20);
/// ```
pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> ReferenceString {
    let len = rng.gen_range(config.min_len..=config.max_len);
    let pages = (0..len)
        .map(|_| PageId::new(rng.gen_range(1..=config.max_page)))
        .collect();
    ReferenceString { pages }
}
