//! Random index sources.
//!
//! Generation only ever asks for "an index below `bound`", so that is the
//! whole seam. Production uses the operating system CSPRNG; tests plug in a
//! seeded ChaCha20 or a scripted sequence.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

pub trait IndexSource {
    /// Uniform index in `[0, bound)`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<T: IndexSource + ?Sized> IndexSource for &mut T {
    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Index source backed by a cryptographically secure generator.
///
/// The `CryptoRng` bound keeps statistical PRNGs out.
pub struct SecureIndex<R> {
    rng: R,
}

impl SecureIndex<OsRng> {
    pub fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> SecureIndex<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> IndexSource for SecureIndex<R> {
    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        // gen_range rejects out-of-zone samples, so no modulo bias
        self.rng.gen_range(0..bound)
    }
}

/// Name of the production entropy source, for display.
pub fn source_name() -> &'static str {
    "OS CSPRNG"
}

/// Replays a fixed list of indices, cycling when exhausted.
#[cfg(test)]
pub struct Scripted {
    indices: Vec<usize>,
    pos: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(indices: &[usize]) -> Self {
        Self {
            indices: indices.to_vec(),
            pos: 0,
        }
    }
}

#[cfg(test)]
impl IndexSource for Scripted {
    fn next_index(&mut self, bound: usize) -> usize {
        let idx = self.indices[self.pos % self.indices.len()];
        self.pos += 1;
        assert!(idx < bound, "scripted index {idx} out of bound {bound}");
        idx
    }
}
