// src/crypto.rs
use std::sync::Mutex;

use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RandomnessError {
    #[error("Entropy source error: {0}")]
    EntropyError(#[from] rand_core::Error),

    #[error("Cannot draw a random number from an empty range")]
    EmptyRange,

    #[error("Random source is unusable: {0}")]
    SourceUnavailable(String),
}

pub type Result<T> = std::result::Result<T, RandomnessError>;

/// A source of uniformly distributed integers.
///
/// Implementations must be cryptographically strong outside of tests and
/// must never fall back to a weaker source when the underlying one fails.
pub trait RandomSource: Send + Sync {
    /// Returns a uniform integer in `[0, n)`.
    fn below(&self, n: usize) -> Result<usize>;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn below(&self, n: usize) -> Result<usize> {
        (**self).below(n)
    }
}

/// Draws a uniform integer in `[0, n)` from `rng` without modulo bias.
///
/// 64-bit words at or above the largest multiple of `n` are rejected and
/// redrawn, so every residue has the same number of accepted preimages.
pub fn uniform_below<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> Result<usize> {
    if n == 0 {
        return Err(RandomnessError::EmptyRange);
    }

    let bound = n as u64;
    let zone = u64::MAX - (u64::MAX % bound);

    loop {
        let mut word = [0u8; 8];
        rng.try_fill_bytes(&mut word)?;

        let value = u64::from_le_bytes(word);
        if value < zone {
            // value % bound < n, so it always fits back into usize
            return Ok((value % bound) as usize);
        }
    }
}

/// The operating system CSPRNG. Default source of every generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSource;

impl RandomSource for OsSource {
    fn below(&self, n: usize) -> Result<usize> {
        uniform_below(&mut OsRng, n)
    }
}

/// Replayable ChaCha20 stream. Two sources built from the same seed yield
/// the same sequence of draws.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<ChaCha20Rng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::from_seed(seed)),
        }
    }
}

impl RandomSource for SeededSource {
    fn below(&self, n: usize) -> Result<usize> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| RandomnessError::SourceUnavailable(e.to_string()))?;
        uniform_below(&mut *rng, n)
    }
}
