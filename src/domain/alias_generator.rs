//! Random alias candidate generation.
//!
//! Generators only produce candidates; uniqueness is established by
//! [`crate::application::services::AliasAllocator`] and, ultimately, by the
//! store's unique constraint.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Symbols an alias is drawn from: 26 lowercase, 26 uppercase, 10 digits.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of alias candidates.
///
/// Injected into the allocator so tests can substitute deterministic or
/// colliding sequences.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns exactly `length` characters from [`ALPHABET`].
    fn generate(&self, length: usize) -> String;
}

/// Uniform random generator over [`ALPHABET`].
#[derive(Debug, Default)]
pub struct RandomAliasGenerator {
    seeded: Option<Mutex<StdRng>>,
}

impl RandomAliasGenerator {
    /// Creates a generator backed by the thread-local RNG.
    pub fn new() -> Self {
        Self { seeded: None }
    }

    /// Creates a generator with its own RNG seeded from `seed`.
    ///
    /// Two generators built from the same seed emit the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        match &self.seeded {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                draw(&mut *rng, length)
            }
            None => draw(&mut rand::rng(), length),
        }
    }
}
