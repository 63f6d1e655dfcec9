//! Random suffixes for demo and simulated upload ids.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of tokens produced by [`RandomTokenGenerator`].
pub const TOKEN_LEN: usize = 6;

/// Source of id suffixes. Injected so tests can make ids deterministic.
pub trait TokenGenerator: Send + Sync {
    fn token(&self) -> String;
}

/// Lowercase base-36 tokens from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn token(&self) -> String {
        let mut rng = rand::rng();
        (0..TOKEN_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
