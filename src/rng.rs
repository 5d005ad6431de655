//! Xorshift32 PRNG.
//!
//! The decision engine has exactly one point of randomness (the mid-range
//! dodge tie-break), and it must be reproducible under test. The generator
//! is therefore seeded explicitly and passed into the evaluator rather than
//! pulled from a global source.

#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Seed must be non-zero; xorshift32 is stuck at zero forever.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 0xDEADBEEF } else { seed };
        Self { state }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Generate the next random u32.
    pub fn next(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        self.state
    }
}
