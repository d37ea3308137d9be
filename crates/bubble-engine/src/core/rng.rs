//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, so simulation tests can replay exact drift.

use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform in [lo, lo + width).
    pub fn range(&mut self, lo: f32, width: f32) -> f32 {
        lo + self.next_f32() * width
    }

    /// Uniform in [-width/2, width/2).
    pub fn centered(&mut self, width: f32) -> f32 {
        (self.next_f32() - 0.5) * width
    }

    /// Uniform angle in [0, 2π).
    pub fn angle(&mut self) -> f32 {
        self.next_f32() * TAU
    }

    /// Vector of length `len` in a uniformly random direction.
    pub fn direction(&mut self, len: f32) -> Vec2 {
        Vec2::from_angle(self.angle()) * len
    }
}
