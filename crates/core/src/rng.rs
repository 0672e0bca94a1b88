//! RNG module - injectable randomness for tile spawning
//!
//! Spawning is the only non-deterministic step in the engine. The board draws
//! from a [`TileRng`] handed to it at construction, so tests and replays can
//! supply a fixed seed ([`SimpleRng`]) or an exact script ([`ScriptedRng`]).

use std::fmt::Debug;

/// Source of randomness for spawn decisions
pub trait TileRng: Debug {
    /// Uniform value in `[0, bound)`. `bound` is always at least 1.
    fn next_below(&mut self, bound: usize) -> usize;

    /// True with probability `percent`/100
    fn chance(&mut self, percent: u32) -> bool {
        (self.next_below(100) as u32) < percent
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileRng for SimpleRng {
    fn next_below(&mut self, bound: usize) -> usize {
        let bound = u32::try_from(bound).unwrap_or(u32::MAX);
        self.next_range(bound) as usize
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested bound, so a script of
/// `[0]` always picks the first empty cell. A draw is a bonus roll when it is
/// below the bonus percent: under a weighted spawn value `[0]` always rolls
/// the bonus tile, while a draw of 99 never does.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        let mut script = script.into();
        if script.is_empty() {
            script.push(0);
        }
        Self { script, cursor: 0 }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl TileRng for ScriptedRng {
    fn next_below(&mut self, bound: usize) -> usize {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % bound.max(1)
    }
}
