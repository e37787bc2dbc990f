//! RNG module - injectable uniform random source
//!
//! Piece kinds, colors, and spawn pre-rotation counts are all uniform draws,
//! so the engine only needs one operation: a pick below a bound. The source
//! is a trait so tests can replay fixed sequences ([`ScriptedSource`]) while
//! gameplay runs on a small deterministic LCG ([`LcgRng`]).

/// A source of uniform random picks
pub trait UniformSource {
    /// Next value in `[0, bound)`; `bound` is at most 7 in practice
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct LcgRng {
    state: u32,
}

impl LcgRng {
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
}

impl UniformSource for LcgRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        self.next_u32() % bound
    }
}

/// Replays a fixed list of draws, cycling when exhausted
///
/// Values are reduced modulo the requested bound, so a script of raw picks
/// like `[0, 3, 2]` reads naturally: kind index, color index, pre-rotations.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }
}

impl UniformSource for ScriptedSource {
    fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % bound
    }
}
