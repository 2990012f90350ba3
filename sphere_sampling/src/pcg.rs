/// Seed the sketch starts the hash chain with.
pub const DEFAULT_SEED: u32 = 123;

/// PCG-style integer hash.
///
/// See <https://www.reedbeta.com/blog/hash-functions-for-gpu-rendering/>
pub fn pcg_hash(input: u32) -> u32 {
    let state = input
        .wrapping_mul(747796405)
        .wrapping_add(2891336453);
    let word = ((state >> ((state >> 28) + 4)) ^ state).wrapping_mul(277803737);
    (word >> 22) ^ word
}

/// Pseudo-random generator that feeds [`pcg_hash`] its own output.
///
/// The entire state is a single `u32`, making it trivial to reproduce a sequence on the GPU.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u32,
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl PcgRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = pcg_hash(self.state);
        self.state
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        // Divide by 2^32 rather than u32::MAX, otherwise a state of u32::MAX would map to exactly 1.0.
        self.next_u32() as f64 / 4294967296.0
    }
}
