use rand::{
    SeedableRng as _,
    distributions::{Distribution as _, Uniform},
    rngs::StdRng,
};

use crate::SamplingError;

/// Library provided uniform random numbers, the baseline the other methods are compared against.
pub struct UniformSource {
    rng: StdRng,
}

impl UniformSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Not reproducible across runs.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// `num_samples` independent values in `[lo, hi)`.
    pub fn uniform_range(
        &mut self,
        num_samples: usize,
        lo: f64,
        hi: f64,
    ) -> Result<Vec<f64>, SamplingError> {
        // `Uniform::new` panics if the width of the range overflows.
        if !lo.is_finite() || !hi.is_finite() || lo >= hi || !(hi - lo).is_finite() {
            return Err(SamplingError::InvalidRange { lo, hi });
        }
        let distribution = Uniform::new(lo, hi);
        Ok(distribution
            .sample_iter(&mut self.rng)
            .take(num_samples)
            .collect())
    }
}
