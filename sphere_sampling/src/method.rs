use crate::{PcgRng, SamplePairs, SamplingError, UniformSource, halton_sequence};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SamplingMethod {
    /// Hash based pseudo-random numbers, see [`PcgRng`].
    Pcg,

    /// `rand`'s standard generator.
    Random,

    /// Halton sequence with base 2 for height and base 3 for angle.
    Halton,
}

impl SamplingMethod {
    /// All methods, in the order they're laid out as view columns.
    pub const ALL: [SamplingMethod; 3] = [
        SamplingMethod::Pcg,
        SamplingMethod::Random,
        SamplingMethod::Halton,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SamplingMethod::Pcg => "pcg",
            SamplingMethod::Random => "random",
            SamplingMethod::Halton => "halton",
        }
    }

    /// Name of the point set this method produces for a given sample count.
    pub fn label(self, num_samples: usize) -> String {
        format!("{}_{num_samples}", self.name())
    }
}

impl std::fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

const HALTON_HEIGHT_BASE: u32 = 2;
const HALTON_ANGLE_BASE: u32 = 3;

/// Owns the state of all stateful sampling methods.
///
/// Generator state carries over between calls, so asking twice for the same method yields different samples
/// (except for Halton which is stateless).
pub struct Samplers {
    pcg: PcgRng,
    uniform: UniformSource,
}

impl Samplers {
    pub fn new(pcg_seed: u32, uniform_seed: Option<u64>) -> Self {
        Self {
            pcg: PcgRng::new(pcg_seed),
            uniform: UniformSource::new(uniform_seed),
        }
    }

    pub fn sample_pairs(
        &mut self,
        method: SamplingMethod,
        num_samples: usize,
    ) -> Result<SamplePairs, SamplingError> {
        match method {
            SamplingMethod::Pcg => {
                let mut u = Vec::with_capacity(num_samples);
                let mut v = Vec::with_capacity(num_samples);
                for _ in 0..num_samples {
                    u.push(self.pcg.next_f64());
                    v.push(self.pcg.next_f64());
                }
                SamplePairs::from_unit_samples(&u, &v)
            }

            SamplingMethod::Random => {
                let heights = self.uniform.uniform_range(num_samples, -1.0, 1.0)?;
                let angles = self
                    .uniform
                    .uniform_range(num_samples, 0.0, std::f64::consts::TAU)?;
                SamplePairs::new(heights, angles)
            }

            SamplingMethod::Halton => SamplePairs::from_unit_samples(
                &halton_sequence(num_samples, HALTON_HEIGHT_BASE)?,
                &halton_sequence(num_samples, HALTON_ANGLE_BASE)?,
            ),
        }
    }
}
