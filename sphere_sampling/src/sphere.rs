use glam::DVec3;

use crate::SamplingError;

/// Height & angle coordinates of a batch of samples, stored as two parallel arrays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SamplePairs {
    /// Height in `[-1, 1]`.
    heights: Vec<f64>,

    /// Azimuth in radians, `[0, 2π)`.
    angles: Vec<f64>,
}

impl SamplePairs {
    pub fn new(heights: Vec<f64>, angles: Vec<f64>) -> Result<Self, SamplingError> {
        if heights.len() != angles.len() {
            return Err(SamplingError::LengthMismatch {
                heights: heights.len(),
                angles: angles.len(),
            });
        }
        Ok(Self { heights, angles })
    }

    /// Maps unit interval samples `u`, `v` to `z = 2u - 1` and `t = 2πv`.
    pub fn from_unit_samples(u: &[f64], v: &[f64]) -> Result<Self, SamplingError> {
        Self::new(
            u.iter().map(|u| 2.0 * u - 1.0).collect(),
            v.iter().map(|v| std::f64::consts::TAU * v).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.heights.iter().copied().zip(self.angles.iter().copied())
    }
}

/// Point on the unit sphere for height `z` and azimuth `t`.
pub fn sphere_point(z: f64, t: f64) -> Result<DVec3, SamplingError> {
    project(0, z, t)
}

pub fn project_to_sphere(samples: &SamplePairs) -> Result<Vec<DVec3>, SamplingError> {
    samples
        .iter()
        .enumerate()
        .map(|(index, (z, t))| project(index, z, t))
        .collect()
}

fn project(index: usize, z: f64, t: f64) -> Result<DVec3, SamplingError> {
    // Comparison is false for NaN, so this rejects it as well.
    if !(z.abs() <= 1.0) || !t.is_finite() {
        return Err(SamplingError::HeightOutOfRange { index, z });
    }
    let r = (1.0 - z * z).sqrt();
    let (sin_t, cos_t) = t.sin_cos();
    Ok(DVec3::new(r * cos_t, r * sin_t, z))
}
