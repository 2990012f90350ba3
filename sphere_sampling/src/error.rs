#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    #[error("Halton base must be at least 2, got {base}")]
    InvalidHaltonBase { base: u32 },

    #[error("Invalid uniform range [{lo}, {hi})")]
    InvalidRange { lo: f64, hi: f64 },

    #[error("Height {z} at sample {index} is outside of [-1, 1]")]
    HeightOutOfRange { index: usize, z: f64 },

    #[error("Got {heights} heights but {angles} angles")]
    LengthMismatch { heights: usize, angles: usize },
}
