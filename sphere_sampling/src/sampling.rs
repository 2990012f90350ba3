use crate::SamplingError;

/// Halton value for the given index, i.e. the radical inverse of `index + 1` in `base`.
///
/// Index 0 maps to the first non-zero element of the sequence.
pub fn halton(index: u64, base: u32) -> f64 {
    let base = u128::from(base);
    let mut result = 0.0;
    let mut f = 1.0;
    // Widened so that `u64::MAX + 1` still fits.
    let mut i = u128::from(index) + 1;
    while i > 0 {
        f /= base as f64;
        result += f * (i % base) as f64;
        i /= base;
    }
    result
}

/// First `num_samples` elements of the Halton sequence for `base`.
pub fn halton_sequence(num_samples: usize, base: u32) -> Result<Vec<f64>, SamplingError> {
    if base < 2 {
        return Err(SamplingError::InvalidHaltonBase { base });
    }
    Ok((0..num_samples as u64).map(|i| halton(i, base)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn base_two_matches_van_der_corput() {
        assert_eq!(
            halton_sequence(5, 2).unwrap(),
            vec![0.5, 0.25, 0.75, 0.125, 0.625]
        );
    }

    #[test]
    fn base_three_first_values() {
        let sequence = halton_sequence(4, 3).unwrap();
        approx::assert_relative_eq!(sequence[0], 1.0 / 3.0);
        approx::assert_relative_eq!(sequence[1], 2.0 / 3.0);
        approx::assert_relative_eq!(sequence[2], 1.0 / 9.0);
        approx::assert_relative_eq!(sequence[3], 4.0 / 9.0);
    }

    #[test]
    fn empty_sequence() {
        assert!(halton_sequence(0, 2).unwrap().is_empty());
    }

    #[test]
    fn rejects_degenerate_bases() {
        assert_eq!(
            halton_sequence(4, 1),
            Err(SamplingError::InvalidHaltonBase { base: 1 })
        );
        assert_eq!(
            halton_sequence(0, 0),
            Err(SamplingError::InvalidHaltonBase { base: 0 })
        );
    }

    #[test]
    fn indices_past_u32_range() {
        // 2^32 reversed in base 2 is 2^-33.
        assert_eq!(halton(u32::MAX as u64, 2), 2f64.powi(-33));
        assert_eq!(halton(u32::MAX as u64 + 1, 2), 0.5 + 2f64.powi(-33));

        let last = halton(u64::MAX, 2);
        assert!((0.0..1.0).contains(&last));
    }

    proptest! {
        #[test]
        fn values_in_unit_interval(num_samples in 1usize..2048, base in 2u32..17) {
            for value in halton_sequence(num_samples, base).unwrap() {
                prop_assert!((0.0..1.0).contains(&value));
            }
        }

        #[test]
        fn deterministic(num_samples in 0usize..512, base in 2u32..17) {
            let a = halton_sequence(num_samples, base).unwrap();
            let b = halton_sequence(num_samples, base).unwrap();
            prop_assert_eq!(
                a.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
                b.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
            );
        }
    }
}
