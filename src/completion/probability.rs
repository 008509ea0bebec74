//! Distance-penalized normalization of suggestion counts.

use crate::error::{Result, StubError};

/// Default geometric penalty applied per unit of distance.
pub const DEFAULT_PENALTY: f64 = 0.8;

/// Check that a penalty lies in `(0, 1]`.
pub fn validate_penalty(penalty: f64) -> Result<()> {
    if penalty > 0.0 && penalty <= 1.0 {
        Ok(())
    } else {
        Err(StubError::invalid_argument(format!(
            "penalty must be in (0, 1], got {penalty}"
        )))
    }
}

/// Convert counts into probabilities, discounting each by
/// `penalty ^ distance`.
///
/// `counts` and `distances` must have the same length. A zero total weight
/// (including empty input) is reported as
/// [`StubError::DegenerateDistribution`] rather than producing NaNs.
pub fn normalized_probabilities(
    counts: &[u64],
    distances: &[usize],
    penalty: f64,
) -> Result<Vec<f64>> {
    if counts.len() != distances.len() {
        return Err(StubError::invalid_argument(format!(
            "counts and distances differ in length ({} vs {})",
            counts.len(),
            distances.len()
        )));
    }
    validate_penalty(penalty)?;

    let weights: Vec<f64> = counts
        .iter()
        .zip(distances)
        .map(|(&count, &distance)| count as f64 * penalty.powi(distance as i32))
        .collect();

    normalize(weights)
}

/// Scale `weights` so they sum to 1.
pub(crate) fn normalize(mut weights: Vec<f64>) -> Result<Vec<f64>> {
    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return Err(StubError::degenerate(format!(
            "cannot normalize {} weight(s) with total {total}",
            weights.len()
        )));
    }

    for weight in &mut weights {
        *weight /= total;
    }
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{a} != {e}");
        }
    }

    #[test]
    fn test_penalty_discounts_distance() {
        let probs = normalized_probabilities(&[10, 5], &[0, 1], DEFAULT_PENALTY).unwrap();
        assert_close(&probs, &[10.0 / 14.0, 4.0 / 14.0]);
    }

    #[test]
    fn test_penalty_of_one_is_plain_frequency() {
        let probs = normalized_probabilities(&[3, 1], &[0, 4], 1.0).unwrap();
        assert_close(&probs, &[0.75, 0.25]);
    }

    #[test]
    fn test_sums_to_one() {
        let probs = normalized_probabilities(&[7, 3, 9, 1], &[0, 1, 2, 3], 0.5).unwrap();
        let total: f64 = probs.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_length_mismatch() {
        let result = normalized_probabilities(&[1, 2], &[0], DEFAULT_PENALTY);
        assert!(matches!(result, Err(StubError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_total_is_degenerate() {
        let result = normalized_probabilities(&[0, 0], &[0, 1], DEFAULT_PENALTY);
        assert!(matches!(result, Err(StubError::DegenerateDistribution(_))));

        let result = normalized_probabilities(&[], &[], DEFAULT_PENALTY);
        assert!(matches!(result, Err(StubError::DegenerateDistribution(_))));
    }

    #[test]
    fn test_invalid_penalty() {
        assert!(validate_penalty(0.0).is_err());
        assert!(validate_penalty(1.5).is_err());
        assert!(validate_penalty(f64::NAN).is_err());
        assert!(validate_penalty(1.0).is_ok());
    }
}
