//! Primitive peer statistics
//!
//! Plain functions over value slices. Accumulation follows the slice's input
//! order so repeated runs on the same input are bit-reproducible; medians
//! sort a scratch copy and never reorder the caller's data.

use itertools::Itertools;

/// Scale factor making the MAD asymptotically equal to the standard
/// deviation under normality: 1 / Φ⁻¹(0.75). Retained for non-normal data
/// as a robust spread estimate.
pub const MAD_SCALE: f64 = 1.4826;

/// Floor applied to spread estimates before dividing, so near-zero-variance
/// peer groups produce large-but-finite z-scores instead of infinities
pub const SPREAD_FLOOR: f64 = 0.01;

/// Arithmetic mean; `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (n divisor, not n-1): the peer group is the
/// entire comparison population, not a sample
#[must_use]
pub fn population_std(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Standard median; `None` for an empty slice
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sorted: Vec<f64> = values.iter().copied().sorted_by(f64::total_cmp).collect();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Unscaled median absolute deviation: `median(|v - median(values)|)`
#[must_use]
pub fn mad(values: &[f64]) -> Option<f64> {
    let med = median(values)?;
    let deviations: Vec<f64> = values.iter().map(|v| (v - med).abs()).collect();
    median(&deviations)
}

/// Mean/std z-score with a floored divisor
#[must_use]
pub fn simple_zscore(value: f64, peer_mean: f64, peer_std: f64) -> f64 {
    (value - peer_mean) / peer_std.max(SPREAD_FLOOR)
}

/// Median/scaled-MAD z-score with a floored divisor
#[must_use]
pub fn robust_zscore(value: f64, peer_median: f64, peer_mad: f64) -> f64 {
    (value - peer_median) / (peer_mad * MAD_SCALE).max(SPREAD_FLOOR)
}

/// Midpoint-method percentile rank: `100 * (below + 0.5 * equal) / n`, where
/// `equal` counts the value itself. Clamped to [0, 100]; an empty population
/// returns 50.0 by convention.
#[must_use]
pub fn percentile_rank(value: f64, values: &[f64]) -> f64 {
    if values.is_empty() {
        return 50.0;
    }
    let below = values.iter().filter(|&&v| v < value).count();
    let equal = values.iter().filter(|&&v| v == value).count();
    let rank = 100.0 * (below as f64 + 0.5 * equal as f64) / values.len() as f64;
    rank.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

    #[test]
    fn test_mean_and_population_std() {
        assert_eq!(mean(&VALUES), Some(3.0));
        let std = population_std(&VALUES).unwrap();
        assert!((std - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_median_even_and_odd() {
        assert_eq!(median(&VALUES), Some(3.0));
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_mad_unscaled() {
        // median = 3, |v - 3| = [2, 1, 0, 1, 2], median of that = 1
        assert_eq!(mad(&VALUES), Some(1.0));
    }

    #[test]
    fn test_robust_zscore_fixture() {
        let z = robust_zscore(5.0, 3.0, 1.0);
        assert!((z - 2.0 / MAD_SCALE).abs() < 1e-12);
        assert!((z - 1.349).abs() < 1e-3);
    }

    #[test]
    fn test_simple_zscore_floors_spread() {
        // Zero variance floors at 0.01 instead of dividing by zero.
        assert_eq!(simple_zscore(3.1, 3.0, 0.0), 0.1 / 0.01);
    }

    #[test]
    fn test_percentile_rank_midpoint() {
        assert_eq!(percentile_rank(3.0, &VALUES), 50.0);
        assert_eq!(percentile_rank(1.0, &VALUES), 10.0);
        assert_eq!(percentile_rank(5.0, &VALUES), 90.0);
    }

    #[test]
    fn test_percentile_rank_ties() {
        let tied = [1.0, 2.0, 2.0, 2.0, 5.0];
        assert_eq!(percentile_rank(2.0, &tied), 50.0);
    }

    #[test]
    fn test_percentile_rank_empty_population() {
        assert_eq!(percentile_rank(1.0, &[]), 50.0);
    }
}
