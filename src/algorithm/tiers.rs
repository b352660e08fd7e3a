//! Anomaly tier classification
//!
//! Maps a z-score to one of 9 ordinal tiers via a fixed boundary table.
//! Boundaries are inclusive on the upper bound; a missing or suppressed
//! score maps to the distinct `no_score` sentinel.

use crate::models::classification::AnomalyTier;

/// Ascending boundary table. A z-score belongs to the first tier whose
/// boundary is >= the score; anything beyond the last boundary is
/// `extremely_high`.
const BOUNDARIES: [(f64, AnomalyTier); 8] = [
    (-3.0, AnomalyTier::ExtremelyLow),
    (-2.0, AnomalyTier::VeryLow),
    (-1.0, AnomalyTier::ModeratelyLow),
    (-0.5, AnomalyTier::SlightlyLow),
    (0.5, AnomalyTier::Normal),
    (1.0, AnomalyTier::SlightlyHigh),
    (2.0, AnomalyTier::ModeratelyHigh),
    (3.0, AnomalyTier::VeryHigh),
];

/// Classify a possibly-absent z-score
#[must_use]
pub fn classify(zscore: Option<f64>) -> AnomalyTier {
    let Some(z) = zscore else {
        return AnomalyTier::NoScore;
    };
    for (boundary, tier) in BOUNDARIES {
        if z <= boundary {
            return tier;
        }
    }
    AnomalyTier::ExtremelyHigh
}
