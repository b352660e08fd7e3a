//! Multi-dimensional tier classification and priority scoring
//!
//! A state-free engine composing fixed threshold tables into magnitude,
//! trajectory, and consistency tiers, then a composite priority score in
//! [1, 100]. All tables arrive via an injected `ScoringConfig`; nothing here
//! holds state between calls.

use log::debug;

use crate::config::ScoringConfig;
use crate::error::{Result, SignalError};
use crate::models::classification::{
    ClassificationRecord, ConsistencyTier, ContributingFactor, DataQuality, MagnitudeTier,
    PriorityScoreBreakdown, SubClassification, TrajectoryTier,
};
use crate::models::dimension::EntityKey;

/// Inputs for classifying one entity
#[derive(Debug, Clone)]
pub struct ClassificationInput {
    /// Node the entity belongs to
    pub node_id: String,
    /// Identity of the entity
    pub entity_key: EntityKey,
    /// Metric being classified
    pub metric_id: String,
    /// Peer percentile rank of the entity's aggregate value, in [0, 100]
    pub percentile_rank: f64,
    /// Peer percentile rank of the entity's trend slope, in [0, 100]
    pub slope_percentile: f64,
    /// Standard deviation of the entity's z-score across time periods
    pub zscore_std_dev: f64,
    /// Number of temporal periods behind `zscore_std_dev`
    pub temporal_periods: usize,
    /// Encounter volume backing the metric
    pub encounters: u64,
    /// Upstream-assigned sub-classification label
    pub sub_classification: SubClassification,
    /// Whether an action path exists for this metric, in [0, 1];
    /// `None` uses the configured default
    pub actionability_weight: Option<f64>,
    /// Whether the upstream peer statistics were suppressed
    pub suppressed: bool,
}

/// Magnitude tier from percentile rank
#[must_use]
pub fn magnitude_tier(percentile_rank: f64) -> MagnitudeTier {
    if percentile_rank >= 99.0 {
        MagnitudeTier::Critical
    } else if percentile_rank >= 95.0 {
        MagnitudeTier::Severe
    } else if percentile_rank >= 85.0 {
        MagnitudeTier::Elevated
    } else if percentile_rank >= 75.0 {
        MagnitudeTier::Marginal
    } else if percentile_rank >= 25.0 {
        MagnitudeTier::Expected
    } else if percentile_rank >= 10.0 {
        MagnitudeTier::Favorable
    } else {
        MagnitudeTier::Excellent
    }
}

/// Trajectory tier from slope percentile
#[must_use]
pub fn trajectory_tier(slope_percentile: f64) -> TrajectoryTier {
    if slope_percentile >= 90.0 {
        TrajectoryTier::RapidlyDeteriorating
    } else if slope_percentile >= 70.0 {
        TrajectoryTier::Deteriorating
    } else if slope_percentile >= 30.0 {
        TrajectoryTier::Stable
    } else if slope_percentile >= 10.0 {
        TrajectoryTier::Improving
    } else {
        TrajectoryTier::RapidlyImproving
    }
}

/// Consistency tier from temporal z-score stability.
///
/// Ordered checks: the edge window (std in [0.90, 1.10], or 3-5 periods with
/// low std) falls through to `variable` by design.
#[must_use]
pub fn consistency_tier(zscore_std_dev: f64, temporal_periods: usize) -> ConsistencyTier {
    if temporal_periods < 3 {
        ConsistencyTier::Transient
    } else if zscore_std_dev > 1.10 {
        ConsistencyTier::Transient
    } else if zscore_std_dev < 0.90 && temporal_periods >= 6 {
        ConsistencyTier::Persistent
    } else {
        ConsistencyTier::Variable
    }
}

/// State-free classification engine
#[derive(Debug, Clone, Default)]
pub struct ClassificationEngine {
    config: ScoringConfig,
}

impl ClassificationEngine {
    /// Create an engine with the given scoring configuration
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Classify one entity and compute its priority score.
    ///
    /// An out-of-range actionability weight is a caller contract violation;
    /// every other unexpected input degrades gracefully via the configured
    /// defaults.
    pub fn classify(&self, input: &ClassificationInput) -> Result<ClassificationRecord> {
        let actionability = input
            .actionability_weight
            .unwrap_or(self.config.default_actionability);
        if !(0.0..=1.0).contains(&actionability) {
            return Err(SignalError::InvalidActionability {
                value: actionability,
            });
        }

        let mag = magnitude_tier(input.percentile_rank);
        let traj = trajectory_tier(input.slope_percentile);
        let cons = consistency_tier(input.zscore_std_dev, input.temporal_periods);

        if !self.config.subclass_adjustments.contains_key(&input.sub_classification) {
            debug!(
                "node '{}': sub-classification {:?} not in adjustment table, using default",
                input.node_id, input.sub_classification
            );
        }

        let breakdown = PriorityScoreBreakdown {
            magnitude: 30.0 * self.config.magnitude_weight(mag),
            trajectory: 25.0 * self.config.trajectory_weight(traj),
            consistency: 15.0 * self.config.consistency_weight(cons),
            volume: 15.0 * volume_factor(input.encounters),
            actionability: 10.0 * actionability,
            adjustment: self.config.adjustment(input.sub_classification),
        };
        let raw = breakdown.magnitude
            + breakdown.trajectory
            + breakdown.consistency
            + breakdown.volume
            + breakdown.actionability
            + breakdown.adjustment;
        let priority_score = (raw.round() as i32).clamp(1, 100);

        Ok(ClassificationRecord {
            node_id: input.node_id.clone(),
            entity_key: input.entity_key.clone(),
            metric_id: input.metric_id.clone(),
            magnitude_tier: mag,
            trajectory_tier: traj,
            consistency_tier: cons,
            sub_classification: input.sub_classification,
            priority_score,
            score_breakdown: breakdown,
            contributing_factors: vec![
                ContributingFactor {
                    factor: "percentile_rank".to_string(),
                    value: input.percentile_rank,
                },
                ContributingFactor {
                    factor: "slope_percentile".to_string(),
                    value: input.slope_percentile,
                },
                ContributingFactor {
                    factor: "zscore_std_dev".to_string(),
                    value: input.zscore_std_dev,
                },
                ContributingFactor {
                    factor: "encounters".to_string(),
                    value: input.encounters as f64,
                },
            ],
            data_quality: DataQuality {
                temporal_periods: input.temporal_periods,
                suppressed: input.suppressed,
            },
        })
    }
}

/// Log-scaled encounter volume factor in [0, 1]: saturates at 10,000
/// encounters
#[must_use]
fn volume_factor(encounters: u64) -> f64 {
    ((encounters.max(1) as f64).log10() / 4.0).min(1.0)
}
