//! Configuration for the signal computation core
//!
//! Threshold and weight tables are plain immutable structs injected into the
//! pure computation functions, never module-level mutable state. Defaults
//! reproduce the production tables; tests may construct alternates.

use rustc_hash::FxHashMap;

use crate::models::classification::{
    ConsistencyTier, MagnitudeTier, SubClassification, TrajectoryTier,
};

/// Minimum peer-group sizes below which scores are suppressed
#[derive(Debug, Clone, Copy)]
pub struct SuppressionThresholds {
    /// Minimum peers for aggregate (point-in-time) comparisons
    pub aggregate_min_peers: usize,
    /// Minimum peers for trend/slope comparisons
    pub trend_min_peers: usize,
}

impl Default for SuppressionThresholds {
    fn default() -> Self {
        Self {
            aggregate_min_peers: 15, // Aggregate comparisons need a fuller peer panel
            trend_min_peers: 10,     // Slope comparisons tolerate smaller groups
        }
    }
}

/// Configuration for the peer statistics calculator
#[derive(Debug, Clone)]
pub struct StatisticsConfig {
    /// Suppression thresholds per statistical context
    pub suppression: SuppressionThresholds,
    /// Id of the facility dimension excluded from the correlation hash
    pub facility_dimension_id: String,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            suppression: SuppressionThresholds::default(),
            facility_dimension_id: crate::identity::DEFAULT_FACILITY_DIMENSION_ID.to_string(),
        }
    }
}

/// Weight tables and adjustments for the priority score.
///
/// Unmapped tiers fall back to conservative defaults rather than erroring,
/// so the engine degrades gracefully on unexpected labels.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Magnitude tier → [0, 1] weight
    pub magnitude_weights: FxHashMap<MagnitudeTier, f64>,
    /// Trajectory tier → [0, 1] weight
    pub trajectory_weights: FxHashMap<TrajectoryTier, f64>,
    /// Consistency tier → [0, 1] weight
    pub consistency_weights: FxHashMap<ConsistencyTier, f64>,
    /// Sub-classification → signed score adjustment, roughly −15..+15
    pub subclass_adjustments: FxHashMap<SubClassification, f64>,
    /// Weight for a magnitude tier absent from the table
    pub default_magnitude_weight: f64,
    /// Weight for a trajectory tier absent from the table
    pub default_trajectory_weight: f64,
    /// Weight for a consistency tier absent from the table
    pub default_consistency_weight: f64,
    /// Adjustment for a sub-classification absent from the table
    pub default_adjustment: f64,
    /// Actionability weight applied when the caller supplies none
    pub default_actionability: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let magnitude_weights = FxHashMap::from_iter([
            (MagnitudeTier::Critical, 1.0),
            (MagnitudeTier::Severe, 0.85),
            (MagnitudeTier::Elevated, 0.65),
            (MagnitudeTier::Marginal, 0.45),
            (MagnitudeTier::Expected, 0.25),
            (MagnitudeTier::Favorable, 0.10),
            (MagnitudeTier::Excellent, 0.0),
        ]);
        let trajectory_weights = FxHashMap::from_iter([
            (TrajectoryTier::RapidlyDeteriorating, 1.0),
            (TrajectoryTier::Deteriorating, 0.70),
            (TrajectoryTier::Stable, 0.40),
            (TrajectoryTier::Improving, 0.15),
            (TrajectoryTier::RapidlyImproving, 0.0),
        ]);
        let consistency_weights = FxHashMap::from_iter([
            (ConsistencyTier::Persistent, 1.0),
            (ConsistencyTier::Variable, 0.60),
            (ConsistencyTier::Transient, 0.25),
        ]);
        let subclass_adjustments = FxHashMap::from_iter([
            (SubClassification::AcuteCrisis, 15.0),
            (SubClassification::EmergingThreat, 12.0),
            (SubClassification::SustainedFailure, 10.0),
            (SubClassification::RapidDecline, 8.0),
            (SubClassification::ChronicUnderperformance, 6.0),
            (SubClassification::VolatilePerformance, 4.0),
            (SubClassification::EarlyWarning, 3.0),
            (SubClassification::GradualErosion, 2.0),
            (SubClassification::PlateauAboveTarget, 1.0),
            (SubClassification::StablePerformer, 0.0),
            (SubClassification::NewEntity, 0.0),
            (SubClassification::InsufficientData, 0.0),
            (SubClassification::MixedSignals, 0.0),
            (SubClassification::TurnaroundInProgress, -3.0),
            (SubClassification::ImprovingTrend, -4.0),
            (SubClassification::RecoveryConfirmed, -6.0),
            (SubClassification::SustainedExcellence, -10.0),
            (SubClassification::BestInClass, -15.0),
        ]);

        Self {
            magnitude_weights,
            trajectory_weights,
            consistency_weights,
            subclass_adjustments,
            default_magnitude_weight: 0.25,  // Mid-range: treat unknown as "expected"
            default_trajectory_weight: 0.5,  // Mid-range: neither improving nor worsening
            default_consistency_weight: 0.5, // Mid-range between variable and persistent
            default_adjustment: 0.0,
            default_actionability: 0.5,
        }
    }
}

impl ScoringConfig {
    /// Magnitude weight with fallback for unmapped tiers
    #[must_use]
    pub fn magnitude_weight(&self, tier: MagnitudeTier) -> f64 {
        self.magnitude_weights
            .get(&tier)
            .copied()
            .unwrap_or(self.default_magnitude_weight)
    }

    /// Trajectory weight with fallback for unmapped tiers
    #[must_use]
    pub fn trajectory_weight(&self, tier: TrajectoryTier) -> f64 {
        self.trajectory_weights
            .get(&tier)
            .copied()
            .unwrap_or(self.default_trajectory_weight)
    }

    /// Consistency weight with fallback for unmapped tiers
    #[must_use]
    pub fn consistency_weight(&self, tier: ConsistencyTier) -> f64 {
        self.consistency_weights
            .get(&tier)
            .copied()
            .unwrap_or(self.default_consistency_weight)
    }

    /// Sub-classification adjustment with fallback for unmapped labels
    #[must_use]
    pub fn adjustment(&self, sub: SubClassification) -> f64 {
        self.subclass_adjustments
            .get(&sub)
            .copied()
            .unwrap_or(self.default_adjustment)
    }
}
