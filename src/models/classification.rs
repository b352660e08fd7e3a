//! Tier and classification models
//!
//! Tiers are closed tagged-variant types with an explicit unknown fallback,
//! never free strings, so a typo in an upstream label cannot silently flow
//! through scoring. The snake_case serde labels are the wire contract:
//! downstream consumers reference them by name.

use serde::{Deserialize, Serialize};

use crate::models::dimension::EntityKey;

/// 9-tier ordinal anomaly label for a z-score, plus a `no_score` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyTier {
    /// z <= -3.0
    ExtremelyLow,
    /// -3.0 < z <= -2.0
    VeryLow,
    /// -2.0 < z <= -1.0
    ModeratelyLow,
    /// -1.0 < z <= -0.5
    SlightlyLow,
    /// -0.5 < z <= 0.5
    Normal,
    /// 0.5 < z <= 1.0
    SlightlyHigh,
    /// 1.0 < z <= 2.0
    ModeratelyHigh,
    /// 2.0 < z <= 3.0
    VeryHigh,
    /// z > 3.0
    ExtremelyHigh,
    /// Suppressed or missing z-score; never one of the ordinal labels
    NoScore,
}

impl AnomalyTier {
    /// Wire label for this tier
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExtremelyLow => "extremely_low",
            Self::VeryLow => "very_low",
            Self::ModeratelyLow => "moderately_low",
            Self::SlightlyLow => "slightly_low",
            Self::Normal => "normal",
            Self::SlightlyHigh => "slightly_high",
            Self::ModeratelyHigh => "moderately_high",
            Self::VeryHigh => "very_high",
            Self::ExtremelyHigh => "extremely_high",
            Self::NoScore => "no_score",
        }
    }
}

/// Magnitude tier derived from percentile rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeTier {
    /// Percentile rank >= 99
    Critical,
    /// [95, 99)
    Severe,
    /// [85, 95)
    Elevated,
    /// [75, 85)
    Marginal,
    /// [25, 75)
    Expected,
    /// [10, 25)
    Favorable,
    /// < 10
    Excellent,
    /// Unrecognized upstream label; scored with a conservative default
    Unknown,
}

/// Trajectory tier derived from slope percentile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrajectoryTier {
    /// Slope percentile >= 90
    RapidlyDeteriorating,
    /// [70, 90)
    Deteriorating,
    /// [30, 70)
    Stable,
    /// [10, 30)
    Improving,
    /// < 10
    RapidlyImproving,
    /// Unrecognized upstream label; scored with a conservative default
    Unknown,
}

/// Consistency tier derived from temporal z-score stability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyTier {
    /// Low temporal z-score spread across 6+ periods
    Persistent,
    /// Neither clearly persistent nor clearly transient
    Variable,
    /// Too few periods, or high temporal spread
    Transient,
    /// Unrecognized upstream label; scored with a conservative default
    Unknown,
}

/// Sub-classification taxonomy consumed for the priority-score adjustment.
///
/// Assignment of these labels happens upstream in taxonomy configuration;
/// this crate only consumes them for the adjustment lookup. Unrecognized
/// labels map to `Unclassified` (adjustment 0.0) rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubClassification {
    AcuteCrisis,
    EmergingThreat,
    SustainedFailure,
    RapidDecline,
    ChronicUnderperformance,
    VolatilePerformance,
    EarlyWarning,
    GradualErosion,
    PlateauAboveTarget,
    StablePerformer,
    NewEntity,
    InsufficientData,
    MixedSignals,
    TurnaroundInProgress,
    ImprovingTrend,
    RecoveryConfirmed,
    SustainedExcellence,
    BestInClass,
    /// Fallback for labels absent from the taxonomy
    Unclassified,
}

impl From<&str> for SubClassification {
    fn from(s: &str) -> Self {
        match s.trim() {
            "acute_crisis" => Self::AcuteCrisis,
            "emerging_threat" => Self::EmergingThreat,
            "sustained_failure" => Self::SustainedFailure,
            "rapid_decline" => Self::RapidDecline,
            "chronic_underperformance" => Self::ChronicUnderperformance,
            "volatile_performance" => Self::VolatilePerformance,
            "early_warning" => Self::EarlyWarning,
            "gradual_erosion" => Self::GradualErosion,
            "plateau_above_target" => Self::PlateauAboveTarget,
            "stable_performer" => Self::StablePerformer,
            "new_entity" => Self::NewEntity,
            "insufficient_data" => Self::InsufficientData,
            "mixed_signals" => Self::MixedSignals,
            "turnaround_in_progress" => Self::TurnaroundInProgress,
            "improving_trend" => Self::ImprovingTrend,
            "recovery_confirmed" => Self::RecoveryConfirmed,
            "sustained_excellence" => Self::SustainedExcellence,
            "best_in_class" => Self::BestInClass,
            _ => Self::Unclassified,
        }
    }
}

/// Named factor emitted with a classification so consumers can recover
/// inputs by name rather than position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributingFactor {
    /// Factor name, e.g. `"percentile_rank"`
    pub factor: String,
    /// Factor value
    pub value: f64,
}

/// Data-quality flags carried alongside a classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataQuality {
    /// Number of temporal periods behind the consistency inputs
    pub temporal_periods: usize,
    /// Whether the underlying peer statistics were suppressed
    pub suppressed: bool,
}

/// Per-term decomposition of a priority score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityScoreBreakdown {
    /// 30-point magnitude term
    pub magnitude: f64,
    /// 25-point trajectory term
    pub trajectory: f64,
    /// 15-point consistency term
    pub consistency: f64,
    /// 15-point log-volume term
    pub volume: f64,
    /// 10-point actionability term
    pub actionability: f64,
    /// Signed sub-classification adjustment
    pub adjustment: f64,
}

/// Final classification output for one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Node the entity belongs to
    pub node_id: String,
    /// Identity of the entity
    pub entity_key: EntityKey,
    /// Metric the classification applies to
    pub metric_id: String,
    /// Magnitude tier
    pub magnitude_tier: MagnitudeTier,
    /// Trajectory tier
    pub trajectory_tier: TrajectoryTier,
    /// Consistency tier
    pub consistency_tier: ConsistencyTier,
    /// Upstream-assigned sub-classification
    pub sub_classification: SubClassification,
    /// Composite priority score, always in [1, 100]
    pub priority_score: i32,
    /// Per-term breakdown of the priority score
    pub score_breakdown: PriorityScoreBreakdown,
    /// Named input factors; always includes `percentile_rank` and
    /// `slope_percentile`
    pub contributing_factors: Vec<ContributingFactor>,
    /// Data-quality flags
    pub data_quality: DataQuality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_classification_from_label() {
        assert_eq!(
            SubClassification::from("gradual_erosion"),
            SubClassification::GradualErosion
        );
        assert_eq!(
            SubClassification::from("not_a_real_label"),
            SubClassification::Unclassified
        );
    }

    #[test]
    fn test_tier_wire_labels() {
        assert_eq!(
            serde_json::to_string(&MagnitudeTier::Marginal).unwrap(),
            "\"marginal\""
        );
        assert_eq!(
            serde_json::to_string(&TrajectoryTier::RapidlyDeteriorating).unwrap(),
            "\"rapidly_deteriorating\""
        );
        assert_eq!(AnomalyTier::NoScore.as_str(), "no_score");
    }
}
