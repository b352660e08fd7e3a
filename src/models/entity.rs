//! Per-entity statistical output records
//!
//! One `EntityRecord` is produced per (node, entity) per computation run and
//! is immutable after creation. Suppression is modeled as an explicit
//! `Option<f64>` z-score paired with a flag, never a sentinel value.

use serde::{Deserialize, Serialize};

use crate::models::dimension::EntityKey;

/// Statistical method used to score an entity against its peers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticalMethod {
    /// Mean / population-standard-deviation z-score
    SimpleZscore,
    /// Median / scaled-MAD z-score, resistant to outliers
    RobustZscore,
}

impl StatisticalMethod {
    /// Wire label for this method
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SimpleZscore => "simple_zscore",
            Self::RobustZscore => "robust_zscore",
        }
    }
}

/// Result of scoring one entity with one statistical method.
///
/// `suppressed == true` implies `zscore == None`: an undersized peer group
/// yields no score. `percentile_rank` is still populated for suppressed
/// entities but must not be treated as meaningful downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticalMethodResult {
    /// Which method produced this result
    pub method: StatisticalMethod,
    /// Peer center: mean for the simple method, median for the robust one
    pub peer_center: f64,
    /// Peer spread: population std for simple, unscaled MAD for robust
    pub peer_spread: f64,
    /// Z-score, absent when the peer group was too small
    pub zscore: Option<f64>,
    /// Midpoint-method percentile rank within the peer group, in [0, 100]
    pub percentile_rank: f64,
    /// Whether the score was withheld due to an undersized peer group
    pub suppressed: bool,
}

/// Statistical output for one entity within one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Identity of the entity within the node
    pub entity_key: EntityKey,
    /// The entity's metric value, absent when the source had no value
    pub metric_value: Option<f64>,
    /// One result per statistical method applied to the node
    pub statistical_methods: Vec<StatisticalMethodResult>,
}

impl EntityRecord {
    /// Look up the result for a specific method
    #[must_use]
    pub fn method_result(&self, method: StatisticalMethod) -> Option<&StatisticalMethodResult> {
        self.statistical_methods.iter().find(|r| r.method == method)
    }
}
