//! A Rust library for computing peer-relative quality signals for healthcare
//! entities: z-scores and percentile ranks against peer groups, weighted
//! contribution decomposition of aggregates, and multi-dimensional tier
//! classification with a composite priority score.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod stats;

// Re-export the most common types for easier use
// Core types
pub use config::{ScoringConfig, StatisticsConfig, SuppressionThresholds};
pub use error::{Result, SignalError};

// Models
pub use models::{
    AnomalyTier, ChildInput, ClassificationRecord, ConsistencyTier, ContributingFactor,
    ContributionRecord, DataQuality, Dimension, DimensionValue, EntityKey, EntityRecord,
    MagnitudeTier, Node, NodeEntity, ParentGroup, PriorityScoreBreakdown, StatisticalMethod,
    StatisticalMethodResult, SubClassification, TrajectoryTier,
};

// Computation components
pub use algorithm::classification::{ClassificationEngine, ClassificationInput};
pub use algorithm::contribution::decompose;
pub use algorithm::parallel::{
    calculate_nodes, calculate_nodes_parallel, decompose_parents, decompose_parents_parallel,
    NodeResult,
};
pub use algorithm::peer_stats::{ComparisonContext, PeerStatisticsCalculator};
pub use algorithm::tiers::classify;
pub use identity::{entity_dimensions_hash, entity_dimensions_hash_with};
