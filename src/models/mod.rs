//! Domain models for signal computation
//!
//! This module contains the core entity models used throughout the crate:
//! dimensions and entity keys, peer-group nodes, statistical output records,
//! contribution rows, and classification tiers.

pub mod classification;
pub mod contribution;
pub mod dimension;
pub mod entity;
pub mod node;

// Re-export commonly used types
pub use classification::{
    AnomalyTier, ClassificationRecord, ConsistencyTier, ContributingFactor, DataQuality,
    MagnitudeTier, PriorityScoreBreakdown, SubClassification, TrajectoryTier,
};
pub use contribution::{ChildInput, ContributionRecord, ParentGroup};
pub use dimension::{Dimension, DimensionValue, EntityKey};
pub use entity::{EntityRecord, StatisticalMethod, StatisticalMethodResult};
pub use node::{Node, NodeEntity};
