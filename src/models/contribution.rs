//! Contribution decomposition records
//!
//! The parent/child hierarchy is represented as a flat table of rows grouped
//! by parent, not as an in-memory pointer graph. Each row attributes a share
//! of the parent's weighted-mean aggregate to one child.

use serde::{Deserialize, Serialize};

use crate::models::dimension::EntityKey;

/// One child's input row for a parent's decomposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildInput {
    /// Node the child entity belongs to
    pub child_node_id: String,
    /// Identity of the child entity
    pub child_entity_key: EntityKey,
    /// Aggregation weight for this child, e.g. encounter volume
    pub weight_value: f64,
    /// The child's own metric value
    pub child_value: f64,
}

/// A parent entity together with the children that aggregate into it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentGroup {
    /// Node the parent entity belongs to
    pub parent_node_id: String,
    /// Identity of the parent entity
    pub parent_entity_key: EntityKey,
    /// The parent's own aggregate metric value
    pub parent_value: f64,
    /// Children whose weighted values compose the parent's aggregate
    pub children: Vec<ChildInput>,
}

/// One (parent, child) attribution row.
///
/// Invariant: for a fixed parent with positive total weight, the
/// `weight_share` values over all of its children sum to 1.0 within floating
/// tolerance. With zero total weight every share is 0.0 and the invariant is
/// waived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRecord {
    /// Node the parent entity belongs to
    pub parent_node_id: String,
    /// Identity of the parent entity
    pub parent_entity_key: EntityKey,
    /// Node the child entity belongs to
    pub child_node_id: String,
    /// Identity of the child entity
    pub child_entity_key: EntityKey,
    /// Decomposition method; always `"weighted_mean"`
    pub method: String,
    /// The child's aggregation weight
    pub weight_value: f64,
    /// The child's fraction of the parent's total weight, in [0, 1]
    pub weight_share: f64,
    /// The child's own metric value
    pub child_value: f64,
    /// The parent's aggregate metric value
    pub parent_value: f64,
    /// `weight_share * child_value`: the child's component of the aggregate
    pub raw_component: f64,
    /// `weight_share * (child_value - parent_value)`: how much this child
    /// pulls the aggregate away from the parent's value
    pub excess_over_parent: f64,
}
