//! Peer-group node model
//!
//! A node is the unit of peer comparison: a named grouping of entities that
//! share one dimension schema and one metric. All entities within a node are
//! peers of each other.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SignalError};
use crate::identity;
use crate::models::dimension::EntityKey;

/// One entity's input row within a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEntity {
    /// Identity of the entity
    pub entity_key: EntityKey,
    /// Metric value, absent when the source had no value for this entity
    pub metric_value: Option<f64>,
}

impl NodeEntity {
    /// Create a new node entity
    #[must_use]
    pub fn new(entity_key: EntityKey, metric_value: Option<f64>) -> Self {
        Self {
            entity_key,
            metric_value,
        }
    }
}

/// A peer group: entities sharing one dimension schema and one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier, e.g. `"facility_x_service_line"`
    pub id: String,
    /// Metric the node's values measure, e.g. `"readmission_rate"`
    pub metric_id: String,
    /// Declared grouping granularity; informational only, not consumed by
    /// the math
    pub granularity: String,
    /// The peer entities
    pub entities: Vec<NodeEntity>,
}

impl Node {
    /// Create a new node
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        metric_id: impl Into<String>,
        granularity: impl Into<String>,
        entities: Vec<NodeEntity>,
    ) -> Self {
        Self {
            id: id.into(),
            metric_id: metric_id.into(),
            granularity: granularity.into(),
            entities,
        }
    }

    /// Verify the node's grain: no two entities may share the same entity
    /// key. The check uses the full key (every dimension, facility
    /// included), since peers within a node routinely differ only in the
    /// facility dimension.
    ///
    /// A collision silently corrupts every downstream peer statistic, so it
    /// is surfaced as a hard error.
    pub fn validate_grain(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for entity in &self.entities {
            let full_hash = identity::full_key_hash(entity.entity_key.dimensions());
            if !seen.insert(full_hash.clone()) {
                return Err(SignalError::DuplicateEntityKey {
                    node_id: self.id.clone(),
                    key_hash: full_hash,
                });
            }
        }
        Ok(())
    }

    /// Peer metric values in input order, skipping entities without a value.
    /// No imputation: an entity lacking a metric value is excluded from the
    /// peer array entirely.
    #[must_use]
    pub fn peer_values(&self) -> Vec<f64> {
        self.entities
            .iter()
            .filter_map(|e| e.metric_value)
            .collect()
    }
}
