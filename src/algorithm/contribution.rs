//! Weighted contribution decomposition
//!
//! Explains a parent's aggregate value by attributing weight shares to its
//! children, independently of the z-score pipeline. Each parent group is
//! self-contained, so decomposition parallelizes trivially by group.

use crate::error::{Result, SignalError};
use crate::models::contribution::{ContributionRecord, ParentGroup};

/// Decomposition method label carried on every record
pub const WEIGHTED_MEAN_METHOD: &str = "weighted_mean";

/// A child's fraction of the total weight; 0.0 when the total is zero
#[must_use]
pub fn weight_share(weight: f64, total_weight: f64) -> f64 {
    if total_weight == 0.0 {
        0.0
    } else {
        weight / total_weight
    }
}

/// The child's component of the parent's weighted-mean aggregate
#[must_use]
pub fn raw_component(share: f64, child_value: f64) -> f64 {
    share * child_value
}

/// How much this child pulls the aggregate away from the parent's value
#[must_use]
pub fn excess_over_parent(share: f64, child_value: f64, parent_value: f64) -> f64 {
    share * (child_value - parent_value)
}

/// Decompose one parent group into per-child contribution records.
///
/// Negative weights are a caller contract violation. A zero total weight is
/// an expected condition: every share is 0.0 and the shares-sum-to-one
/// invariant is waived for that parent.
pub fn decompose(group: &ParentGroup) -> Result<Vec<ContributionRecord>> {
    for child in &group.children {
        if child.weight_value < 0.0 {
            return Err(SignalError::NegativeWeight {
                parent_node_id: group.parent_node_id.clone(),
                weight: child.weight_value,
            });
        }
    }

    // Input-order summation keeps the decomposition bit-reproducible.
    let total_weight: f64 = group.children.iter().map(|c| c.weight_value).sum();

    let records = group
        .children
        .iter()
        .map(|child| {
            let share = weight_share(child.weight_value, total_weight);
            ContributionRecord {
                parent_node_id: group.parent_node_id.clone(),
                parent_entity_key: group.parent_entity_key.clone(),
                child_node_id: child.child_node_id.clone(),
                child_entity_key: child.child_entity_key.clone(),
                method: WEIGHTED_MEAN_METHOD.to_string(),
                weight_value: child.weight_value,
                weight_share: share,
                child_value: child.child_value,
                parent_value: group.parent_value,
                raw_component: raw_component(share, child.child_value),
                excess_over_parent: excess_over_parent(
                    share,
                    child.child_value,
                    group.parent_value,
                ),
            }
        })
        .collect();

    Ok(records)
}
