//! Parallel batch drivers
//!
//! Every component is a pure function over immutable inputs, so batches fan
//! out with one Rayon task per node (peer statistics) or per parent group
//! (decomposition) and merge by append. Output order follows input order;
//! consumers treat the record sets as order-insensitive.

use log::info;
use rayon::prelude::*;

use crate::algorithm::contribution;
use crate::algorithm::peer_stats::{ComparisonContext, PeerStatisticsCalculator};
use crate::error::Result;
use crate::models::contribution::{ContributionRecord, ParentGroup};
use crate::models::entity::EntityRecord;
use crate::models::node::Node;

/// Per-node output of a batch statistics run
#[derive(Debug, Clone)]
pub struct NodeResult {
    /// Id of the node the records belong to
    pub node_id: String,
    /// One record per entity in the node
    pub records: Vec<EntityRecord>,
}

/// Compute peer statistics for a batch of nodes sequentially
pub fn calculate_nodes(
    calculator: &PeerStatisticsCalculator,
    nodes: &[Node],
    context: ComparisonContext,
) -> Result<Vec<NodeResult>> {
    nodes
        .iter()
        .map(|node| {
            calculator.calculate(node, context).map(|records| NodeResult {
                node_id: node.id.clone(),
                records,
            })
        })
        .collect()
}

/// Compute peer statistics for a batch of nodes, one Rayon task per node.
///
/// Fails on the first grain violation encountered; partial output is
/// discarded, which is the caller's abort path.
pub fn calculate_nodes_parallel(
    calculator: &PeerStatisticsCalculator,
    nodes: &[Node],
    context: ComparisonContext,
) -> Result<Vec<NodeResult>> {
    info!(
        "computing peer statistics for {} nodes on {} threads",
        nodes.len(),
        rayon::current_num_threads()
    );
    nodes
        .par_iter()
        .map(|node| {
            calculator.calculate(node, context).map(|records| NodeResult {
                node_id: node.id.clone(),
                records,
            })
        })
        .collect()
}

/// Decompose a batch of parent groups sequentially
pub fn decompose_parents(groups: &[ParentGroup]) -> Result<Vec<ContributionRecord>> {
    let mut records = Vec::new();
    for group in groups {
        records.extend(contribution::decompose(group)?);
    }
    Ok(records)
}

/// Decompose a batch of parent groups, one Rayon task per parent
pub fn decompose_parents_parallel(groups: &[ParentGroup]) -> Result<Vec<ContributionRecord>> {
    info!(
        "decomposing {} parent groups on {} threads",
        groups.len(),
        rayon::current_num_threads()
    );
    let nested: Vec<Vec<ContributionRecord>> = groups
        .par_iter()
        .map(contribution::decompose)
        .collect::<Result<_>>()?;
    Ok(nested.into_iter().flatten().collect())
}
