//! Peer statistics calculation
//!
//! Computes per-entity statistical results for one node at a time. The node
//! is the whole comparison population, so spread uses the population formula
//! and an undersized group suppresses scores rather than widening intervals.

use log::debug;

use crate::config::StatisticsConfig;
use crate::error::Result;
use crate::models::entity::{EntityRecord, StatisticalMethod, StatisticalMethodResult};
use crate::models::node::Node;
use crate::stats;

/// Statistical context a peer comparison runs in, selecting which
/// suppression threshold applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonContext {
    /// Point-in-time comparison of aggregate values
    Aggregate,
    /// Comparison of trend/slope values over time
    Trend,
}

/// Calculator producing per-entity statistical results for a node
#[derive(Debug, Clone, Default)]
pub struct PeerStatisticsCalculator {
    config: StatisticsConfig,
}

impl PeerStatisticsCalculator {
    /// Create a calculator with the given configuration
    #[must_use]
    pub fn new(config: StatisticsConfig) -> Self {
        Self { config }
    }

    fn min_peers(&self, context: ComparisonContext) -> usize {
        match context {
            ComparisonContext::Aggregate => self.config.suppression.aggregate_min_peers,
            ComparisonContext::Trend => self.config.suppression.trend_min_peers,
        }
    }

    /// Compute both statistical methods for every entity in the node.
    ///
    /// Validates the node's grain first; entities without a metric value are
    /// excluded from the peer array (no imputation) but still receive a
    /// record with empty method results. Peer reductions run in the node's
    /// input order, keeping results bit-reproducible for a fixed input.
    pub fn calculate(&self, node: &Node, context: ComparisonContext) -> Result<Vec<EntityRecord>> {
        node.validate_grain()?;

        let peers = node.peer_values();
        let suppressed = peers.len() < self.min_peers(context);
        if suppressed {
            debug!(
                "node '{}': {} peers below threshold {}, suppressing scores",
                node.id,
                peers.len(),
                self.min_peers(context)
            );
        }

        // Empty peer array only happens when no entity has a value; the
        // centers default to 0.0 and every member is suppressed anyway.
        let peer_mean = stats::mean(&peers).unwrap_or(0.0);
        let peer_std = stats::population_std(&peers).unwrap_or(0.0);
        let peer_median = stats::median(&peers).unwrap_or(0.0);
        let peer_mad = stats::mad(&peers).unwrap_or(0.0);

        let records = node
            .entities
            .iter()
            .map(|entity| {
                let methods = match entity.metric_value {
                    Some(value) => {
                        let rank = stats::percentile_rank(value, &peers);
                        vec![
                            StatisticalMethodResult {
                                method: StatisticalMethod::SimpleZscore,
                                peer_center: peer_mean,
                                peer_spread: peer_std,
                                zscore: (!suppressed)
                                    .then(|| stats::simple_zscore(value, peer_mean, peer_std)),
                                percentile_rank: rank,
                                suppressed,
                            },
                            StatisticalMethodResult {
                                method: StatisticalMethod::RobustZscore,
                                peer_center: peer_median,
                                peer_spread: peer_mad,
                                zscore: (!suppressed)
                                    .then(|| stats::robust_zscore(value, peer_median, peer_mad)),
                                percentile_rank: rank,
                                suppressed,
                            },
                        ]
                    }
                    None => Vec::new(),
                };
                EntityRecord {
                    entity_key: entity.entity_key.clone(),
                    metric_value: entity.metric_value,
                    statistical_methods: methods,
                }
            })
            .collect();

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dimension::{Dimension, EntityKey};
    use crate::models::node::NodeEntity;

    fn node_with_values(values: &[f64]) -> Node {
        let entities = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let key = EntityKey::new(vec![
                    Dimension::new("facility", format!("F{i:03}")),
                    Dimension::new("service_line", "cardiology"),
                ])
                .unwrap();
                NodeEntity::new(key, Some(v))
            })
            .collect();
        Node::new("test_node", "readmission_rate", "facility", entities)
    }

    #[test]
    fn test_small_group_is_suppressed() {
        let node = node_with_values(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let calc = PeerStatisticsCalculator::default();
        let records = calc.calculate(&node, ComparisonContext::Aggregate).unwrap();

        for record in &records {
            for result in &record.statistical_methods {
                assert!(result.suppressed);
                assert!(result.zscore.is_none());
            }
        }
        // Percentile rank is still populated for suppressed entities.
        assert_eq!(records[2].statistical_methods[0].percentile_rank, 50.0);
    }

    #[test]
    fn test_trend_threshold_is_lower() {
        let values: Vec<f64> = (0..12).map(f64::from).collect();
        let node = node_with_values(&values);
        let calc = PeerStatisticsCalculator::default();

        let aggregate = calc.calculate(&node, ComparisonContext::Aggregate).unwrap();
        assert!(aggregate[0].statistical_methods[0].suppressed);

        let trend = calc.calculate(&node, ComparisonContext::Trend).unwrap();
        assert!(!trend[0].statistical_methods[0].suppressed);
        assert!(trend[0].statistical_methods[0].zscore.is_some());
    }

    #[test]
    fn test_zscores_for_large_group() {
        let values: Vec<f64> = (1..=16).map(f64::from).collect();
        let node = node_with_values(&values);
        let calc = PeerStatisticsCalculator::default();
        let records = calc.calculate(&node, ComparisonContext::Aggregate).unwrap();

        let first = records[0].method_result(StatisticalMethod::SimpleZscore).unwrap();
        assert!(!first.suppressed);
        let z = first.zscore.unwrap();
        // mean 8.5, population std of 1..=16
        assert!(z < 0.0);
        assert!((first.peer_center - 8.5).abs() < 1e-12);
    }

    #[test]
    fn test_missing_values_get_empty_methods() {
        let mut node = node_with_values(&(1..=16).map(f64::from).collect::<Vec<_>>());
        node.entities[3].metric_value = None;
        let calc = PeerStatisticsCalculator::default();
        let records = calc.calculate(&node, ComparisonContext::Aggregate).unwrap();

        assert!(records[3].statistical_methods.is_empty());
        // The missing entity is excluded from everyone's peer array.
        assert_eq!(records[0].statistical_methods[0].peer_center,
            (1..=16).filter(|&i| i != 4).map(f64::from).sum::<f64>() / 15.0);
    }
}
