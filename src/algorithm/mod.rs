//! Algorithm implementations for signal computation
//!
//! This module contains the computation components: peer statistics,
//! anomaly tier classification, contribution decomposition, the
//! classification engine, and the parallel batch drivers.

pub mod classification;
pub mod contribution;
pub mod parallel;
pub mod peer_stats;
pub mod tiers;

pub use classification::{ClassificationEngine, ClassificationInput};
pub use peer_stats::{ComparisonContext, PeerStatisticsCalculator};
