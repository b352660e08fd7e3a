//! Error handling for the signal computation core.
//!
//! Precondition violations (malformed dimensions, grain violations, negative
//! weights) are rejected eagerly with a descriptive error. Statistical
//! degeneracy and undersized peer groups are expected conditions and are
//! handled inline, never through this module.

/// Specialized error type for signal computation
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    /// A dimension was supplied without an identifier
    #[error("dimension has an empty id (value: {value})")]
    EmptyDimensionId {
        /// Display form of the offending dimension value
        value: String,
    },

    /// Two dimensions within one entity share the same id
    #[error("duplicate dimension id '{id}' within one entity key")]
    DuplicateDimensionId {
        /// The duplicated dimension id
        id: String,
    },

    /// Two entities within one node resolved to the same entity key.
    /// A key collision corrupts every peer statistic in the node, so this
    /// is a hard failure rather than a data-quality note.
    #[error("grain violation in node '{node_id}': duplicate entity key (hash {key_hash})")]
    DuplicateEntityKey {
        /// Node in which the collision occurred
        node_id: String,
        /// Dimensions hash shared by the colliding entities
        key_hash: String,
    },

    /// A contribution child carried a negative weight
    #[error("negative weight {weight} for child of parent '{parent_node_id}'")]
    NegativeWeight {
        /// Parent node whose child group is malformed
        parent_node_id: String,
        /// The offending weight value
        weight: f64,
    },

    /// Actionability weight outside [0, 1]
    #[error("actionability weight {value} is outside [0.0, 1.0]")]
    InvalidActionability {
        /// The offending weight value
        value: f64,
    },
}

/// Result type for signal computation operations
pub type Result<T> = std::result::Result<T, SignalError>;
