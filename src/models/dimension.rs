//! Dimension and entity key models
//!
//! A dimension is a single `(id, value)` pair describing one axis of an
//! entity (facility, service line, payer, time period, ...). A validated,
//! id-sorted set of dimensions forms an entity key.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Result, SignalError};

/// Scalar value carried by a dimension
///
/// Closed type rather than a free string so that canonical serialization
/// (and therefore the identity hash) is pinned per variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionValue {
    /// Textual value, e.g. a service line code
    Text(String),
    /// Integer value, e.g. a fiscal year
    Int(i64),
    /// Floating-point value
    Float(f64),
}

impl DimensionValue {
    /// Canonical JSON fragment for this value.
    ///
    /// Integers print without a decimal point; floats print in shortest
    /// round-trip form via `serde_json` (ryu), independent of locale. This
    /// formatting is part of the identity-hash contract and must not change.
    #[must_use]
    pub fn canonical_json(&self) -> serde_json::Value {
        match self {
            Self::Text(s) => serde_json::Value::String(s.clone()),
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Float(f) => {
                serde_json::Number::from_f64(*f).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
        }
    }
}

impl std::fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for DimensionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DimensionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for DimensionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for DimensionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// A single dimension of an entity: `(id, value)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Dimension identifier, e.g. `"facility"` or `"service_line"`
    pub id: String,
    /// Dimension value
    pub value: DimensionValue,
}

impl Dimension {
    /// Create a new dimension
    #[must_use]
    pub fn new(id: impl Into<String>, value: impl Into<DimensionValue>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Validated set of dimensions identifying one entity within a node.
///
/// Dimensions are stored sorted by id. Construction rejects empty and
/// duplicate ids eagerly; a malformed key never reaches the statistics layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityKey {
    dimensions: SmallVec<[Dimension; 4]>,
}

impl EntityKey {
    /// Build an entity key from an arbitrarily ordered dimension list
    pub fn new(dimensions: impl IntoIterator<Item = Dimension>) -> Result<Self> {
        let mut dims: SmallVec<[Dimension; 4]> = dimensions.into_iter().collect();

        for dim in &dims {
            if dim.id.is_empty() {
                return Err(SignalError::EmptyDimensionId {
                    value: dim.value.to_string(),
                });
            }
        }

        dims.sort_by(|a, b| a.id.cmp(&b.id));

        for pair in dims.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(SignalError::DuplicateDimensionId {
                    id: pair[0].id.clone(),
                });
            }
        }

        Ok(Self { dimensions: dims })
    }

    /// Dimensions in id-sorted order
    #[must_use]
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Look up a dimension value by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DimensionValue> {
        self.dimensions
            .binary_search_by(|d| d.id.as_str().cmp(id))
            .ok()
            .map(|idx| &self.dimensions[idx].value)
    }

    /// Number of dimensions in the key
    #[must_use]
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// Whether the key has no dimensions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_key_sorts_by_id() {
        let key = EntityKey::new(vec![
            Dimension::new("service_line", "cardiology"),
            Dimension::new("facility", "F001"),
        ])
        .unwrap();

        let ids: Vec<&str> = key.dimensions().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["facility", "service_line"]);
    }

    #[test]
    fn test_entity_key_rejects_duplicate_id() {
        let result = EntityKey::new(vec![
            Dimension::new("facility", "F001"),
            Dimension::new("facility", "F002"),
        ]);
        assert!(matches!(
            result,
            Err(SignalError::DuplicateDimensionId { .. })
        ));
    }

    #[test]
    fn test_entity_key_rejects_empty_id() {
        let result = EntityKey::new(vec![Dimension::new("", "F001")]);
        assert!(matches!(result, Err(SignalError::EmptyDimensionId { .. })));
    }

    #[test]
    fn test_get_by_id() {
        let key = EntityKey::new(vec![
            Dimension::new("facility", "F001"),
            Dimension::new("year", 2024i64),
        ])
        .unwrap();

        assert_eq!(key.get("year"), Some(&DimensionValue::Int(2024)));
        assert_eq!(key.get("missing"), None);
    }
}
