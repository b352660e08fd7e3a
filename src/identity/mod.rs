//! Deterministic entity identity hashing
//!
//! The dimensions hash correlates the same dimension combination across peer
//! groups, time, and pipeline stages. It is a correlation key, not a primary
//! identity: the facility dimension is excluded, so two entities differing
//! only in facility hash identically by design.
//!
//! The hash is the lowercase hex MD5 digest of a canonical serialization:
//! compact JSON with keys sorted lexicographically. Integer values print
//! without a decimal point and floats in shortest round-trip form, so the
//! digest is stable across platforms and locales.

use crate::error::{Result, SignalError};
use crate::models::dimension::Dimension;

/// Default id of the facility dimension excluded from the hash
pub const DEFAULT_FACILITY_DIMENSION_ID: &str = "facility";

/// Canonical JSON text for a dimension list, optionally excluding one id.
///
/// Keys must be unique after exclusion; a duplicate is a caller contract
/// violation and is rejected rather than silently overwritten.
fn canonical_json(dimensions: &[Dimension], exclude_id: Option<&str>) -> Result<String> {
    // serde_json's default map is a BTreeMap, so keys serialize sorted.
    let mut map = serde_json::Map::new();
    for dim in dimensions {
        if dim.id.is_empty() {
            return Err(SignalError::EmptyDimensionId {
                value: dim.value.to_string(),
            });
        }
        if exclude_id == Some(dim.id.as_str()) {
            continue;
        }
        if map
            .insert(dim.id.clone(), dim.value.canonical_json())
            .is_some()
        {
            return Err(SignalError::DuplicateDimensionId {
                id: dim.id.clone(),
            });
        }
    }
    // Compact separators; an empty map canonicalizes to "{}".
    Ok(serde_json::Value::Object(map).to_string())
}

fn hex_md5(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}

/// Hash a dimension combination, excluding the named facility dimension.
///
/// Invariant under permutation of the input list. An empty-after-exclusion
/// set hashes the canonical empty object `{}`.
pub fn entity_dimensions_hash_with(
    dimensions: &[Dimension],
    facility_dimension_id: &str,
) -> Result<String> {
    let text = canonical_json(dimensions, Some(facility_dimension_id))?;
    Ok(hex_md5(&text))
}

/// Hash a dimension combination, excluding the default `"facility"` dimension
pub fn entity_dimensions_hash(dimensions: &[Dimension]) -> Result<String> {
    entity_dimensions_hash_with(dimensions, DEFAULT_FACILITY_DIMENSION_ID)
}

/// Hash the full dimension list with nothing excluded.
///
/// Used for grain validation within a node, where entities routinely differ
/// only in the facility dimension. Expects dimensions from a validated
/// `EntityKey`, whose construction already guarantees unique non-empty ids.
#[must_use]
pub fn full_key_hash(dimensions: &[Dimension]) -> String {
    // Unreachable for validated keys; fall back to hashing the empty object
    // rather than panicking if a raw list sneaks through.
    let text = canonical_json(dimensions, None).unwrap_or_else(|_| "{}".to_string());
    hex_md5(&text)
}
