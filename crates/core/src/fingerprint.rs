//! Canonical serialization and hashing for run artifacts.
//!
//! Decision runs are deterministic; fingerprints make that checkable. A
//! fingerprint is the SHA-256 digest of a canonical JSON rendering with
//! sorted object keys and floats rounded to a fixed grain, so the same
//! run always hashes to the same 64-character hex string regardless of
//! field order or floating point noise.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Rounding grain for float canonicalization.
pub const PRECISION: f64 = 1e-9;

/// Errors raised while canonicalizing a value.
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    #[error("value cannot be rendered as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Round `value` to the canonical grain.
///
/// NaN collapses to zero, the infinities clamp to the finite range, and
/// negative zero loses its sign. Magnitudes too large to rescale are
/// already canonical at this grain and pass through unchanged.
#[must_use]
pub fn normalize(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            f64::MAX
        } else {
            f64::MIN
        };
    }
    let scaled = value / PRECISION;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() * PRECISION;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Render `value` as canonical JSON bytes.
///
/// Object keys come out sorted and every float is normalized, so two
/// values that are equal up to field order and float noise produce
/// identical bytes.
pub fn canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, FingerprintError> {
    let tree = serde_json::to_value(value)?;
    Ok(serde_json::to_vec(&canonicalize(tree))?)
}

/// SHA-256 digest of `bytes`, lower-hex.
#[must_use]
pub fn digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Deterministic fingerprint of any serializable value.
///
/// # Example
///
/// ```
/// let a = serde_json::json!({"round": 3, "spread": 0.1 + 0.2});
/// let b = serde_json::json!({"spread": 0.3, "round": 3});
/// assert_eq!(
///     accord_core::fingerprint::fingerprint(&a).unwrap(),
///     accord_core::fingerprint::fingerprint(&b).unwrap(),
/// );
/// ```
pub fn fingerprint<T: Serialize>(value: &T) -> Result<String, FingerprintError> {
    Ok(digest(&canonical_bytes(value)?))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Number(number) if number.is_f64() => {
            canonical_float(number.as_f64().unwrap_or(0.0))
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        Value::Object(entries) => {
            let sorted: BTreeMap<String, Value> = entries
                .into_iter()
                .map(|(key, entry)| (key, canonicalize(entry)))
                .collect();
            Value::Object(sorted.into_iter().collect())
        }
        other => other,
    }
}

fn canonical_float(raw: f64) -> Value {
    // normalize() leaves no NaN or infinity behind, so from_f64 cannot
    // fail; Null is the conservative fallback.
    serde_json::Number::from_f64(normalize(raw)).map_or(Value::Null, Value::Number)
}
