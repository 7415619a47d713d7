//! Rosetta data types.
//!
//! Every type rejects unknown fields when deserialized, so a file written for
//! one type can never be silently loaded as another.

use crate::Result;
use serde::Serialize;
use sha2::{Digest, Sha256};

pub mod amount;
pub use amount::*;

pub mod block;
pub use block::*;

pub mod events;
pub use events::*;

pub mod identifiers;
pub use identifiers::*;

/// Free-form metadata attached to many Rosetta objects.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Returns the hex-encoded SHA-256 digest of a value's JSON encoding. Object
/// keys are sorted, so equal values always hash the same.
pub fn hash<T: Serialize>(value: &T) -> Result<String> {
    // Round-tripping through `Value` sorts the keys of nested metadata maps.
    let canonical = serde_json::to_value(value)?;
    let bytes = serde_json::to_vec(&canonical)?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
