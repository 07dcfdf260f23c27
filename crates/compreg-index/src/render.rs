//! # Index Rendering
//!
//! `IndexBytes` is the only construction path for artifact bytes. Both the
//! writer and the freshness check go through it, so a check can never
//! disagree with what a build would write.
//!
//! Format: a JSON array, 2-space indentation, non-ASCII characters kept
//! literally, one trailing newline. Item keys follow [`IndexItem`] field
//! order; nested object keys are sorted.

use sha2::{Digest, Sha256};

use crate::project::IndexItem;

/// Rendered index artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexBytes(Vec<u8>);

impl IndexBytes {
    /// Render `items` in order.
    pub fn new(items: &[IndexItem]) -> Result<Self, serde_json::Error> {
        let mut bytes = serde_json::to_vec_pretty(items)?;
        bytes.push(b'\n');
        Ok(Self(bytes))
    }

    /// Artifact bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Hex SHA-256 of the artifact bytes.
    pub fn sha256_hex(&self) -> String {
        sha256_hex(&self.0)
    }
}

/// Hex SHA-256 of arbitrary bytes, for reporting on-disk content.
pub fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
