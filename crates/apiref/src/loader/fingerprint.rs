//! Content fingerprinting for cache invalidation
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the MIT or Apache-2.0 license

use sha2::{Digest, Sha256};
use std::path::Path;

/// SHA-256 fingerprint of a file's bytes, rendered as lowercase hex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of raw content
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Hex digest of the content
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Cache key for a document at `path` with this content
    ///
    /// Key format: `<path>:<hex digest>`. A changed file produces a new key,
    /// so a stale entry is orphaned rather than overwritten.
    pub fn cache_key(&self, path: &Path) -> String {
        format!("{}:{}", path.display(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_deterministic() {
        let a = Fingerprint::from_content(b"openapi: 3.0.3");
        let b = Fingerprint::from_content(b"openapi: 3.0.3");
        assert_eq!(a, b);
        assert_eq!(a.as_hex().len(), 64);
    }

    #[test]
    fn test_fingerprint_changes_with_content() {
        let a = Fingerprint::from_content(b"version: 1.0.0");
        let b = Fingerprint::from_content(b"version: 1.0.1");
        assert_ne!(a, b);
    }

    #[test]
    fn test_cache_key_format() {
        let fp = Fingerprint::from_content(b"{}");
        let key = fp.cache_key(Path::new("specs/petstore.yaml"));
        assert_eq!(key, format!("specs/petstore.yaml:{}", fp.as_hex()));
    }
}
