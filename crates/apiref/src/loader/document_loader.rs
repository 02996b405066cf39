//! The load pipeline: fingerprint, cache lookup, decode, claim, validate
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the MIT or Apache-2.0 license

use crate::loader::cache::DocumentCache;
use crate::loader::error::{LoadError, LoadResult};
use crate::loader::fingerprint::Fingerprint;
use crate::loader::parser::{DocumentParser, Format};
use crate::reference::{Reference, ReferenceRegistry};
use crate::validation::SchemaStore;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Loads API description documents, memoized by content fingerprint
///
/// A loaded document is only ever cached after passing decoding,
/// applicability and schema validation. Loading is a single synchronous
/// call path; two concurrent misses on the same key may both decode and
/// validate, and both write the same deterministic value.
pub struct DocumentLoader {
    registry: ReferenceRegistry,
    cache: Arc<dyn DocumentCache>,
    parser: DocumentParser,
    schemas: Arc<SchemaStore>,
}

impl DocumentLoader {
    /// Loader handling all supported OpenAPI versions, newest first
    pub fn new(cache: Arc<dyn DocumentCache>) -> Self {
        Self::with_registry(ReferenceRegistry::all_versions(), cache)
    }

    /// Loader for a single document version
    ///
    /// Returns the "not this version" result for documents other versions
    /// should claim; callers are expected to try their loaders in sequence.
    pub fn for_reference(reference: Box<dyn Reference>, cache: Arc<dyn DocumentCache>) -> Self {
        Self::with_registry(ReferenceRegistry::with_references(vec![reference]), cache)
    }

    /// Loader with an explicit reference priority order
    pub fn with_registry(registry: ReferenceRegistry, cache: Arc<dyn DocumentCache>) -> Self {
        Self {
            registry,
            cache,
            parser: DocumentParser::new(),
            schemas: Arc::new(SchemaStore::new()),
        }
    }

    /// Use a shared schema store (e.g. one configured with an on-disk root)
    pub fn with_schema_store(mut self, schemas: Arc<SchemaStore>) -> Self {
        self.schemas = schemas;
        self
    }

    /// Load a validated document from `path`
    ///
    /// `Ok(None)` means the document decoded cleanly but no configured
    /// reference claims it; that is not an error, and nothing is cached.
    pub fn load(&self, path: &Path) -> LoadResult<Option<Value>> {
        if path.as_os_str().is_empty() {
            return Err(LoadError::EmptyPath);
        }

        let bytes = std::fs::read(path).map_err(|e| LoadError::io(path.to_path_buf(), e))?;
        let key = Fingerprint::from_content(&bytes).cache_key(path);

        if let Some(document) = self.cache.get(&key) {
            debug!(path = %path.display(), "document served from cache");
            return Ok(Some(document));
        }

        let format = Format::from_path(path)?;
        let content = String::from_utf8(bytes).map_err(|e| {
            LoadError::io(
                path.to_path_buf(),
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })?;
        let document = self.parser.parse_content(&content, format, path)?;

        let Some(reference) = self.registry.claim(&document) else {
            debug!(path = %path.display(), "no reference claims document");
            return Ok(None);
        };

        self.schemas
            .validate(reference.schema_resource(), &document)
            .map_err(|e| LoadError::SchemaValidation(e.for_file(path.to_path_buf())))?;

        self.cache.set(&key, document.clone());
        debug!(
            path = %path.display(),
            reference = reference.name(),
            "document validated and cached"
        );

        Ok(Some(document))
    }

    /// `info.title` of the document at `path`
    pub fn title(&self, path: &Path) -> LoadResult<Option<String>> {
        self.info_field(path, "title")
    }

    /// `info.version` of the document at `path`
    pub fn version(&self, path: &Path) -> LoadResult<Option<String>> {
        self.info_field(path, "version")
    }

    /// `info.description` of the document at `path`
    pub fn description(&self, path: &Path) -> LoadResult<Option<String>> {
        self.info_field(path, "description")
    }

    /// References configured on this loader, in priority order
    pub fn reference_names(&self) -> Vec<&'static str> {
        self.registry.references().map(|r| r.name()).collect()
    }

    // An empty path is a caller probing an unset field, not a mistake; it
    // short-circuits to None without touching the filesystem. Load errors
    // propagate unchanged.
    fn info_field(&self, path: &Path, field: &str) -> LoadResult<Option<String>> {
        if path.as_os_str().is_empty() {
            return Ok(None);
        }

        Ok(self.load(path)?.and_then(|document| {
            document
                .get("info")
                .and_then(|info| info.get(field))
                .and_then(|value| value.as_str())
                .map(str::to_string)
        }))
    }
}
