//! Apiref - parse, validate, and cache OpenAPI description documents
//!
//! This crate implements a small load pipeline for declarative API
//! description documents (OpenAPI 2.0, 3.0 and 3.1, as YAML or JSON on
//! disk):
//!
//! - **Format detection**: extension sniffing for `.yaml`, `.yml`, `.json`
//! - **Decoding**: to an order-preserving document tree
//! - **Applicability**: version-specific references claim documents by
//!   structural markers (`openapi` vs `swagger` keys)
//! - **Schema validation**: JSON Schema validation with structured
//!   per-field violations
//! - **Caching**: validated documents memoized under a
//!   `<path>:<sha256(bytes)>` key in an injected key-value backend
//!
//! ## Quick start
//!
//! ```no_run
//! use apiref::{DocumentLoader, MemoryCache};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let loader = DocumentLoader::new(Arc::new(MemoryCache::new()));
//!
//! let title = loader.title(Path::new("petstore.yaml"))?;
//! assert_eq!(title.as_deref(), Some("Pet Store"));
//! # Ok::<(), apiref::LoadError>(())
//! ```
//!
//! ## Error handling
//!
//! Three outcomes are deliberately distinct, because callers branch on
//! them when trying several version-specific loaders in sequence:
//!
//! - `Ok(None)` - the document is well-formed but belongs to a version
//!   this loader does not handle; try the next loader
//! - [`LoadError::Yaml`] / [`LoadError::Json`] - malformed input; fatal
//! - [`LoadError::SchemaValidation`] - well-formed and claimed, but fails
//!   the version schema; carries the full ordered violation list for
//!   per-field feedback
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the MIT or Apache-2.0 license

pub mod loader;
pub mod reference;
pub mod validation;

// Re-export commonly used types for convenience
pub use loader::{
    DocumentCache, DocumentLoader, DocumentParser, Fingerprint, Format, LoadError, LoadResult,
    MemoryCache,
};
pub use reference::{OpenApiV2, OpenApiV30, OpenApiV31, Reference, ReferenceRegistry};
pub use validation::{SchemaStore, ValidationError, ValidationResult, Violation};
