//! Document loading: format detection, decoding, fingerprinting and caching
//!
//! The pipeline for a cache miss is: read bytes, fingerprint, sniff format
//! from the extension, decode, ask the configured references which version
//! claims the document, validate against that version's schema, cache. A
//! cache hit returns the stored document without re-decoding or
//! re-validating.
//!
//! # Example
//!
//! ```no_run
//! use apiref::{DocumentLoader, MemoryCache};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let loader = DocumentLoader::new(Arc::new(MemoryCache::new()));
//! if let Some(document) = loader.load(Path::new("petstore.yaml"))? {
//!     println!("loaded: {}", document["info"]["title"]);
//! }
//! # Ok::<(), apiref::LoadError>(())
//! ```
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the MIT or Apache-2.0 license

pub mod cache;
pub mod document_loader;
pub mod error;
pub mod fingerprint;
pub mod parser;

pub use cache::{DocumentCache, MemoryCache};
pub use document_loader::DocumentLoader;
pub use error::{LoadError, LoadResult};
pub use fingerprint::Fingerprint;
pub use parser::{DocumentParser, Format};
