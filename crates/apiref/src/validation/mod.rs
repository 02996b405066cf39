//! JSON Schema validation for decoded documents
//!
//! Validation is delegated to the `jsonschema` crate; this module supplies
//! the schema resources (embedded, with an optional on-disk root), caches
//! compiled validators, and converts validator output into an ordered list
//! of `(path, message)` violations.
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the MIT or Apache-2.0 license

pub mod error;
pub mod schema_store;

pub use error::{ValidationError, ValidationResult, Violation};
pub use schema_store::SchemaStore;
