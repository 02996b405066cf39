//! Version-specific document references
//!
//! OpenAPI versions share the same YAML/JSON syntax and differ only in
//! structural markers (a top-level `openapi` vs `swagger` key and its value).
//! Each supported version implements [`Reference`], declaring whether a
//! decoded document belongs to it and which schema resource validates it.
//! [`ReferenceRegistry`] tries the references in a fixed priority order,
//! newest first.
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the MIT or Apache-2.0 license

use serde_json::Value;

/// A version-specific document handler
pub trait Reference: Send + Sync {
    /// Short identifier, e.g. `"openapi-3.0"`
    fn name(&self) -> &'static str;

    /// Whether the decoded document structurally belongs to this version
    ///
    /// This is a cheap sniff of version markers, not validation; documents
    /// that are claimed here may still fail schema validation.
    fn is_applicable(&self, document: &Value) -> bool;

    /// Name of the JSON Schema resource that validates this version
    fn schema_resource(&self) -> &'static str;
}

/// OpenAPI 3.1: top-level `openapi` key with a `3.1.*` value
#[derive(Debug, Default)]
pub struct OpenApiV31;

impl Reference for OpenApiV31 {
    fn name(&self) -> &'static str {
        "openapi-3.1"
    }

    fn is_applicable(&self, document: &Value) -> bool {
        version_marker(document, "openapi")
            .map(|v| v.starts_with("3.1."))
            .unwrap_or(false)
    }

    fn schema_resource(&self) -> &'static str {
        "openapi-3.1.schema.json"
    }
}

/// OpenAPI 3.0: top-level `openapi` key with a `3.0.*` value
#[derive(Debug, Default)]
pub struct OpenApiV30;

impl Reference for OpenApiV30 {
    fn name(&self) -> &'static str {
        "openapi-3.0"
    }

    fn is_applicable(&self, document: &Value) -> bool {
        version_marker(document, "openapi")
            .map(|v| v.starts_with("3.0."))
            .unwrap_or(false)
    }

    fn schema_resource(&self) -> &'static str {
        "openapi-3.0.schema.json"
    }
}

/// Swagger 2.0: top-level `swagger` key equal to `"2.0"`
#[derive(Debug, Default)]
pub struct OpenApiV2;

impl Reference for OpenApiV2 {
    fn name(&self) -> &'static str {
        "openapi-2.0"
    }

    fn is_applicable(&self, document: &Value) -> bool {
        version_marker(document, "swagger")
            .map(|v| v == "2.0")
            .unwrap_or(false)
    }

    fn schema_resource(&self) -> &'static str {
        "openapi-2.0.schema.json"
    }
}

fn version_marker<'a>(document: &'a Value, key: &str) -> Option<&'a str> {
    document.get(key).and_then(|v| v.as_str())
}

/// Ordered collection of references tried until one claims a document
pub struct ReferenceRegistry {
    references: Vec<Box<dyn Reference>>,
}

impl ReferenceRegistry {
    /// Registry with all supported OpenAPI versions, newest first
    pub fn all_versions() -> Self {
        Self {
            references: vec![
                Box::new(OpenApiV31),
                Box::new(OpenApiV30),
                Box::new(OpenApiV2),
            ],
        }
    }

    /// Registry with an explicit priority order
    pub fn with_references(references: Vec<Box<dyn Reference>>) -> Self {
        Self { references }
    }

    /// The first reference claiming the document, if any
    pub fn claim(&self, document: &Value) -> Option<&dyn Reference> {
        self.references
            .iter()
            .map(|r| r.as_ref())
            .find(|r| r.is_applicable(document))
    }

    /// References in priority order
    pub fn references(&self) -> impl Iterator<Item = &dyn Reference> {
        self.references.iter().map(|r| r.as_ref())
    }
}
