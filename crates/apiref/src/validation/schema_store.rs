//! Schema resource resolution and compiled-validator caching
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the MIT or Apache-2.0 license

use crate::validation::error::{ValidationError, ValidationResult, Violation};
use jsonschema::error::ValidationErrorKind;
use jsonschema::Validator;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::debug;

// Bundled schema resources, embedded at compile time so the library works
// without any on-disk layout.
const OPENAPI_V2_SCHEMA: &str = include_str!("../../schemas/openapi-2.0.schema.json");
const OPENAPI_V30_SCHEMA: &str = include_str!("../../schemas/openapi-3.0.schema.json");
const OPENAPI_V31_SCHEMA: &str = include_str!("../../schemas/openapi-3.1.schema.json");

/// Resolves schema resource names to compiled validators
///
/// Resolution order: a configured on-disk schema root first, the embedded
/// copy second. Compiling a validator is expensive, so compiled validators
/// are cached per resource name and shared behind `Arc`.
#[derive(Default)]
pub struct SchemaStore {
    schema_root: Option<PathBuf>,
    compiled: RwLock<HashMap<String, Arc<Validator>>>,
}

impl SchemaStore {
    /// Create a store serving only the embedded schema resources
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that resolves resources under `root` before falling
    /// back to the embedded copies
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            schema_root: Some(root),
            compiled: RwLock::new(HashMap::new()),
        }
    }

    /// Validate a document against the named schema resource
    ///
    /// Returns the full ordered violation list on failure.
    pub fn validate(&self, resource: &str, document: &Value) -> ValidationResult<()> {
        let validator = self.validator(resource)?;

        let violations: Vec<Violation> = validator
            .iter_errors(document)
            .map(|error| {
                let mut segments = pointer_segments(&error.instance_path.to_string());
                // The validator reports a missing required property at its
                // parent; callers expect the violation to name the missing
                // member itself.
                if let ValidationErrorKind::Required { property } = &error.kind {
                    if let Some(name) = property.as_str() {
                        segments.push(name.to_string());
                    }
                }
                Violation::new(segments.join("."), error.to_string())
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::with_violations(
                format!("document does not conform to schema '{}'", resource),
                violations,
            ))
        }
    }

    /// Get the compiled validator for a schema resource, compiling and
    /// caching it on first use
    pub fn validator(&self, resource: &str) -> ValidationResult<Arc<Validator>> {
        {
            let compiled = self.compiled.read().expect("schema store lock poisoned");
            if let Some(validator) = compiled.get(resource) {
                return Ok(Arc::clone(validator));
            }
        }

        let schema = self.load_schema(resource)?;
        let validator = jsonschema::validator_for(&schema).map_err(|e| {
            ValidationError::new(format!("schema resource '{}' does not compile: {}", resource, e))
        })?;
        let validator = Arc::new(validator);

        let mut compiled = self.compiled.write().expect("schema store lock poisoned");
        // Another caller may have compiled the same resource while we held no
        // lock; keep the first copy.
        let entry = Arc::clone(
            compiled
                .entry(resource.to_string())
                .or_insert_with(|| Arc::clone(&validator)),
        );
        debug!(resource, cached = compiled.len(), "schema validator compiled");
        Ok(entry)
    }

    /// Number of compiled validators currently cached
    pub fn compiled_count(&self) -> usize {
        self.compiled.read().expect("schema store lock poisoned").len()
    }

    fn load_schema(&self, resource: &str) -> ValidationResult<Value> {
        if let Some(root) = &self.schema_root {
            let path = root.join(resource);
            if path.is_file() {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    ValidationError::new(format!(
                        "failed to read schema resource '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                return serde_json::from_str(&content).map_err(|e| {
                    ValidationError::new(format!(
                        "schema resource '{}' is not valid JSON: {}",
                        path.display(),
                        e
                    ))
                });
            }
        }

        let embedded = match resource {
            "openapi-2.0.schema.json" => OPENAPI_V2_SCHEMA,
            "openapi-3.0.schema.json" => OPENAPI_V30_SCHEMA,
            "openapi-3.1.schema.json" => OPENAPI_V31_SCHEMA,
            _ => {
                return Err(ValidationError::new(format!(
                    "unknown schema resource '{}'",
                    resource
                )))
            }
        };

        serde_json::from_str(embedded).map_err(|e| {
            ValidationError::new(format!(
                "embedded schema resource '{}' is not valid JSON: {}",
                resource, e
            ))
        })
    }
}

/// Split a JSON Pointer into unescaped segments
///
/// `/paths/~1pets/get` becomes `["paths", "/pets", "get"]`; the root pointer
/// yields no segments.
fn pointer_segments(pointer: &str) -> Vec<String> {
    pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_pointer_segments() {
        assert!(pointer_segments("").is_empty());
        assert_eq!(pointer_segments("/info/version"), vec!["info", "version"]);
        assert_eq!(pointer_segments("/paths/~1pets/get"), vec!["paths", "/pets", "get"]);
        assert_eq!(pointer_segments("/a~0b"), vec!["a~b"]);
    }

    #[test]
    fn test_valid_document_passes() {
        let store = SchemaStore::new();
        let document = json!({
            "openapi": "3.0.3",
            "info": {"title": "Pet Store", "version": "1.0.0"},
            "paths": {}
        });
        assert!(store.validate("openapi-3.0.schema.json", &document).is_ok());
    }

    #[test]
    fn test_missing_required_field_names_the_member() {
        let store = SchemaStore::new();
        let document = json!({
            "openapi": "3.0.3",
            "info": {"title": "Pet Store"},
            "paths": {}
        });

        let err = store
            .validate("openapi-3.0.schema.json", &document)
            .unwrap_err();
        assert!(err.mentions("info.version"), "violations: {:?}", err.violations);
    }

    #[test]
    fn test_validators_are_compiled_once() {
        let store = SchemaStore::new();
        let first = store.validator("openapi-3.1.schema.json").unwrap();
        let second = store.validator("openapi-3.1.schema.json").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.compiled_count(), 1);
    }

    #[test]
    fn test_unknown_resource() {
        let store = SchemaStore::new();
        let err = store.validator("no-such.schema.json").unwrap_err();
        assert!(err.to_string().contains("no-such.schema.json"));
    }

    #[test]
    fn test_disk_root_overrides_embedded() {
        let dir = tempdir().unwrap();
        // A deliberately stricter schema than the embedded one.
        let schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "required": ["openapi", "info", "paths", "servers"]
        });
        fs::write(
            dir.path().join("openapi-3.0.schema.json"),
            serde_json::to_string(&schema).unwrap(),
        )
        .unwrap();

        let store = SchemaStore::with_root(dir.path().to_path_buf());
        let document = json!({
            "openapi": "3.0.3",
            "info": {"title": "Pet Store", "version": "1.0.0"},
            "paths": {}
        });

        let err = store
            .validate("openapi-3.0.schema.json", &document)
            .unwrap_err();
        assert!(err.mentions("servers"));
    }
}
