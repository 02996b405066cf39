//! Property-based tests for the load pipeline
//!
//! The central property: for any logical document, the YAML and JSON
//! renditions load to structurally equal trees, and reloading an unchanged
//! file never changes the result.

use apiref::{DocumentLoader, MemoryCache};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

/// Strategy for nested vendor-extension values with controlled complexity
///
/// Restricted to scalars that survive a YAML round-trip unambiguously;
/// floats are excluded because their textual renditions differ between
/// codecs.
fn extension_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z][a-zA-Z0-9 .,]{0,30}".prop_map(Value::String),
    ];

    leaf.prop_recursive(
        3,  // max depth
        12, // max size
        4,  // items per collection
        |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                proptest::collection::hash_map("[a-z][a-z0-9_]{0,12}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

/// Strategy for schema-valid OpenAPI 3.0 documents
fn document_strategy() -> impl Strategy<Value = Value> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,30}",                    // title
        "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",          // version
        proptest::option::of("[A-Za-z][A-Za-z0-9 .,]{0,60}"), // description
        extension_value_strategy(),                       // x-vendor payload
    )
        .prop_map(|(title, version, description, extension)| {
            let mut document = json!({
                "openapi": "3.0.3",
                "info": {
                    "title": title,
                    "version": version,
                },
                "paths": {},
                "x-vendor": extension,
            });
            if let Some(description) = description {
                document["info"]["description"] = json!(description);
            }
            document
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn yaml_and_json_renditions_load_equal(document in document_strategy()) {
        let dir = TempDir::new().unwrap();

        let yaml_path = dir.path().join("doc.yaml");
        std::fs::write(&yaml_path, serde_yaml::to_string(&document).unwrap()).unwrap();

        let json_path = dir.path().join("doc.json");
        std::fs::write(&json_path, serde_json::to_string_pretty(&document).unwrap()).unwrap();

        let loader = DocumentLoader::new(Arc::new(MemoryCache::new()));
        let from_yaml = loader.load(&yaml_path).unwrap().expect("yaml rendition claimed");
        let from_json = loader.load(&json_path).unwrap().expect("json rendition claimed");

        prop_assert_eq!(&from_yaml, &from_json);
        prop_assert_eq!(&from_json, &document);
    }

    #[test]
    fn reload_of_unchanged_file_is_stable(document in document_strategy()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();

        let loader = DocumentLoader::new(Arc::new(MemoryCache::new()));
        let first = loader.load(&path).unwrap().expect("document claimed");
        let second = loader.load(&path).unwrap().expect("document claimed");

        prop_assert_eq!(first, second);
    }

    #[test]
    fn accessors_agree_with_the_document(document in document_strategy()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.yaml");
        std::fs::write(&path, serde_yaml::to_string(&document).unwrap()).unwrap();

        let loader = DocumentLoader::new(Arc::new(MemoryCache::new()));

        let title = loader.title(&path).unwrap();
        prop_assert_eq!(title.as_deref(), document["info"]["title"].as_str());

        let description = loader.description(&path).unwrap();
        prop_assert_eq!(description.as_deref(), document["info"]["description"].as_str());
    }
}
