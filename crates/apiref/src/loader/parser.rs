//! Format detection and document decoding for YAML and JSON sources
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the MIT or Apache-2.0 license

use crate::loader::error::{LoadError, LoadResult};
use serde_json::Value;
use std::path::Path;

/// Supported source file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(extension) => match extension.to_lowercase().as_str() {
                "yaml" | "yml" => Ok(Format::Yaml),
                "json" => Ok(Format::Json),
                _ => Err(LoadError::unsupported_format(path.to_path_buf())),
            },
            None => Err(LoadError::unsupported_format(path.to_path_buf())),
        }
    }

    /// File extensions recognized for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Yaml => &["yaml", "yml"],
            Format::Json => &["json"],
        }
    }
}

/// Decoder turning raw file content into a document tree
///
/// Both formats decode to a `serde_json::Value` so the rest of the pipeline
/// is format-independent. Key order is preserved by the underlying map.
#[derive(Debug, Default)]
pub struct DocumentParser;

impl DocumentParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a document file, detecting format from the extension
    pub fn parse_file(&self, path: &Path) -> LoadResult<Value> {
        let format = Format::from_path(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|e| LoadError::io(path.to_path_buf(), e))?;
        self.parse_content(&content, format, path)
    }

    /// Parse document content with an explicit format
    pub fn parse_content(&self, content: &str, format: Format, path: &Path) -> LoadResult<Value> {
        match format {
            Format::Yaml => self.parse_yaml(content, path),
            Format::Json => self.parse_json(content, path),
        }
    }

    /// Parse YAML content
    ///
    /// A description document is a mapping at the root; scalar and sequence
    /// roots fail here as decode errors, not as schema violations. The content
    /// is decoded straight into a JSON tree, so mappings with non-string keys
    /// are rejected as YAML decode errors too.
    pub fn parse_yaml(&self, content: &str, path: &Path) -> LoadResult<Value> {
        let mapping: serde_json::Map<String, Value> =
            serde_yaml::from_str(content).map_err(|e| LoadError::yaml(path.to_path_buf(), e))?;
        Ok(Value::Object(mapping))
    }

    /// Parse JSON content
    ///
    /// serde_json enforces a bounded recursion depth, so pathologically
    /// nested input fails here rather than overflowing the stack. Non-object
    /// roots are rejected the same way.
    pub fn parse_json(&self, content: &str, path: &Path) -> LoadResult<Value> {
        let map: serde_json::Map<String, Value> =
            serde_json::from_str(content).map_err(|e| LoadError::json(path.to_path_buf(), e))?;
        Ok(Value::Object(map))
    }
}
