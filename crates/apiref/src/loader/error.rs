//! Error types for document loading operations
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the MIT or Apache-2.0 license

use crate::validation::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Error types for the load pipeline
///
/// "Not this version" is deliberately absent: a document another reference
/// should claim is reported as `Ok(None)` by the loader, never as an error.
#[derive(Error, Debug)]
pub enum LoadError {
    /// An empty file path was given where one is required
    #[error("Document path must not be empty")]
    EmptyPath,

    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File extension is not one of .yaml, .yml, .json
    #[error("Unsupported source file extension '{extension}' for '{path}'. Use YAML or JSON")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Syntactically invalid YAML
    #[error("Failed to parse YAML file '{path}': {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Syntactically invalid JSON, including input past the bounded
    /// recursion depth
    #[error("Failed to parse JSON file '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Decoded document failed JSON Schema validation
    #[error(transparent)]
    SchemaValidation(#[from] ValidationError),
}

impl LoadError {
    /// Create an I/O error with path context
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Create an unsupported format error naming the offending extension
    pub fn unsupported_format(path: PathBuf) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_string();
        Self::UnsupportedFormat { path, extension }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml(path: PathBuf, source: serde_yaml::Error) -> Self {
        Self::Yaml { path, source }
    }

    /// Create a JSON parsing error with path context
    pub fn json(path: PathBuf, source: serde_json::Error) -> Self {
        Self::Json { path, source }
    }

    /// Get the file path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::UnsupportedFormat { path, .. } => Some(path),
            Self::Yaml { path, .. } => Some(path),
            Self::Json { path, .. } => Some(path),
            Self::EmptyPath | Self::SchemaValidation(_) => None,
        }
    }

    /// Whether this error is a decode failure (malformed YAML or JSON)
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Yaml { .. } | Self::Json { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_unsupported_format_names_extension() {
        let err = LoadError::unsupported_format(PathBuf::from("spec.txt"));
        match &err {
            LoadError::UnsupportedFormat { extension, .. } => assert_eq!(extension, "txt"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("txt"));
    }

    #[test]
    fn test_error_paths() {
        let path = PathBuf::from("petstore.yaml");

        let io_err = LoadError::io(
            path.clone(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(io_err.path(), Some(&path));
        assert!(!io_err.is_decode_error());

        let yaml_err = LoadError::yaml(
            path.clone(),
            serde_yaml::from_str::<serde_yaml::Value>("{").unwrap_err(),
        );
        assert_eq!(yaml_err.path(), Some(&path));
        assert!(yaml_err.is_decode_error());

        assert_eq!(LoadError::EmptyPath.path(), None);
    }

    #[test]
    fn test_json_error_is_decode_error() {
        let err = LoadError::json(
            Path::new("broken.json").to_path_buf(),
            serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err(),
        );
        assert!(err.is_decode_error());
        assert!(err.to_string().contains("broken.json"));
    }
}
