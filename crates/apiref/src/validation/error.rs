//! Validation error types with structured per-field violations
//!
//! Copyright (c) 2025 Apiref Team
//! Licensed under the MIT or Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single schema violation: where in the document, and what went wrong
///
/// Paths are dotted (`info.version`); the document root is the empty path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path within the document
    pub path: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl Violation {
    /// Create a new violation
    pub fn new<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Schema validation failure carrying the full ordered violation list
///
/// Callers present these per field; the order matches the validator's
/// traversal of the document.
#[derive(Debug, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// File the document was loaded from, when known
    pub path: Option<PathBuf>,
    /// Summary message
    pub message: String,
    /// Ordered list of violations
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "Validation of '{}' failed: {}", path.display(), self.message)?,
            None => write!(f, "Validation failed: {}", self.message)?,
        }

        for violation in &self.violations {
            write!(f, "\n  - {}", violation)?;
        }

        Ok(())
    }
}

impl ValidationError {
    /// Create a validation error without violations
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            path: None,
            message: message.into(),
            violations: Vec::new(),
        }
    }

    /// Create a validation error with a violation list
    pub fn with_violations<M: Into<String>>(message: M, violations: Vec<Violation>) -> Self {
        Self {
            path: None,
            message: message.into(),
            violations,
        }
    }

    /// Attach the source file path
    pub fn for_file(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// Whether any violation references the given dotted path
    pub fn mentions(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
