//! Error types for the enumdef-rs library.
//!
//! This module provides structured error handling for the synthesis pipeline,
//! with error types that preserve context and distinguish fatal lookup
//! failures from recoverable ones.

use std::io;

use thiserror::Error;

/// Main result type for enumdef operations.
pub type Result<T> = std::result::Result<T, EnumdefError>;

/// Comprehensive error type for all enumdef operations.
#[derive(Error, Debug)]
pub enum EnumdefError {
    /// I/O related errors (file operations)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Requested enum type or term is absent from the table
    #[error("{kind} '{name}' not found in enum table")]
    NotFound {
        /// What was looked up ("enum type" or "enum term")
        kind: String,
        /// The key that failed to resolve
        name: String,
    },

    /// Input validation errors raised before any processing starts
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Column or field that failed validation
        field: Option<String>,
    },

    /// Collaborator-level load/parse failures (CSV, YAML)
    #[error("Input error: {message}")]
    Input {
        /// Error description
        message: String,
        /// Underlying parse error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization errors while converting entries to document values
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
    },
}

impl EnumdefError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new not-found error for a missing enum type
    pub fn type_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "enum type".to_string(),
            name: name.into(),
        }
    }

    /// Create a new not-found error for a missing enum term
    pub fn term_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: "enum term".to_string(),
            name: name.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new validation error with field context
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new input error without an underlying source
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True when the error is a not-found lookup failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// Implement From traits for common error types
impl From<io::Error> for EnumdefError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<csv::Error> for EnumdefError {
    fn from(err: csv::Error) -> Self {
        Self::Input {
            message: format!("CSV parsing failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for EnumdefError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = EnumdefError::type_not_found("Color");
        assert!(matches!(err, EnumdefError::NotFound { .. }));
        assert!(err.is_not_found());

        let err = EnumdefError::validation("missing columns");
        assert!(matches!(err, EnumdefError::Validation { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_display() {
        let err = EnumdefError::type_not_found("Color");
        assert_eq!(err.to_string(), "enum type 'Color' not found in enum table");

        let err = EnumdefError::term_not_found("RED");
        assert_eq!(err.to_string(), "enum term 'RED' not found in enum table");
    }

    #[test]
    fn test_validation_field_error() {
        let err = EnumdefError::validation_field("required column missing", "term_id");

        if let EnumdefError::Validation { message, field } = err {
            assert_eq!(message, "required column missing");
            assert_eq!(field, Some("term_id".to_string()));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_io_error_creation() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let err = EnumdefError::io("Failed to write definitions", io_err);

        if let EnumdefError::Io { message, source } = &err {
            assert_eq!(message, "Failed to write definitions");
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        } else {
            panic!("Expected Io error");
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: EnumdefError = io_err.into();

        assert!(matches!(err, EnumdefError::Io { .. }));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<i32>("invalid: yaml: content").unwrap_err();
        let err: EnumdefError = yaml_err.into();

        assert!(matches!(err, EnumdefError::Serialization { .. }));
    }

    #[test]
    fn test_error_display_formatting() {
        let err = EnumdefError::validation_field("missing required column", "enum");
        let display = format!("{}", err);
        assert!(display.contains("Validation error"));
        assert!(display.contains("missing required column"));
    }
}
