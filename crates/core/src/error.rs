//! Structured error handling for the configuration layer
//!
//! This module provides error types with:
//! - Error codes for programmatic handling
//! - The offending configuration field, where one exists
//! - Recovery suggestions
//! - Serializable error reports

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // General errors (1xxx)
    Unknown = 1000,
    Internal = 1001,

    // IO errors (2xxx)
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    // Configuration errors (3xxx)
    ConfigError = 3000,
    ConfigNotFound = 3001,
    ConfigParseError = 3002,

    // Schema errors (4xxx)
    SchemaViolation = 4000,
    EmptyContentSet = 4001,
    UnknownField = 4002,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "General",
            2 => "IO",
            3 => "Configuration",
            4 => "Schema",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Configuration field the error refers to, if any
    pub field: Option<String>,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Attach the configuration field this error refers to
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Convert to a serializable report
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            field: self.field.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(|e| e.to_string()),
        }
    }

    // Convenience constructors

    /// Generic IO failure
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }

    /// Generic configuration failure
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// No configuration file at the given path (or in the search list)
    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a weft.config.json or use --config to specify a path")
    }

    /// A known field has the wrong type or shape
    pub fn schema_violation(
        field: impl Into<String>,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        let field = field.into();
        Self::new(
            ErrorCode::SchemaViolation,
            format!("`{}` must be {}, got {}", field, expected, actual),
        )
        .with_field(field)
    }

    /// `content` is present but lists no patterns at all
    pub fn empty_content_set() -> Self {
        Self::new(
            ErrorCode::EmptyContentSet,
            "`content` lists no glob patterns, so no source files would be scanned",
        )
        .with_field("content")
        .with_suggestion("Add at least one glob pattern, e.g. \"./src/**/*.html\"")
    }

    /// A top-level key the schema does not recognize (strict mode)
    pub fn unknown_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(
            ErrorCode::UnknownField,
            format!("Unrecognized top-level key `{}`", field),
        )
        .with_field(field)
        .with_suggestion("Recognized keys are content, darkMode, theme, plugins")
    }
}

/// Serializable error report for logging and tooling output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub code_str: String,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const SCHEMA_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
}

// Implement From for common error types

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(
            ErrorCode::ConfigParseError,
            format!("JSON parse error: {}", err),
        )
        .with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::SchemaViolation.to_string(), "E4000");
        assert_eq!(ErrorCode::ConfigNotFound.to_string(), "E3001");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::IoError.category(), "IO");
        assert_eq!(ErrorCode::ConfigParseError.category(), "Configuration");
        assert_eq!(ErrorCode::EmptyContentSet.category(), "Schema");
    }

    #[test]
    fn test_schema_violation_names_field() {
        let err = Error::schema_violation("darkMode", "one of \"media\", \"class\", or false", "\"system\"");

        assert_eq!(err.code, ErrorCode::SchemaViolation);
        assert_eq!(err.field.as_deref(), Some("darkMode"));
        assert!(err.message.contains("darkMode"));
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::empty_content_set().with_context("While loading weft.config.json");

        assert_eq!(err.code, ErrorCode::EmptyContentSet);
        assert!(err.context.is_some());
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_error_report_serialization() {
        let err = Error::unknown_field("safelist").with_context("During startup");

        let report = err.to_report();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("E4002"));
        assert!(json.contains("safelist"));
        assert!(json.contains("Schema"));
    }
}
