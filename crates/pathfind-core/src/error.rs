//! Error types and exit codes for pathfind
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error or invalid argument
//! - 3: Data error (edge not found, edge already exists)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error or invalid argument (2)
    Usage = 2,
    /// Data error - lookup failure or structural conflict (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathfind operations
#[derive(Error, Debug)]
pub enum PathfindError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl PathfindError {
    /// Create an error for an argument that fails validation
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathfindError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        PathfindError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        PathfindError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        PathfindError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a failed IO operation on a path
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathfindError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathfindError::UnknownFormat(_)
            | PathfindError::UsageError(_)
            | PathfindError::InvalidValue { .. }
            | PathfindError::Unsupported { .. } => ExitCode::Usage,

            PathfindError::AlreadyExists { .. } | PathfindError::NotFound { .. } => {
                ExitCode::Data
            }

            PathfindError::Io(_)
            | PathfindError::Json(_)
            | PathfindError::Toml(_)
            | PathfindError::Yaml(_)
            | PathfindError::FailedOperation { .. }
            | PathfindError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathfindError::UnknownFormat(_) => "unknown_format",
            PathfindError::UsageError(_) => "usage_error",
            PathfindError::InvalidValue { .. } => "invalid_value",
            PathfindError::Unsupported { .. } => "unsupported",
            PathfindError::AlreadyExists { .. } => "already_exists",
            PathfindError::NotFound { .. } => "not_found",
            PathfindError::Io(_) => "io_error",
            PathfindError::Json(_) => "json_error",
            PathfindError::Toml(_) => "toml_error",
            PathfindError::Yaml(_) => "yaml_error",
            PathfindError::FailedOperation { .. } => "failed_operation",
            PathfindError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathfind operations
pub type Result<T> = std::result::Result<T, PathfindError>;
