//! Error types for `mpi-glossary`.
//!
//! A small hierarchy: registry errors (parsing and strict-mode validation)
//! plus the usual I/O and serialization wrappers, with a Unix-style exit
//! code mapping for the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for `mpi-glossary` CLI operations.
///
/// These follow Unix conventions: 0 success, small positive codes for
/// domain failures, 64 for usage errors.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Registry error (invalid YAML, strict validation failure)
    pub const REGISTRY_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

/// Top-level error type for `mpi-glossary` operations.
#[derive(Debug, Error)]
pub enum GlossaryError {
    /// Registry loading or validation error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GlossaryError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Registry(_) | Self::Yaml(_) => ExitCode::REGISTRY_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

/// Registry loading and strict-mode validation errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// YAML parsing failed for a registry file
    #[error("parse error in {path}: {message}")]
    Parse {
        /// Path to the registry file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },

    /// Strict mode: duplicate function name across lessons
    #[error("duplicate function '{name}' in lessons '{first}' and '{second}'")]
    DuplicateName {
        /// The duplicated function name
        name: String,
        /// Lesson where the name was first defined
        first: String,
        /// Lesson holding the later definition
        second: String,
    },

    /// Strict mode: a lesson defines no functions
    #[error("lesson '{lesson}' defines no functions")]
    EmptyLesson {
        /// Identifier of the empty lesson
        lesson: String,
    },

    /// Strict mode: a function name does not look like an MPI identifier
    #[error("'{name}' in lesson '{lesson}' is not an MPI_ identifier")]
    NotMpiName {
        /// The offending name
        name: String,
        /// Lesson that defines it
        lesson: String,
    },
}

/// Result type alias for `mpi-glossary` operations.
pub type Result<T> = std::result::Result<T, GlossaryError>;
