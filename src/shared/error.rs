use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Lets CI systems tell argument mistakes apart from generation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The document was generated and presented
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed graph, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SPDX document generation.
///
/// The first three variants are raised by the projection itself; the rest
/// come from the adapters around it. Node-level variants always carry the
/// offending node identifier.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Dependency graph invariant violated: {details}\n\n💡 Hint: The graph must contain exactly one root node")]
    InvariantViolation { details: String },

    #[error("Invalid package identifier: {identifier}\nDetails: {details}\n\n💡 Hint: Identifiers must have the form <name>@<exact-version>")]
    InvalidPackageIdentifier { identifier: String, details: String },

    #[error("Malformed integrity value for package: {identifier}\nDetails: {details}\n\n💡 Hint: Integrity values must look like \"sha512-<base64 digest>\"")]
    MalformedChecksum { identifier: String, details: String },

    #[error("Dependency graph file not found: {path}\n\n💡 Hint: {suggestion}")]
    GraphFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency graph: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the graph snapshot is valid JSON")]
    GraphParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
