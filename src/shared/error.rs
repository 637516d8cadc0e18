use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Batch scripts can tell a partial failure apart from a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every BOM file was converted (or there was nothing to convert)
    Success = 0,
    /// At least one BOM file could not be read or its workbook not written
    FileFailures = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Error before any file was processed (config, patterns, discovery)
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
            ExitCode::FileFailures => write!(f, "File Failures (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// File-level errors for BOM conversion.
///
/// Row-level problems never end up here; see
/// [`RowError`](crate::bom_structure::domain::RowError).
#[derive(Debug, Error)]
pub enum BomError {
    #[error("BOM file not found: {path}\n\n💡 Hint: {suggestion}")]
    BomFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read BOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    BomFileReadError { path: PathBuf, details: String },

    #[error("Failed to parse BOM file: {path} (line {line})\nDetails: {details}\n\n💡 Hint: The BOM must be a UTF-8, tab-delimited export with a header line")]
    BomFileParseError {
        path: PathBuf,
        line: u64,
        details: String,
    },

    #[error("Failed to read ignore file: {path}\nDetails: {details}\n\n💡 Hint: The ignore file lists one part number per line")]
    IgnoreFileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid part number pattern: '{pattern}'\nDetails: {details}\n\n💡 Hint: Patterns use Rust regex syntax, e.g. \"^X\\d+_[A-Z]\"")]
    InvalidPattern { pattern: String, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    ConfigError { message: String, hint: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
