use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI jobs to tell a bad invocation apart
/// from a failed run. An order mismatch is advisory and exits with `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - graph and load order were produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, dependency file, output I/O, etc.)
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

/// Application-specific errors for dependency resolution.
///
/// Every variant is fatal to the run. Registry lookups are the one source
/// failure that never surfaces here: they degrade to an empty dependency list.
#[derive(Debug, Error)]
pub enum DepOrderError {
    #[error("Configuration error: {message}\n\n💡 Hint: {hint}")]
    Configuration { message: String, hint: String },

    #[error("Dependency file not found: {path}\n\n💡 Hint: {suggestion}")]
    DependencyFileNotFound { path: PathBuf, suggestion: String },

    #[error("Invalid dependency file format: {path} (line {line}): '{content}'\n\n💡 Hint: Each line must look like 'package: dep1, dep2'")]
    DependencyFileFormat {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Package '{package}' not found in {source_description}\n\n💡 Hint: Check the package name or the repository setting")]
    RootNotFound {
        package: String,
        source_description: String,
    },

    #[error("Registry request failed for '{package}'\nDetails: {details}")]
    RegistryError { package: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
