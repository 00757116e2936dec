//! Error handling for the msgforge application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for msgforge operations.
///
/// Substitution itself never fails (unrecognized placeholders are echoed
/// back verbatim); errors only arise on the I/O surface around it.
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while loading a template
    #[error("Template error: {0}.")]
    TemplateError(String),
}

/// Convenience type alias for Results with ForgeError as the error type.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The ForgeError to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: ForgeError) {
    eprintln!("{}", err);
    std::process::exit(1);
}
