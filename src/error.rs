//! Error handling for the stamp application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for stamp operations.
///
/// Every error is returned to the immediate caller; the first one
/// encountered terminates the run.
#[derive(Error, Debug)]
pub enum Error {
    /// The template config file is missing or unreadable.
    #[error("Configuration file '{config_path}' not found: {source}.")]
    ConfigNotFound {
        config_path: String,
        #[source]
        source: io::Error,
    },

    /// The template config file does not match the schema shape.
    #[error("Failed to parse configuration file '{config_path}': {source}.")]
    ConfigParseError {
        config_path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A parameter declaration that cannot be prompted for.
    #[error("Invalid parameter '{name}': {message}.")]
    InvalidParamError { name: String, message: String },

    /// A value rejected by a parameter's validation rule.
    #[error("Validation error: {message}.")]
    ValidationError { name: String, message: String },

    /// The user cancelled the interactive collection.
    #[error("Parameter collection aborted: {0}.")]
    CollectionAborted(String),

    /// The terminal could not be used for prompting.
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// A template referenced a key missing from the render context.
    #[error("Unresolved reference in template '{template}': {source}.")]
    UnresolvedReference {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// A template that is not syntactically valid.
    #[error("Failed to parse template '{template}': {source}.")]
    TemplateParseError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// A template that failed while executing.
    #[error("Failed to render template '{template}': {source}.")]
    TemplateExecError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// Directory or file creation, read or write failure.
    #[error("Filesystem error at '{path}': {source}.")]
    FilesystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Failure while traversing the template tree.
    #[error("Failed to walk template directory: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// A template entry path that is not valid UTF-8.
    #[error("Path '{path}' is not valid UTF-8.")]
    InvalidPath { path: String },

    /// Preloaded answers that are not valid JSON.
    #[error("Failed to parse answers as JSON: {0}.")]
    AnswersParseError(#[from] serde_json::Error),

    /// Represents errors that occur during stdin operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an io error with the path it happened at.
    pub fn filesystem<P: AsRef<std::path::Path>>(path: P, source: io::Error) -> Self {
        Error::FilesystemError { path: path.as_ref().display().to_string(), source }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
