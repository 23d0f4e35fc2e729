//! stamp scaffolds a new file tree from a template directory.
//! Parameters declared in the template's `.new.yml` are collected from the
//! user and substituted into every path and file of the tree.

/// Command-line interface module for the stamp application
pub mod cli;

/// Parameter schema loading from `.new.yml`
pub mod config;

pub mod constants;

/// Resolved parameter values shared by a whole render
pub mod context;

/// Error types and handling for the stamp application
pub mod error;

pub mod logger;

/// Parameter collection and preloaded answers
pub mod parser;

/// Per-entry processing and destination path resolution
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template string rendering
pub mod renderer;

/// Template instances and the tree walk
pub mod template;
