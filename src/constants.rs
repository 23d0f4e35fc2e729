//! Common constants used throughout the stamp application.

/// Name of the parameter schema file at the template root
pub const CONFIG_FILE: &str = ".new.yml";

/// Destination used when none is given on the command line
pub const DEFAULT_OUTPUT_DIR: &str = ".";
