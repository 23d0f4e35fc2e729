//! Configuration handling for stamp templates.
//! This module loads the parameter schema that sits at the root of every
//! template directory.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Parameter schema read from the template config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub version: String,
    /// Shown once before the first prompt
    #[serde(default)]
    pub description: String,
    /// Parameters in declaration order
    #[serde(default)]
    pub params: Vec<Param>,
}

/// A single declared parameter.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(from = "RawParam")]
pub struct Param {
    /// Key used in the render context
    pub name: String,
    pub prompt: String,
    pub kind: ParamKind,
}

/// How a parameter's value is obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamKind {
    /// Single choice from a closed list.
    Enum { choices: Vec<String> },
    /// A line of free text.
    Text { required: bool },
}

/// Parameter declaration as it appears in the config file.
#[derive(Debug, Deserialize)]
struct RawParam {
    name: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    prompt: String,
    #[serde(default, rename = "enum")]
    choices: Vec<String>,
}

impl From<RawParam> for Param {
    fn from(raw: RawParam) -> Self {
        let kind = match raw.kind.as_deref() {
            Some("enum") => ParamKind::Enum { choices: raw.choices },
            _ => ParamKind::Text { required: raw.required },
        };
        Param { name: raw.name, prompt: raw.prompt, kind }
    }
}

impl Param {
    /// Creates a free-text parameter.
    pub fn text<S: Into<String>>(name: S, prompt: S, required: bool) -> Self {
        Param {
            name: name.into(),
            prompt: prompt.into(),
            kind: ParamKind::Text { required },
        }
    }

    /// Creates a single-choice parameter.
    pub fn choice<S: Into<String>>(name: S, prompt: S, choices: &[&str]) -> Self {
        Param {
            name: name.into(),
            prompt: prompt.into(),
            kind: ParamKind::Enum {
                choices: choices.iter().map(|c| c.to_string()).collect(),
            },
        }
    }
}

/// Parses the config file content into a [`Config`].
///
/// # Arguments
/// * `content` - Raw YAML content
/// * `config_path` - Path used in error messages
///
/// # Errors
/// * `Error::ConfigParseError` if the content does not match the schema
pub fn parse_config(content: &str, config_path: &Path) -> Result<Config> {
    serde_yaml::from_str(content).map_err(|source| Error::ConfigParseError {
        config_path: config_path.display().to_string(),
        source,
    })
}

/// Loads the parameter schema from `template_dir/config_file`.
///
/// # Arguments
/// * `template_dir` - Root of the template tree
/// * `config_file` - Name of the config file directly inside it
///
/// # Returns
/// * `Result<Config>` - The parsed schema
///
/// # Errors
/// * `Error::ConfigNotFound` if the file is absent or unreadable
/// * `Error::ConfigParseError` if it cannot be deserialized
pub fn load_config<P: AsRef<Path>>(template_dir: P, config_file: &str) -> Result<Config> {
    let config_path = template_dir.as_ref().join(config_file);
    debug!("Loading configuration from {}", config_path.display());

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| Error::ConfigNotFound {
            config_path: config_path.display().to_string(),
            source,
        })?;

    parse_config(&content, &config_path)
}
