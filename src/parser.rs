//! Parameter collection: turns the declared schema into a render context,
//! using preloaded answers where present and prompting otherwise.

use crate::config::{Config, Param, ParamKind};
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use log::debug;
use std::io::Read;

/// Validation rule for free-text parameters.
///
/// Returns the rejection reason when a required value is empty.
pub fn validate_text(name: &str, required: bool, value: &str) -> std::result::Result<(), String> {
    if required && value.is_empty() {
        return Err(format!("{name} is required"));
    }
    Ok(())
}

/// Parses preloaded answers. Empty input means no answers.
pub fn get_preloaded_answers(content: &str) -> Result<serde_json::Value> {
    if content.is_empty() {
        return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_str(content)?)
}

/// Reads preloaded answers from stdin as a JSON object.
pub fn load_from_stdin() -> Result<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    get_preloaded_answers(buffer.trim())
}

/// Returns the preloaded answer for `name`, if any, as a string.
fn preloaded_answer(preloaded: &serde_json::Value, name: &str) -> Option<String> {
    match preloaded.get(name)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn check_answer(param: &Param, value: &str) -> Result<()> {
    let rejected = match &param.kind {
        ParamKind::Text { required } => validate_text(&param.name, *required, value).err(),
        ParamKind::Enum { choices } => (!choices.iter().any(|c| c == value)).then(|| {
            format!("'{value}' is not a valid choice for {} ({})", param.name, choices.join(", "))
        }),
    };

    match rejected {
        Some(message) => Err(Error::ValidationError { name: param.name.clone(), message }),
        None => Ok(()),
    }
}

fn prompt_param(prompt: &dyn Prompter, param: &Param) -> Result<String> {
    match &param.kind {
        ParamKind::Enum { choices } => {
            if choices.is_empty() {
                return Err(Error::InvalidParamError {
                    name: param.name.clone(),
                    message: "enum parameter declares no choices".to_string(),
                });
            }
            prompt.select(&param.prompt, choices)
        }
        ParamKind::Text { required } => {
            let validate = |value: &str| validate_text(&param.name, *required, value);
            let value = prompt.text(&param.prompt, &validate)?;
            check_answer(param, &value)?;
            Ok(value)
        }
    }
}

/// Resolves every declared parameter, in declaration order.
///
/// # Arguments
/// * `prompt` - Interactive boundary used for parameters without a preloaded answer
/// * `config` - The parameter schema
/// * `preloaded` - JSON object of answers keyed by parameter name, or `Null`
///
/// # Returns
/// * `Result<RenderContext>` - One entry per declared parameter
///
/// # Errors
/// * `Error::ValidationError` if a value breaks its parameter's rule
/// * `Error::InvalidParamError` if an enum parameter has no choices
/// * `Error::CollectionAborted` if the user cancels a prompt
pub fn get_answers(
    prompt: &dyn Prompter,
    config: &Config,
    preloaded: &serde_json::Value,
) -> Result<RenderContext> {
    if !config.description.is_empty() {
        prompt.describe(&config.description);
    }

    let mut context = RenderContext::new();

    for param in &config.params {
        let value = match preloaded_answer(preloaded, &param.name) {
            Some(value) => {
                debug!("Using preloaded answer for '{}'", param.name);
                check_answer(param, &value)?;
                value
            }
            None => prompt_param(prompt, param)?,
        };
        context.insert(param.name.clone(), value);
    }

    Ok(context)
}
