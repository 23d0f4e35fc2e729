//! User input and interaction handling.
//! The collector only talks to the [`Prompter`] trait; the terminal
//! implementation is backed by dialoguer.

use crate::error::{Error, Result};
use dialoguer::{Input, Select};

/// Validation callback for free-text input: `Err` carries the rejection reason.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// The interactive boundary used while collecting parameters.
pub trait Prompter {
    /// Shows the template description once, before any prompt.
    fn describe(&self, description: &str);

    /// Asks for a line of text. Input rejected by `validate` must not be
    /// returned.
    fn text(&self, prompt: &str, validate: Validator<'_>) -> Result<String>;

    /// Asks for one of `choices` and returns the selected choice verbatim.
    fn select(&self, prompt: &str, choices: &[String]) -> Result<String>;
}

/// Terminal prompter built on dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

/// Maps a terminal failure, treating an interrupted read as a cancellation.
fn interaction_error(err: dialoguer::Error) -> Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
            Error::CollectionAborted(e.to_string())
        }
        e => Error::PromptError(e.to_string()),
    }
}

impl Prompter for DialoguerPrompter {
    fn describe(&self, description: &str) {
        println!("\n{description}\n");
    }

    fn text(&self, prompt: &str, validate: Validator<'_>) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|input: &String| validate(input.as_str()))
            .interact_text()
            .map_err(interaction_error)
    }

    fn select(&self, prompt: &str, choices: &[String]) -> Result<String> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(choices)
            .default(0)
            .interact_opt()
            .map_err(interaction_error)?;

        match selection.and_then(|index| choices.get(index)) {
            Some(choice) => Ok(choice.clone()),
            None => Err(Error::CollectionAborted(format!("no choice selected for '{prompt}'"))),
        }
    }
}
