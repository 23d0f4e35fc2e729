#![allow(dead_code)]

use stamp::error::{Error, Result};
use stamp::prompt::{Prompter, Validator};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

/// Prompter that replays scripted answers in order.
///
/// A text answer rejected by the validator is dropped and the next one is
/// tried, like a user being asked again. Running out of answers aborts.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    pub prompts: RefCell<Vec<String>>,
    pub descriptions: RefCell<Vec<String>>,
    pub rejections: RefCell<Vec<String>>,
    skip_validation: bool,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            ..Default::default()
        }
    }

    /// Returns answers without consulting the validator.
    pub fn unvalidated(answers: &[&str]) -> Self {
        Self { skip_validation: true, ..Self::new(answers) }
    }

    fn next_answer(&self, prompt: &str) -> Result<String> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::CollectionAborted(format!("no answer left for '{prompt}'")))
    }
}

impl Prompter for ScriptedPrompter {
    fn describe(&self, description: &str) {
        self.descriptions.borrow_mut().push(description.to_string());
    }

    fn text(&self, prompt: &str, validate: Validator<'_>) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        loop {
            let answer = self.next_answer(prompt)?;
            if self.skip_validation {
                return Ok(answer);
            }
            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => self.rejections.borrow_mut().push(reason),
            }
        }
    }

    fn select(&self, prompt: &str, _choices: &[String]) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.next_answer(prompt)
    }
}

pub const WIDGET_CONFIG: &str = r#"
version: "1"
description: Widget project
params:
  - name: project
    required: true
    prompt: Project name
  - name: license
    kind: enum
    prompt: License
    enum: ["MIT", "Apache-2.0"]
"#;

/// Writes `content` at `root/relative`, creating parent directories.
pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

pub fn read(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative)).unwrap()
}
