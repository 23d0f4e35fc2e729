//! A template instance: a source tree, a destination and the lifecycle
//! that takes it from an unresolved schema to a rendered tree.

use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    config::{load_config, Config},
    constants::CONFIG_FILE,
    context::RenderContext,
    error::Result,
    parser::get_answers,
    processor::{ensure_output_dir, Processor},
    prompt::Prompter,
    renderer::TemplateRenderer,
};

/// Lifecycle of a [`Template`].
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Unresolved,
    Resolved { config: Config, context: RenderContext },
    Rendered { config: Config, context: RenderContext },
}

/// Renders a template directory into a destination directory.
pub struct Template<'a> {
    engine: &'a dyn TemplateRenderer,
    prompt: &'a dyn Prompter,
    source_path: PathBuf,
    destination_path: PathBuf,
    config_file: String,
    answers: serde_json::Value,
    state: State,
}

impl<'a> Template<'a> {
    pub fn new<S: Into<PathBuf>, D: Into<PathBuf>>(
        engine: &'a dyn TemplateRenderer,
        prompt: &'a dyn Prompter,
        source_path: S,
        destination_path: D,
    ) -> Self {
        Self {
            engine,
            prompt,
            source_path: source_path.into(),
            destination_path: destination_path.into(),
            config_file: CONFIG_FILE.to_string(),
            answers: serde_json::Value::Null,
            state: State::Unresolved,
        }
    }

    /// Uses a config filename other than `.new.yml`.
    pub fn with_config_file<S: Into<String>>(mut self, config_file: S) -> Self {
        self.config_file = config_file.into();
        self
    }

    /// Supplies answers that are used instead of prompting.
    pub fn with_answers(mut self, answers: serde_json::Value) -> Self {
        self.answers = answers;
        self
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn destination_path(&self) -> &Path {
        &self.destination_path
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> Option<&Config> {
        match &self.state {
            State::Unresolved => None,
            State::Resolved { config, .. } | State::Rendered { config, .. } => Some(config),
        }
    }

    pub fn context(&self) -> Option<&RenderContext> {
        match &self.state {
            State::Unresolved => None,
            State::Resolved { context, .. } | State::Rendered { context, .. } => Some(context),
        }
    }

    /// Loads the config and collects its parameters.
    ///
    /// Every call reloads and re-collects. On failure the previous state is kept.
    pub fn resolve(&mut self) -> Result<()> {
        let config = load_config(&self.source_path, &self.config_file)?;
        let context = get_answers(self.prompt, &config, &self.answers)?;
        self.state = State::Resolved { config, context };
        Ok(())
    }

    /// Renders the template tree into the destination, resolving first if needed.
    ///
    /// Stops at the first failing entry; entries written before it stay on disk.
    pub fn render(&mut self) -> Result<()> {
        let (config, context) = self.take_resolved()?;

        let result = self.render_tree(&context);
        self.state = match result {
            Ok(()) => State::Rendered { config, context },
            Err(_) => State::Resolved { config, context },
        };
        result
    }

    /// Moves the resolved config and context out of the state, resolving
    /// first when there is nothing to take.
    fn take_resolved(&mut self) -> Result<(Config, RenderContext)> {
        match std::mem::replace(&mut self.state, State::Unresolved) {
            State::Resolved { config, context } | State::Rendered { config, context } => {
                Ok((config, context))
            }
            State::Unresolved => {
                self.resolve()?;
                self.take_resolved()
            }
        }
    }

    fn render_tree(&self, context: &RenderContext) -> Result<()> {
        ensure_output_dir(&self.destination_path)?;

        let processor = Processor::new(
            self.engine,
            context,
            &self.source_path,
            &self.destination_path,
            &self.config_file,
        );

        for entry in WalkDir::new(&self.source_path).sort_by_file_name() {
            let entry = entry?;
            if let Some(operation) = processor.process(&entry)? {
                println!("Rendering {}", operation.target().display());
                operation.apply()?;
            }
        }

        debug!("Rendered '{}' into '{}'", self.source_path.display(), self.destination_path.display());
        Ok(())
    }
}
