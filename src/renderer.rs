//! Template rendering for stamp.
//! One engine renders both entry paths and file contents, so a reference
//! resolves the same way in a filename and inside a file.
use crate::context::RenderContext;
use crate::error::{Error, Result};
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `name` - Name reported in errors, usually the source entry path
    /// * `template` - Template string to render
    /// * `context` - Resolved parameters
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, name: &str, template: &str, context: &RenderContext) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that fails on undefined keys, keeps trailing
    /// newlines and never escapes output.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

/// Sorts a MiniJinja failure into parse, reference and execution errors.
fn classify_error(template: &str, source: minijinja::Error) -> Error {
    let template = template.to_string();
    match source.kind() {
        ErrorKind::SyntaxError | ErrorKind::BadEscape => {
            Error::TemplateParseError { template, source }
        }
        ErrorKind::UndefinedError => Error::UnresolvedReference { template, source },
        _ => Error::TemplateExecError { template, source },
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::TemplateParseError` if the template is not valid syntax
    /// * `Error::UnresolvedReference` if it references an unknown key
    /// * `Error::TemplateExecError` for any other failure while rendering
    fn render(&self, name: &str, template: &str, context: &RenderContext) -> Result<String> {
        self.env
            .render_named_str(name, template, context)
            .map_err(|e| classify_error(name, e))
    }
}
