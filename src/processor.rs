//! Per-entry processing of the template tree: destination path
//! resolution and the operation each entry turns into.

use log::debug;
use std::fs;
use std::path::{is_separator, Path, PathBuf};
use walkdir::DirEntry;

use crate::{
    context::RenderContext,
    error::{Error, Result},
    renderer::TemplateRenderer,
};

/// What to do on the destination side for one template entry.
#[derive(Debug, PartialEq)]
pub enum FileOperation {
    /// Create a directory, recursively
    CreateDir { target: PathBuf },
    /// Write rendered content, replacing any existing file
    Write { target: PathBuf, content: String },
    /// Copy a file that is not UTF-8 text byte for byte, replacing any existing file
    Copy { source: PathBuf, target: PathBuf },
}

impl FileOperation {
    pub fn target(&self) -> &Path {
        match self {
            FileOperation::CreateDir { target }
            | FileOperation::Write { target, .. }
            | FileOperation::Copy { target, .. } => target,
        }
    }

    /// Applies the operation to the filesystem.
    pub fn apply(&self) -> Result<()> {
        match self {
            FileOperation::CreateDir { target } => create_dir_all(target),
            FileOperation::Write { target, content } => write_file(target, content),
            FileOperation::Copy { source, target } => copy_file(source, target),
        }
    }
}

/// Computes the destination path of a (rendered) template path.
///
/// The first occurrence of `source_root` is removed from `template_path`,
/// one leading separator is stripped and the remainder is joined onto
/// `destination_root`. `template_path` must be `source_root` or lie below it.
pub fn resolve_target_path<P: AsRef<Path>>(
    source_root: &str,
    destination_root: P,
    template_path: &str,
) -> PathBuf {
    let relative = template_path.replacen(source_root, "", 1);
    let relative = match relative.chars().next() {
        Some(c) if is_separator(c) => &relative[c.len_utf8()..],
        _ => relative.as_str(),
    };

    if relative.is_empty() {
        destination_root.as_ref().to_path_buf()
    } else {
        destination_root.as_ref().join(relative)
    }
}

/// Ensures the destination root exists. An existing directory is fine.
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    create_dir_all(output_dir.as_ref())
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::filesystem(path, e))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(|e| Error::filesystem(path, e))
}

fn copy_file(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        create_dir_all(parent)?;
    }
    fs::copy(source, target).map(|_| ()).map_err(|e| Error::filesystem(target, e))
}

fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::InvalidPath { path: path.display().to_string() })
}

/// Turns template entries into destination operations.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    context: &'a RenderContext,
    template_root: &'a Path,
    output_root: &'a Path,
    config_file: &'a str,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        context: &'a RenderContext,
        template_root: &'a Path,
        output_root: &'a Path,
        config_file: &'a str,
    ) -> Self {
        Self { engine, context, template_root, output_root, config_file }
    }

    /// Whether an entry is left out of the destination tree: the template
    /// root itself and the config file at any depth.
    pub fn is_skipped(&self, entry: &DirEntry) -> bool {
        entry.depth() == 0 || entry.file_name() == self.config_file
    }

    /// Processes a single walked entry.
    ///
    /// The entry path below the template root is rendered as a filename
    /// template and joined back onto the root before its destination is
    /// resolved, so markers in the root's own path are left alone. File
    /// content that is not valid UTF-8 is copied unrendered.
    ///
    /// # Returns
    /// * `Ok(None)` for skipped entries
    /// * `Ok(Some(operation))` otherwise; nothing is written yet
    ///
    /// # Errors
    /// * Templating errors from the filename or the content
    /// * `Error::FilesystemError` if the source file cannot be read
    pub fn process(&self, entry: &DirEntry) -> Result<Option<FileOperation>> {
        if self.is_skipped(entry) {
            debug!("Skipping '{}'", entry.path().display());
            return Ok(None);
        }

        let template_root = path_to_str(self.template_root)?;
        let source = path_to_str(entry.path())?;
        let relative = entry.path().strip_prefix(self.template_root).unwrap_or(entry.path());

        let filename = self.engine.render(source, path_to_str(relative)?, self.context)?;
        let filename = self.template_root.join(filename);
        let filename = path_to_str(&filename)?;
        debug!("Rendered filename '{source}' as '{filename}'");

        let target = resolve_target_path(template_root, self.output_root, filename);

        if entry.file_type().is_dir() {
            return Ok(Some(FileOperation::CreateDir { target }));
        }

        let bytes = fs::read(entry.path()).map_err(|e| Error::filesystem(source, e))?;
        let template = match String::from_utf8(bytes) {
            Ok(template) => template,
            Err(_) => {
                debug!("Copying '{source}' verbatim, content is not UTF-8");
                return Ok(Some(FileOperation::Copy { source: entry.path().to_path_buf(), target }));
            }
        };
        let content = self.engine.render(source, &template, self.context)?;

        Ok(Some(FileOperation::Write { target, content }))
    }
}
