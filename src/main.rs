//! stamp's application entry point.
//! Parses arguments, then resolves and renders the requested template.

use stamp::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    parser::load_from_stdin,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    template::Template,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Reads preloaded answers when `--stdin` is set
/// 2. Loads the config and collects parameters
/// 3. Renders the template tree into the output directory
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();

    let answers = if args.stdin { load_from_stdin()? } else { serde_json::Value::Null };

    let mut template =
        Template::new(&engine, &prompt, args.template, args.output_dir).with_answers(answers);

    template.resolve()?;
    template.render()?;

    log::info!("Template rendered into {}", template.destination_path().display());
    Ok(())
}
