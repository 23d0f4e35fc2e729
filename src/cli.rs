//! Command-line interface implementation for stamp.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::DEFAULT_OUTPUT_DIR;

/// Command-line arguments structure for stamp.
#[derive(Parser, Debug)]
#[command(author, version, about = "stamp: render custom templates", long_about = None)]
pub struct Args {
    /// Path to the template directory
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Directory where the template is rendered
    #[arg(value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Read answers from stdin as a JSON object instead of prompting
    #[arg(short, long)]
    pub stdin: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the template argument is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
