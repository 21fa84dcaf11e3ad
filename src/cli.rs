//! Command-line interface implementation for hexscaffold.
//! Provides argument parsing and help text formatting using clap.

use clap::{builder::NonEmptyStringValueParser, Parser};
use std::path::PathBuf;

use crate::constants::DEFAULT_PROJECT_NAME;

/// Command-line arguments structure for hexscaffold.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generates a multi-module reactive Spring Boot project with a hexagonal layout",
    long_about = None
)]
pub struct Args {
    /// Name of the microservice, also the name of the generated directory
    #[arg(
        value_name = "PROJECT_NAME",
        default_value = DEFAULT_PROJECT_NAME,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub project_name: String,

    /// Directory where the project directory will be created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Overwrite the generated files if the project directory already exists
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
