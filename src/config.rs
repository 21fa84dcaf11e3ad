//! Run configuration.
//! Built from the command-line arguments; there are no config files.

use std::path::PathBuf;

use crate::cli::Args;

/// What to do when the project directory already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistingOutput {
    /// Abort before writing anything
    #[default]
    Fail,
    /// Rewrite every generated file in place and reuse existing directories.
    /// Files that are not part of the generated tree are left untouched.
    Overwrite,
}

impl ExistingOutput {
    pub fn from_force(force: bool) -> Self {
        if force {
            Self::Overwrite
        } else {
            Self::Fail
        }
    }
}

/// Settings of a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Raw project name, also the name of the project directory
    pub project_name: String,
    /// Directory the project directory is created in
    pub output_dir: PathBuf,
    pub existing_output: ExistingOutput,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            project_name: args.project_name,
            output_dir: args.output_dir,
            existing_output: ExistingOutput::from_force(args.force),
        }
    }
}
