//! Error handling for hexscaffold.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a generation run.
///
/// Every filesystem failure aborts the run immediately. Files and directories
/// written before the failure are left on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A directory on the way to a generated file could not be created
    #[error("Failed to create directory '{}': {source}.", path.display())]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A generated file could not be written
    #[error("Failed to write file '{}': {source}.", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The target project directory already exists and overwriting was not requested
    #[error("Output directory: '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },

    /// Represents errors that occur while rendering an embedded template
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
