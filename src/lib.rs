//! hexscaffold generates the skeleton of a multi-module reactive Spring Boot
//! service laid out in hexagonal style, from a single project name.

/// The fixed set of modules of a generated project
pub mod catalog;

/// Command-line interface module for the hexscaffold application
pub mod cli;

/// Run configuration derived from the command line
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the hexscaffold application
pub mod error;

/// Filesystem capability used when writing the tree
pub mod fs;

/// Names and packages derived from the project name
pub mod identity;

/// Logger initialization
pub mod logger;

/// Writes the generated project to disk
pub mod materializer;

/// Template rendering engine
pub mod renderer;

/// Content of every generated file
pub mod templates;
