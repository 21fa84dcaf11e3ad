//! hexscaffold's application entry point.
//! Parses the command line and hands a single project name to the materializer.

use hexscaffold::{
    catalog::catalog,
    cli::get_args,
    config::Config,
    error::{default_error_handler, Error, Result},
    fs::LocalFileSystem,
    identity::ProjectIdentity,
    logger::init_logger,
    materializer::Materializer,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(Config::from(args)) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Derives the project identity from the project name
/// 2. Writes every module, then the root files
/// 3. Reports each written file and the absolute project path
fn run(config: Config) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let fs = LocalFileSystem;
    let identity = ProjectIdentity::derive(config.project_name);

    let materializer = Materializer::new(&renderer, &fs, config.existing_output);
    let result = materializer.materialize(&identity, catalog(), &config.output_dir)?;

    for file in &result.files {
        println!("Created: '{}'", file.display());
    }

    let root_path = std::fs::canonicalize(&result.root_path).map_err(Error::IoError)?;
    println!("Project created successfully in {}.", root_path.display());
    Ok(())
}
