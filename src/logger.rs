//! Logger setup for the command-line shell.

/// Initializes `env_logger`, at `Debug` when `verbose` is set and `Info` otherwise.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .format_timestamp(None)
        .init();
}
