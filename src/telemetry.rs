use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise the level follows `-q` / `-v` / `-vv`.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    }
}

pub fn init(verbose: u8, quiet: bool) -> Result<(), ParseError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level_for(verbose, quiet))?,
    };

    // fails only when a global subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
    Ok(())
}
