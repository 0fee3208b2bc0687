use tracing_subscriber::{EnvFilter, fmt};

/// Diagnostics go to stderr so they never mix with the interactive output.
///
/// The level comes from `BIKESHARE_LOG`, then `RUST_LOG`, and defaults to
/// "warn".
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("BIKESHARE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (e.g. run() called twice in one process) is not an error
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
