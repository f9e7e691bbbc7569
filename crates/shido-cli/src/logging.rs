//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,shido_classifier=debug,shido_cli=debug",
        _ => "debug",
    }
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence over the `-v` count. Stdout is left to
/// command output so JSON stays machine-readable.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
