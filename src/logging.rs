//! Diagnostic tracing setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit tracing filter directive.
pub const LOG_ENV: &str = "PDFRELINK_LOG";

/// Default filter directive for the given verbosity.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "pdfrelink=debug"
    } else {
        "pdfrelink=warn"
    }
}

/// Initialize tracing to stderr.
///
/// `PDFRELINK_LOG` wins over `verbose` when set. Calling this more than once
/// is harmless; later calls leave the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
