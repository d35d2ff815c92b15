//! Diagnostic logging to stderr.
//!
//! Filter comes from `PASSGEN_LOG` (same syntax as `RUST_LOG`). Passwords
//! are never logged.

use tracing_subscriber::EnvFilter;

pub const ENV_VAR: &str = "PASSGEN_LOG";

pub fn init(quiet: bool) {
    let default = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    // Already installed: keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(crate::cli::quiet::stderr_is_tty())
        .try_init();
}
