//! Logging initialization.
//!
//! Structured logging via `tracing` to stderr, with the verbosity ladder
//! driven by repeated `-v` flags and an environment override through
//! `MPI_GLOSSARY_LOG_LEVEL`. Log output never mixes with the emitted
//! markup, which goes to stdout.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes the global tracing subscriber.
///
/// `MPI_GLOSSARY_LOG_LEVEL` takes precedence over `verbosity` when set.
/// Targets are shown from `-vv` upwards. Uses `try_init()` so repeated
/// calls (e.g. in tests) are safe.
pub fn init_logging(verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env("MPI_GLOSSARY_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let use_ansi = match color {
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
