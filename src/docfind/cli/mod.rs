pub mod browse;
pub mod commands;
pub mod render;
pub mod setup;

use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "DOCFIND_LOG";

/// Sends logs to stderr. `DOCFIND_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("docfind={}", default_level)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

/// Plain output when stdout is piped.
pub fn init_output() {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}
