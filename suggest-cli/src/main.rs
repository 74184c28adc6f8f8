//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::error::Error;

use suggest_cli::CliError;
use tracing_subscriber::EnvFilter;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    if let Err(err) = init_logging() {
        eprintln!("suggest: failed to initialise logging: {err}");
    }
    match suggest_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("suggest: {err}");
            std::process::exit(1);
        }
    }
}

/// Route `log` records to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() -> Result<(), Box<dyn Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
}
