use std::io::Write;

use anyhow::Context;
use clap::Parser;

pub mod cli;
pub mod commands;
pub mod error;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate.
///
/// Malformed arguments never reach this function's error path: clap prints
/// its usage diagnostic and exits the process itself.
pub fn run() -> Result<()> {
    init_tracing();

    let args = cli::Args::parse();
    let stdout = std::io::stdout();
    run_with(&args, &mut stdout.lock())
}

/// Builds the greeting for `args` and writes it, newline-terminated, to `out`.
pub fn run_with<W: Write>(args: &cli::Args, out: &mut W) -> Result<()> {
    let message = commands::execute(args).context("failed to execute command")?;
    writeln!(out, "{message}").context("failed to write greeting")?;
    out.flush().context("failed to flush output")
}

/// Filter used when `RUST_LOG` is unset. The crate only emits `debug`
/// events, so a plain run writes nothing besides the greeting.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the stderr `fmt` subscriber once per process; stdout stays
/// reserved for the greeting line.
fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
