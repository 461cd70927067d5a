use sqlprism::{Config, Mode, Result};
use std::io::{Read as _, Write as _};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
        .with_writer(std::io::stderr) // stdout carries only the rendered SQL
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Read SQL from stdin and write it back highlighted and/or formatted.
///
/// Usage: `sqlprism [highlight|format|pretty] < query.sql`
fn run() -> Result {
    let config = Config::load()?;
    let mode: Mode = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => config.mode()?,
    };
    info!(%mode, indent = config.indent, "starting");

    let mut sql = String::new();
    std::io::stdin().read_to_string(&mut sql)?;
    debug!(bytes = sql.len(), "read sql from stdin");

    let output = mode.apply(&sql, &config.format_options());

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    stdout.flush()?;
    Ok(())
}
