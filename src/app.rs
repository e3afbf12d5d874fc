// src/app.rs
use crate::config::CliConfig;
use crate::error::Result;
use crate::presentation;
use std::io::Write;

/// Scan every directory, then print the report to stdout.
///
/// Nothing is printed unless the whole scan succeeded.
///
/// # Errors
/// Returns the first engine error, or a failure to write the report.
pub fn run(config: &CliConfig) -> Result<()> {
    let table = charstat_engine::run(&config.engine)?;
    if table.is_empty() {
        log::info!("no characters counted");
    }
    log::debug!("{} distinct characters, {} total", table.len(), table.total());
    let report = table.into_report();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    presentation::write_report(&mut out, &report, config.format)?;
    out.flush()?;
    Ok(())
}
