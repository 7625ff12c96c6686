use std::fs::File;

use anyhow::{Context, Result};
use nu_ledger::bin_utils::{RowError, Service};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let filename = std::env::args()
        .nth(1)
        .context("Expected a file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| match err {
            RowError::Malformed(err) => error!(line, %err, "skipping malformed row"),
            // business rule rejections are already logged by the service
            RowError::Rejected(_) => {}
        }),
        receipt_printer: Box::new(|line, receipt| info!(line, "{receipt}")),
    };
    service.run()
}
