use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::time::{Duration, Instant};

use crate::cli::FetchExampleArgs;
use crate::common::{create_spinner, format_elapsed, setup_logging};
use crate::remote::{create_http_client, fetch_example_dataset};

/// Download the example table and save it verbatim; returns the number of bytes written
pub fn run_fetch_example(args: FetchExampleArgs) -> Result<usize> {
    let start_time = Instant::now();

    setup_logging(&args.log_level)?;

    let client = create_http_client(Duration::from_secs(args.timeout))
        .context("Failed to create HTTP client")?;

    let spinner = create_spinner("Downloading example data...");
    let rt = tokio::runtime::Runtime::new()?;
    let fetched = rt.block_on(fetch_example_dataset(&client, &args.url));
    spinner.finish_and_clear();
    let bytes = fetched?;

    fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to write example data: {}", args.output))?;

    info!(
        "Saved example data to {} ({} bytes) in {}",
        args.output,
        bytes.len(),
        format_elapsed(start_time.elapsed())
    );

    Ok(bytes.len())
}
