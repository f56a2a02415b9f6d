use anyhow::{Context, Result};
use log::info;
use polars::prelude::DataFrame;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::cli::FormatArgs;
use crate::common::{create_spinner, format_elapsed, setup_logging, FormatStats, OutputPaths};
use crate::format::{format, format_stats};
use crate::index::index_rows;
use crate::input::{load_table, load_workbook_bytes, preview, rows_from_frame};
use crate::remote::{create_http_client, fetch_example_dataset};

fn load_example(url: &str, timeout_secs: u64) -> Result<DataFrame> {
    let client = create_http_client(Duration::from_secs(timeout_secs))
        .context("Failed to create HTTP client")?;

    let spinner = create_spinner("Downloading example data...");
    let rt = tokio::runtime::Runtime::new()?;
    let fetched = rt.block_on(fetch_example_dataset(&client, url));
    spinner.finish_and_clear();

    load_workbook_bytes(fetched?)
}

pub fn run_format(args: FormatArgs) -> Result<FormatStats> {
    let start_time = Instant::now();

    setup_logging(&args.log_level)?;

    info!("Starting affiliation formatting");

    let df = match &args.input {
        Some(input) => {
            info!("Input: {}", input);
            load_table(Path::new(input))?
        }
        None => {
            info!("Using example data");
            load_example(&args.example_url, args.timeout)?
        }
    };

    info!("Loaded table with {} rows and {} columns", df.height(), df.width());

    if args.preview_rows > 0 {
        println!(
            "Preview of the input data (first {} rows)\n{}\n",
            args.preview_rows,
            preview(&df, args.preview_rows)
        );
    }

    let rows = rows_from_frame(&df)?;
    let (registry, entries) = index_rows(&rows)?;
    let output = format(&entries, &registry)?;
    let stats = format_stats(&entries, &registry);

    let paths = OutputPaths::from_base(&args.output);

    fs::write(&paths.plain, output.plain_text.as_bytes())
        .with_context(|| format!("Failed to write output file: {}", paths.plain.display()))?;

    if args.markup {
        fs::write(&paths.markup, output.display_markup.as_bytes())
            .with_context(|| format!("Failed to write markup file: {}", paths.markup.display()))?;
    }

    if let Some(stats_path) = &args.stats_json {
        let json = serde_json::to_string_pretty(&stats)?;
        fs::write(stats_path, json)
            .with_context(|| format!("Failed to write stats file: {}", stats_path))?;
    }

    println!("{}", output.display_markup);

    info!("==================== FINAL SUMMARY ====================");
    info!("Total execution time: {}", format_elapsed(start_time.elapsed()));
    info!("Authors: {}", stats.authors);
    info!("Distinct affiliations: {}", stats.affiliations);
    info!("Authors without affiliations: {}", stats.authors_without_affiliations);
    info!("Output file: {}", paths.plain.display());
    if args.markup {
        info!("Markup file: {}", paths.markup.display());
    }
    if let Some(stats_path) = &args.stats_json {
        info!("Stats file: {}", stats_path);
    }
    info!("========================================================");

    Ok(stats)
}
