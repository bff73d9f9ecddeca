//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_records` library that handles:
//! - Command-line argument parsing
//! - Logger and color initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_records::app::run_interactive;
use domain_records::initialization::{init_color_output, init_logger_with, init_resolve_context};
use domain_records::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;
    init_color_output(config.no_color);

    let ctx = match init_resolve_context(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("domain_records error: {e:#}");
            process::exit(1);
        }
    };

    match run_interactive(&config, ctx).await {
        Ok(report) => {
            log::info!(
                "Session finished: {} batch(es), {} domain(s), {} record(s), {} file(s) saved",
                report.batches,
                report.domains,
                report.records,
                report.exported
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_records error: {e:#}");
            process::exit(1);
        }
    }
}
