use std::process::ExitCode;

use clap::Parser;

use cctool::args::Args;
use cctool::commands;
use cctool::config;
use cctool::error::AppResult;

fn init_logging() -> AppResult<()> {
    /* Try to provide reasonable default filters, when RUST_LOG is not specified */
    const DEFAULT_LOG_FILTERS: &[&str] = &["info"];

    let log_filters = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTERS.join(","));

    Ok(pretty_env_logger::formatted_builder()
        .parse_filters(&log_filters)
        .try_init()?)
}

fn run() -> AppResult<()> {
    let args = Args::parse();

    init_logging()?;

    let config = config::parse(&args.config)?;
    log::debug!("Configuration loaded successfully");

    let mut out = std::io::stdout().lock();
    commands::execute(&mut out, &config, args.command)
}

fn main() -> ExitCode {
    if let Err(err) = run() {
        log::error!("cctool error: {err}");
        log::error!("Fatal error encountered, cannot continue.");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
