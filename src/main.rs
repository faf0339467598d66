//! CLI entry point for the tile chart generator

use clap::Parser;
use std::process::ExitCode;
use tilechart::io::cli::{ChartProcessor, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level_filter())
        .format_timestamp(None)
        .init();

    match ChartProcessor::new(cli).process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
