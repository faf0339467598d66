//! Command-line interface for charting a single image

use crate::algorithm::pipeline::{ChartOptions, ChartRun, run};
use crate::io::chart::ChartSettings;
use crate::io::configuration::{DEFAULT_GRID, DEFAULT_SWATCH_SIZE, MAX_SWATCH_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::GridConfig;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tilechart")]
#[command(
    author,
    version,
    about = "Split an image into labelled tiles for cross-stitch and mosaic charts"
)]
/// Command-line arguments for the chart tool
pub struct Cli {
    /// Image file to chart
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Directory receiving output files
    #[arg(short, long, default_value = ".")]
    pub destination: PathBuf,

    /// Tile size in pixels as WIDTHxHEIGHT
    #[arg(short, long, default_value = DEFAULT_GRID)]
    pub grid: GridConfig,

    /// Write one CSV file per tile
    #[arg(short, long)]
    pub csv: bool,

    /// Partition and validate only, without writing any output
    #[arg(long)]
    pub validate_only: bool,

    /// Edge length of one pixel swatch in chart images
    #[arg(short, long, default_value_t = DEFAULT_SWATCH_SIZE, value_parser = parse_swatch_size)]
    pub swatch: u32,

    /// Logging verbosity (-v more, -q less)
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Cli {
    /// Log level selected by the verbosity flags
    pub fn log_level_filter(&self) -> LevelFilter {
        self.verbose.log_level_filter()
    }

    /// Check if progress should be displayed
    pub fn should_show_progress(&self) -> bool {
        self.log_level_filter() >= LevelFilter::Info
    }

    /// Run options derived from the arguments
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            config: self.grid,
            destination: self.destination.clone(),
            csv: self.csv,
            validate_only: self.validate_only,
            chart: ChartSettings {
                swatch_size: self.swatch,
                ..ChartSettings::default()
            },
            show_progress: self.should_show_progress(),
        }
    }
}

/// Parse a swatch edge length in `1..=MAX_SWATCH_SIZE`
///
/// # Errors
///
/// Returns [`crate::ChartError::InvalidParameter`] for non-numeric or out of
/// range values
pub fn parse_swatch_size(value: &str) -> Result<u32> {
    let out_of_range = || {
        invalid_parameter(
            "swatch",
            &value,
            &format!("expected a size from 1 to {MAX_SWATCH_SIZE}"),
        )
    };

    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|size| (1..=MAX_SWATCH_SIZE).contains(size))
        .ok_or_else(out_of_range)
}

/// Runs the pipeline for the image named on the command line
pub struct ChartProcessor {
    cli: Cli,
}

impl ChartProcessor {
    /// Create a processor for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Chart the image
    ///
    /// # Errors
    ///
    /// Returns an error if loading, partitioning, validation or any output fails
    pub fn process(&self) -> Result<ChartRun> {
        let options = self.cli.chart_options();
        log::debug!(
            "Charting '{}' with {} tiles into '{}'",
            self.cli.image.display(),
            options.config,
            options.destination.display()
        );

        let chart_run = run(&self.cli.image, &options)?;

        if options.validate_only {
            log::info!("Validation passed for '{}'", self.cli.image.display());
        } else {
            log::info!(
                "Wrote {} file(s) to '{}'",
                chart_run.outputs.len(),
                options.destination.display()
            );
        }

        Ok(chart_run)
    }
}
