//! One complete run over a single image
//!
//! Load, partition, count colors, certify the partition by round trip and
//! then hand the results to whichever exporters were requested.

use crate::algorithm::partition::partition;
use crate::algorithm::validation::Validator;
use crate::analysis::{ColorReport, aggregate};
use crate::io::chart::{ChartSettings, write_chart};
use crate::io::error::Result;
use crate::io::export::{output_prefix, write_summary_report, write_tile_csvs};
use crate::io::image::load_image;
use crate::io::progress::ChartProgress;
use crate::spatial::{GridConfig, ImageBuffer, TileMatrix};
use std::path::{Path, PathBuf};

/// Options controlling a run
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Tile size
    pub config: GridConfig,
    /// Directory receiving output files
    pub destination: PathBuf,
    /// Write per-tile CSV files
    pub csv: bool,
    /// Stop after validation without writing anything
    pub validate_only: bool,
    /// Chart geometry
    pub chart: ChartSettings,
    /// Draw a progress bar while rendering charts
    pub show_progress: bool,
}

impl ChartOptions {
    /// Options for a tile size with every other setting at its default
    pub fn new(config: GridConfig, destination: impl Into<PathBuf>) -> Self {
        Self {
            config,
            destination: destination.into(),
            csv: false,
            validate_only: false,
            chart: ChartSettings::default(),
            show_progress: false,
        }
    }
}

/// Core output of partitioning one image
#[derive(Debug, Clone)]
pub struct ChartData {
    /// Alpha-stripped source image
    pub image: ImageBuffer,
    /// Partitioned tiles
    pub matrix: TileMatrix,
    /// Global and per-tile color counts with identifiers
    pub report: ColorReport,
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct ChartRun {
    /// Partition and color data
    pub data: ChartData,
    /// Files written, in the order they were written
    pub outputs: Vec<PathBuf>,
}

/// Partition, aggregate and validate an in-memory image
///
/// # Errors
///
/// Propagates partitioning and validation failures
pub fn chart_image(image: ImageBuffer, config: GridConfig, validator: &Validator) -> Result<ChartData> {
    let matrix = partition(&image, config)?;
    let report = aggregate(&matrix);
    validator.validate(&image, &matrix)?;

    log::info!(
        "Validated {}x{} image as {} tile(s) with {} color(s)",
        image.width(),
        image.height(),
        matrix.tile_count(),
        report.distinct_colors()
    );

    Ok(ChartData {
        image,
        matrix,
        report,
    })
}

/// Run the full pipeline on an image file
///
/// # Errors
///
/// Returns an error if the image cannot be loaded, the partition fails its
/// structural or round-trip checks, or an output cannot be written
pub fn run(image_path: &Path, options: &ChartOptions) -> Result<ChartRun> {
    let image = load_image(image_path)?;
    let data = chart_image(image, options.config, &Validator::new())?;

    if options.validate_only {
        return Ok(ChartRun {
            data,
            outputs: Vec::new(),
        });
    }

    let prefix = output_prefix(&options.destination, image_path)?;
    let mut outputs = Vec::new();

    if options.csv {
        outputs.extend(write_tile_csvs(&data.matrix, &prefix)?);
    }

    outputs.push(write_summary_report(&data.matrix, &data.report, &prefix)?);

    let progress = ChartProgress::for_tiles(data.matrix.tile_count(), options.show_progress);
    outputs.extend(write_chart(&data.matrix, &prefix, &options.chart, &progress)?);
    progress.finish();

    Ok(ChartRun { data, outputs })
}
