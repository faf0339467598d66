//! CSV and plain-text report output for partitioned images

use crate::analysis::ColorReport;
use crate::io::configuration::{CSV_INFIX, REPORT_SUFFIX};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::spatial::{Tile, TileMatrix};
use std::path::{Path, PathBuf};

/// Append a suffix to an output prefix such as `out/photo`
pub fn output_path(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Output prefix for an image: `<destination>/<image stem>`
///
/// # Errors
///
/// Returns [`crate::ChartError::InvalidParameter`] if the image path has no
/// file stem to name outputs after
pub fn output_prefix(destination: &Path, image_path: &Path) -> Result<PathBuf> {
    image_path
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .map(|stem| destination.join(stem))
        .ok_or_else(|| {
            invalid_parameter(
                "image",
                &image_path.display(),
                &"path has no file name to name outputs after",
            )
        })
}

/// Render one tile as CSV, one line per pixel row with `"r, g, b"` cells
pub fn tile_csv(tile: &Tile) -> String {
    tile.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|color| format!("\"{color}\""))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `<prefix>_Grid-<label>.csv` for every tile
///
/// # Errors
///
/// Returns an error if the destination directory cannot be created or a
/// file cannot be written
pub fn write_tile_csvs(matrix: &TileMatrix, prefix: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(matrix.tile_count());

    for tile in matrix.tiles() {
        let path = output_path(prefix, &format!("{CSV_INFIX}{}.csv", tile.label()));
        write_text(&path, &tile_csv(tile))?;
        written.push(path);
    }

    log::info!("Wrote {} tile CSV file(s)", written.len());
    Ok(written)
}

/// Plain-text summary of a run: sizes, color legend and per-tile counts
pub fn summary_report(matrix: &TileMatrix, report: &ColorReport) -> String {
    let (width, height) = matrix.image_dimensions();
    let mut lines = vec![
        format!("Image size: {width}x{height}"),
        format!(
            "Grid: {} ({} tile rows x {} tile columns, {} tiles)",
            matrix.config(),
            matrix.tile_rows(),
            matrix.tile_cols(),
            matrix.tile_count()
        ),
        format!(
            "Colors: {} distinct, {} pixels",
            report.distinct_colors(),
            report.total_pixels()
        ),
        String::new(),
        "Color legend".to_string(),
    ];

    lines.extend(
        report
            .ranked_colors()
            .into_iter()
            .map(|(color, count, id)| format!("{id:<10} ({color})  {count}")),
    );

    lines.push(String::new());
    lines.push("Tiles".to_string());

    for tile_colors in report.tiles() {
        let (tile_row, tile_col) = tile_colors.position;
        let size = matrix
            .get(tile_row, tile_col)
            .map_or((0, 0), |tile| (tile.width(), tile.height()));
        let counts = tile_colors
            .table
            .iter()
            .map(|(color, count)| format!("{} x{count}", report.color_id(&color).unwrap_or("?")))
            .collect::<Vec<_>>()
            .join(", ");

        lines.push(format!(
            "{} ({}x{}): {counts}",
            tile_colors.label, size.0, size.1
        ));
    }

    lines.join("\n")
}

/// Write the summary report to `<prefix>_report.txt`
///
/// # Errors
///
/// Returns an error if the destination directory cannot be created or the
/// file cannot be written
pub fn write_summary_report(
    matrix: &TileMatrix,
    report: &ColorReport,
    prefix: &Path,
) -> Result<PathBuf> {
    let path = output_path(prefix, REPORT_SUFFIX);
    write_text(&path, &summary_report(matrix, report))?;
    log::info!("Wrote summary report to '{}'", path.display());
    Ok(path)
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    std::fs::write(path, contents).map_err(|e| file_system_error(path, "write", e))
}
