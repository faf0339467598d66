//! Partitioning of a flat image into a two-level tile matrix
//!
//! Every pixel's destination is computed directly from its flat index:
//!
//! ```text
//! source_row = i / width          source_col = i % width
//! tile_row   = source_row / th    within_row = source_row % th
//! tile_col   = source_col / tw    within_col = source_col % tw
//! ```
//!
//! No running row/column counters are kept, so there is no state that can
//! drift between iterations. After the single pass, the matrix is checked
//! against the shape implied by the image size and tile configuration, and
//! all inconsistencies are reported together.

use crate::io::error::{ChartError, DimensionViolation, Result, computation_error};
use crate::spatial::{GridConfig, ImageBuffer, Tile, TileMatrix};

/// Split an image into tiles of the configured size
///
/// Tiles in the last tile-row and last tile-column are truncated to whatever
/// remains of the image; both axes are handled independently.
///
/// # Errors
///
/// Returns [`ChartError::DimensionMismatch`] if the built matrix fails the
/// structural check, or [`ChartError::Computation`] if a pixel would land
/// outside its tile
pub fn partition(image: &ImageBuffer, config: GridConfig) -> Result<TileMatrix> {
    let (width, height) = image.dimensions();
    let (tile_width, tile_height) = (config.tile_width(), config.tile_height());
    let (tile_rows, tile_cols) = config.grid_dimensions(width, height);

    let mut rows: Vec<Vec<Tile>> = (0..tile_rows)
        .map(|tile_row| {
            (0..tile_cols)
                .map(|tile_col| Tile::new(tile_row, tile_col))
                .collect()
        })
        .collect();

    for (index, &color) in image.pixels().iter().enumerate() {
        let (source_row, source_col) = (index / width, index % width);
        let (tile_row, within_row) = (source_row / tile_height, source_row % tile_height);
        let (tile_col, within_col) = (source_col / tile_width, source_col % tile_width);

        let tile = rows
            .get_mut(tile_row)
            .and_then(|row| row.get_mut(tile_col))
            .ok_or_else(|| {
                computation_error(
                    "partition",
                    &format!("pixel {index} maps to missing tile ({tile_row}, {tile_col})"),
                )
            })?;

        // Pixel rows of a tile are opened in order as the scan reaches them
        if tile.rows.len() == within_row {
            tile.rows
                .push(Vec::with_capacity(config.expected_tile_width(tile_col, width)));
        }

        let pixel_row = tile.rows.get_mut(within_row).ok_or_else(|| {
            computation_error(
                "partition",
                &format!("pixel {index} skips to row {within_row} of tile ({tile_row}, {tile_col})"),
            )
        })?;

        if pixel_row.len() != within_col {
            return Err(computation_error(
                "partition",
                &format!(
                    "pixel {index} expected at column {within_col} of tile ({tile_row}, {tile_col}), row already holds {}",
                    pixel_row.len()
                ),
            ));
        }

        pixel_row.push(color);
    }

    let matrix = TileMatrix::from_rows(rows, width, height, config);
    verify_structure(&matrix)?;

    log::debug!(
        "Partitioned {width}x{height} image into {tile_rows}x{tile_cols} tile(s) of {config}"
    );

    Ok(matrix)
}

/// List every way a matrix deviates from the shape its image size implies
pub fn find_violations(matrix: &TileMatrix) -> Vec<DimensionViolation> {
    let config = matrix.config();
    let (width, height) = matrix.image_dimensions();
    let (expected_rows, expected_cols) = config.grid_dimensions(width, height);
    let mut violations = Vec::new();

    if matrix.tile_rows() != expected_rows {
        violations.push(DimensionViolation::TileRowCount {
            expected: expected_rows,
            found: matrix.tile_rows(),
        });
    }

    for (tile_row, row) in matrix.rows().iter().enumerate() {
        if row.len() != expected_cols {
            violations.push(DimensionViolation::TileColumnCount {
                tile_row,
                expected: expected_cols,
                found: row.len(),
            });
        }

        let expected_height = config.expected_tile_height(tile_row, height);

        for (tile_col, tile) in row.iter().enumerate() {
            if tile.height() != expected_height {
                violations.push(DimensionViolation::PixelRowCount {
                    tile_row,
                    tile_col,
                    expected: expected_height,
                    found: tile.height(),
                });
            }

            let expected_width = config.expected_tile_width(tile_col, width);

            for (pixel_row, pixels) in tile.rows().iter().enumerate() {
                if pixels.len() != expected_width {
                    violations.push(DimensionViolation::PixelRowLength {
                        tile_row,
                        tile_col,
                        pixel_row,
                        expected: expected_width,
                        found: pixels.len(),
                    });
                }
            }
        }
    }

    violations
}

/// Check a matrix's shape, reporting all violations at once
///
/// # Errors
///
/// Returns [`ChartError::DimensionMismatch`] carrying every violation found
pub fn verify_structure(matrix: &TileMatrix) -> Result<()> {
    let violations = find_violations(matrix);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ChartError::DimensionMismatch { violations })
    }
}
