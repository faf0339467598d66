//! Inverse of partitioning: stitch tiles back into a flat pixel sequence

use crate::algorithm::partition::verify_structure;
use crate::io::error::Result;
use crate::spatial::{ImageBuffer, Tile, TileMatrix};

/// Rebuild the row-major image a tile matrix was partitioned from
///
/// For each tile-row, each pixel-row offset within that tile-row's height
/// is assembled by concatenating the matching row of every tile from left
/// to right.
///
/// The matrix shape is checked first, so a malformed partition is reported
/// as such rather than as a short pixel sequence.
///
/// # Errors
///
/// Returns [`crate::ChartError::DimensionMismatch`] if the matrix does not
/// have the shape its image size and tile configuration imply
pub fn reconstruct(matrix: &TileMatrix) -> Result<ImageBuffer> {
    verify_structure(matrix)?;

    let (width, height) = matrix.image_dimensions();
    let mut pixels = Vec::with_capacity(width.saturating_mul(height));

    for tile_row in matrix.rows() {
        let row_height = tile_row.first().map_or(0, Tile::height);

        for offset in 0..row_height {
            for tile in tile_row {
                if let Some(row) = tile.row(offset) {
                    pixels.extend_from_slice(row);
                }
            }
        }
    }

    ImageBuffer::new(width, height, pixels)
}
