//! Tiles and the two-level tile matrix produced by partitioning
//!
//! A [`TileMatrix`] is ragged by construction: rows of tiles, each tile a
//! list of pixel rows. Nothing here enforces the expected shape; that is
//! the job of the partitioner's structural check, which needs to be able to
//! inspect malformed matrices and report every inconsistency it finds.

use crate::analysis::labels::tile_label;
use crate::spatial::grid::GridConfig;
use crate::spatial::pixels::PixelColor;

/// A rectangular block of pixel cells at a fixed grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    tile_row: usize,
    tile_col: usize,
    pub(crate) rows: Vec<Vec<PixelColor>>,
}

impl Tile {
    /// Create an empty tile at a grid position
    pub const fn new(tile_row: usize, tile_col: usize) -> Self {
        Self {
            tile_row,
            tile_col,
            rows: Vec::new(),
        }
    }

    /// Create a tile from explicit pixel rows
    pub const fn from_rows(tile_row: usize, tile_col: usize, rows: Vec<Vec<PixelColor>>) -> Self {
        Self {
            tile_row,
            tile_col,
            rows,
        }
    }

    /// Zero-based tile-row index
    pub const fn tile_row(&self) -> usize {
        self.tile_row
    }

    /// Zero-based tile-column index
    pub const fn tile_col(&self) -> usize {
        self.tile_col
    }

    /// Grid position as `(tile_row, tile_col)`
    pub const fn position(&self) -> (usize, usize) {
        (self.tile_row, self.tile_col)
    }

    /// Spreadsheet-style label such as `B3`
    pub fn label(&self) -> String {
        tile_label(self.tile_row, self.tile_col)
    }

    /// Pixel rows, top to bottom
    pub fn rows(&self) -> &[Vec<PixelColor>] {
        &self.rows
    }

    /// Pixel row at an offset within the tile
    pub fn row(&self, pixel_row: usize) -> Option<&[PixelColor]> {
        self.rows.get(pixel_row).map(Vec::as_slice)
    }

    /// Number of pixel rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first pixel row (zero for an empty tile)
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Pixels in traversal order: rows top to bottom, left to right within a row
    pub fn pixels(&self) -> impl Iterator<Item = PixelColor> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Total number of pixel cells
    pub fn pixel_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// The full arrangement of tiles covering one image
///
/// Records the source image size and tile configuration so the partition
/// can be inverted without the original buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMatrix {
    rows: Vec<Vec<Tile>>,
    width: usize,
    height: usize,
    config: GridConfig,
}

impl TileMatrix {
    /// Assemble a matrix from tile rows without checking its shape
    pub const fn from_rows(
        rows: Vec<Vec<Tile>>,
        width: usize,
        height: usize,
        config: GridConfig,
    ) -> Self {
        Self {
            rows,
            width,
            height,
            config,
        }
    }

    /// Tile rows, top to bottom
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// Tile at a grid position
    pub fn get(&self, tile_row: usize, tile_col: usize) -> Option<&Tile> {
        self.rows.get(tile_row).and_then(|row| row.get(tile_col))
    }

    /// All tiles in traversal order: tile-rows top to bottom, left to right within a row
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.rows.iter().flatten()
    }

    /// Number of tile-rows
    pub fn tile_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of tiles in the first tile-row
    pub fn tile_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Total number of tiles
    pub fn tile_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Source image width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Source image height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Source image size as `(width, height)`
    pub const fn image_dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Tile configuration used to build the matrix
    pub const fn config(&self) -> GridConfig {
        self.config
    }
}
