//! Tile size configuration and the grid arithmetic derived from it
//!
//! A [`GridConfig`] can only be built with positive dimensions, so every
//! division performed on it elsewhere in the crate is safe. The expected
//! tile extents returned here are the ground truth the partitioner's
//! structural check compares against: interior tiles are full size and the
//! last tile-row and tile-column absorb whatever remains of the image.

use crate::io::error::{ChartError, Result, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Pixel dimensions of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridConfig {
    tile_width: usize,
    tile_height: usize,
}

impl GridConfig {
    /// Create a tile configuration
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidGridConfig`] if either dimension is zero
    pub fn new(tile_width: usize, tile_height: usize) -> Result<Self> {
        if tile_width == 0 || tile_height == 0 {
            return Err(ChartError::InvalidGridConfig {
                tile_width: i64::try_from(tile_width).unwrap_or(i64::MAX),
                tile_height: i64::try_from(tile_height).unwrap_or(i64::MAX),
            });
        }

        Ok(Self {
            tile_width,
            tile_height,
        })
    }

    /// Create a tile configuration from signed dimensions
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidGridConfig`] if either dimension is not
    /// positive
    pub fn from_signed(tile_width: i64, tile_height: i64) -> Result<Self> {
        match (usize::try_from(tile_width), usize::try_from(tile_height)) {
            (Ok(width), Ok(height)) if width > 0 && height > 0 => Self::new(width, height),
            _ => Err(ChartError::InvalidGridConfig {
                tile_width,
                tile_height,
            }),
        }
    }

    /// Tile width in pixels
    pub const fn tile_width(&self) -> usize {
        self.tile_width
    }

    /// Tile height in pixels
    pub const fn tile_height(&self) -> usize {
        self.tile_height
    }

    /// Number of tile-rows covering `height` pixels
    pub const fn tile_rows(&self, height: usize) -> usize {
        height.div_ceil(self.tile_height)
    }

    /// Number of tile-columns covering `width` pixels
    pub const fn tile_cols(&self, width: usize) -> usize {
        width.div_ceil(self.tile_width)
    }

    /// Grid shape for an image as `(tile_rows, tile_cols)`
    pub const fn grid_dimensions(&self, width: usize, height: usize) -> (usize, usize) {
        (self.tile_rows(height), self.tile_cols(width))
    }

    /// Expected pixel height of tiles in `tile_row`, truncated on the last row
    pub const fn expected_tile_height(&self, tile_row: usize, height: usize) -> usize {
        let remaining = height.saturating_sub(tile_row.saturating_mul(self.tile_height));
        if remaining < self.tile_height {
            remaining
        } else {
            self.tile_height
        }
    }

    /// Expected pixel width of tiles in `tile_col`, truncated on the last column
    pub const fn expected_tile_width(&self, tile_col: usize, width: usize) -> usize {
        let remaining = width.saturating_sub(tile_col.saturating_mul(self.tile_width));
        if remaining < self.tile_width {
            remaining
        } else {
            self.tile_width
        }
    }
}

impl fmt::Display for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.tile_width, self.tile_height)
    }
}

impl FromStr for GridConfig {
    type Err = ChartError;

    /// Parse a `WxH` tile size such as `10x10`
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || invalid_parameter("grid", &s, &"expected WIDTHxHEIGHT, e.g. 10x10");

        let (width, height) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(malformed)?;

        let tile_width = width.trim().parse::<i64>().map_err(|_parse| malformed())?;
        let tile_height = height.trim().parse::<i64>().map_err(|_parse| malformed())?;

        Self::from_signed(tile_width, tile_height)
    }
}
