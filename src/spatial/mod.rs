//! Spatial data structures for images and tile grids
//!
//! This module contains:
//! - Alpha-stripped pixel colors and the flat image buffer
//! - Tile size configuration and grid arithmetic
//! - Tiles and the tile matrix

/// Tile size configuration and expected tile extents
pub mod grid;
/// Pixel colors and row-major image buffers
pub mod pixels;
/// Tile and tile matrix structures
pub mod tiles;

pub use grid::GridConfig;
pub use pixels::{ImageBuffer, PixelColor};
pub use tiles::{Tile, TileMatrix};
