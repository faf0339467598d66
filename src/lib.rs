//! Grid partitioning of raster images for cross-stitch and mosaic charts
//!
//! An image is split into rectangular tiles, each tile into individual pixel
//! cells. Colors are counted over the whole image and per tile, and the
//! partition is certified lossless by reconstructing the image from its
//! tiles and comparing it pixel-exact against the source.

#![forbid(unsafe_code)]

/// Partitioning, reconstruction, validation and run orchestration
pub mod algorithm;
/// Color frequency tables and deterministic labels
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Pixel, image and tile data structures
pub mod spatial;

pub use io::error::{ChartError, Result};
