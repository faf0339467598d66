//! Error types for partitioning, validation and chart output

use crate::spatial::PixelColor;
use std::fmt;
use std::path::PathBuf;

/// A single structural inconsistency found in a tile matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionViolation {
    /// Wrong number of tile-rows
    TileRowCount {
        /// `ceil(height / tile_height)`
        expected: usize,
        /// Tile-rows present
        found: usize,
    },

    /// Wrong number of tiles in a tile-row
    TileColumnCount {
        /// Tile-row being checked
        tile_row: usize,
        /// `ceil(width / tile_width)`
        expected: usize,
        /// Tiles present in the row
        found: usize,
    },

    /// Wrong number of pixel rows in a tile
    PixelRowCount {
        /// Tile-row of the tile
        tile_row: usize,
        /// Tile-column of the tile
        tile_col: usize,
        /// Expected (possibly truncated) tile height
        expected: usize,
        /// Pixel rows present
        found: usize,
    },

    /// Wrong number of pixels in one pixel row of a tile
    PixelRowLength {
        /// Tile-row of the tile
        tile_row: usize,
        /// Tile-column of the tile
        tile_col: usize,
        /// Offset of the pixel row within the tile
        pixel_row: usize,
        /// Expected (possibly truncated) tile width
        expected: usize,
        /// Pixels present in the row
        found: usize,
    },
}

impl fmt::Display for DimensionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileRowCount { expected, found } => {
                write!(f, "Expected {expected} tile row(s), found {found}")
            }
            Self::TileColumnCount {
                tile_row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "(Tile row={tile_row}) Expected {expected} tile(s), found {found}"
                )
            }
            Self::PixelRowCount {
                tile_row,
                tile_col,
                expected,
                found,
            } => {
                write!(
                    f,
                    "(Tile row={tile_row}, Tile col={tile_col}) Expected {expected} pixel row(s), found {found}"
                )
            }
            Self::PixelRowLength {
                tile_row,
                tile_col,
                pixel_row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "(Tile row={tile_row}, Tile col={tile_col}, Pixel row={pixel_row}) Expected {expected} pixel(s), found {found}"
                )
            }
        }
    }
}

/// Main error type for all chart operations
#[derive(Debug)]
pub enum ChartError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Source pixel data has the wrong shape
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile dimensions must both be positive
    InvalidGridConfig {
        /// Requested tile width
        tile_width: i64,
        /// Requested tile height
        tile_height: i64,
    },

    /// The partitioned tile matrix does not have the expected shape
    ///
    /// Carries every violation found, not just the first.
    DimensionMismatch {
        /// All structural inconsistencies
        violations: Vec<DimensionViolation>,
    },

    /// Reconstructed image size differs from the source size
    SizeMismatch {
        /// Source `(width, height)`
        expected: (usize, usize),
        /// Reconstructed `(width, height)`
        found: (usize, usize),
    },

    /// Reconstructed pixel differs from the source pixel
    PixelMismatch {
        /// Flat row-major index of the first difference
        index: usize,
        /// Source color
        expected: PixelColor,
        /// Reconstructed color
        found: PixelColor,
    },

    /// Internal index arithmetic produced an impossible position
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidGridConfig {
                tile_width,
                tile_height,
            } => {
                write!(
                    f,
                    "Invalid grid size {tile_width}x{tile_height}: tile width and height must be positive"
                )
            }
            Self::DimensionMismatch { violations } => {
                write!(
                    f,
                    "Tile matrix has {} structural violation(s):",
                    violations.len()
                )?;
                for violation in violations {
                    write!(f, "\n  - {violation}")?;
                }
                Ok(())
            }
            Self::SizeMismatch { expected, found } => {
                write!(
                    f,
                    "Image size mismatch: expected {}x{}, reconstructed {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::PixelMismatch {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Pixel mismatch at index {index}: expected ({expected}), reconstructed ({found})"
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for chart results
pub type Result<T> = std::result::Result<T, ChartError>;

impl From<image::ImageError> for ChartError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ChartError {
    ChartError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> ChartError {
    ChartError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a file system error with path and operation context
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> ChartError {
    ChartError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
