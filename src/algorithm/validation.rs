//! Round-trip validation of a partition
//!
//! The tile matrix is stitched back into an image, written to a temporary
//! PNG, decoded again and compared pixel-by-pixel against the source. The
//! temporary file is owned by a guard and removed on every exit path, so a
//! failed comparison never leaves it behind.

use crate::algorithm::reconstruction::reconstruct;
use crate::io::configuration::VALIDATION_ARTIFACT_PREFIX;
use crate::io::error::{ChartError, Result, file_system_error};
use crate::io::image::{load_image, to_rgb_image};
use crate::spatial::{ImageBuffer, PixelColor, TileMatrix};
use image::ImageFormat;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A single differing pixel between two buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Flat row-major index
    pub index: usize,
    /// Color in the source buffer
    pub expected: PixelColor,
    /// Color in the compared buffer
    pub found: PixelColor,
}

/// Reconstructed image materialised as a temporary PNG
///
/// The file is deleted when the artifact is released or dropped.
pub struct ValidationArtifact {
    file: NamedTempFile,
}

impl ValidationArtifact {
    /// Write a buffer to a fresh temporary PNG
    ///
    /// Uses the system temporary directory unless `dir` is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created or the image
    /// cannot be encoded into it
    pub fn create(buffer: &ImageBuffer, dir: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        let builder = builder.prefix(VALIDATION_ARTIFACT_PREFIX).suffix(".png");

        let file = match dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|e| {
            file_system_error(
                dir.map_or_else(std::env::temp_dir, Path::to_path_buf),
                "create validation artifact",
                e,
            )
        })?;

        to_rgb_image(buffer)?
            .save_with_format(file.path(), ImageFormat::Png)
            .map_err(|e| ChartError::ImageExport {
                path: file.path().to_path_buf(),
                source: e,
            })?;

        Ok(Self { file })
    }

    /// Location of the temporary file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Decode the artifact back into a buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn load(&self) -> Result<ImageBuffer> {
        load_image(self.file.path())
    }

    /// Delete the temporary file, reporting failure
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::FileSystem`] if the file cannot be removed
    pub fn release(self) -> Result<()> {
        let path = self.file.path().to_path_buf();
        self.file
            .close()
            .map_err(|e| file_system_error(path, "remove validation artifact", e))
    }
}

/// Round-trip validator for tile matrices
#[derive(Debug, Clone, Default)]
pub struct Validator {
    artifact_dir: Option<PathBuf>,
}

impl Validator {
    /// Validator writing its artifact to the system temporary directory
    pub const fn new() -> Self {
        Self { artifact_dir: None }
    }

    /// Validator writing its artifact to a specific directory
    pub fn with_artifact_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            artifact_dir: Some(dir.into()),
        }
    }

    /// Reconstruct a matrix and compare it pixel-exact against the source
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::SizeMismatch`] or [`ChartError::PixelMismatch`]
    /// when the round trip is lossy, or an I/O-class error if the temporary
    /// artifact cannot be written, read or removed
    pub fn validate(&self, original: &ImageBuffer, matrix: &TileMatrix) -> Result<()> {
        let reconstructed = reconstruct(matrix)?;
        self.validate_reconstruction(original, &reconstructed)
    }

    /// Compare an already reconstructed buffer against the source via a temporary PNG
    ///
    /// An empty buffer has nothing to encode and is compared in memory.
    ///
    /// # Errors
    ///
    /// Same as [`Validator::validate`]
    pub fn validate_reconstruction(
        &self,
        original: &ImageBuffer,
        reconstructed: &ImageBuffer,
    ) -> Result<()> {
        if reconstructed.is_empty() {
            return compare_buffers(original, reconstructed);
        }

        let artifact = ValidationArtifact::create(reconstructed, self.artifact_dir.as_deref())?;
        log::debug!(
            "Wrote validation artifact to '{}'",
            artifact.path().display()
        );

        let outcome = artifact
            .load()
            .and_then(|restored| compare_buffers(original, &restored));
        let released = artifact.release();

        outcome?;
        released
    }
}

/// Reconstruct a matrix and validate it with the default validator
///
/// # Errors
///
/// Same as [`Validator::validate`]
pub fn validate(original: &ImageBuffer, matrix: &TileMatrix) -> Result<()> {
    Validator::new().validate(original, matrix)
}

/// Compare two buffers, failing on size first and then on the first differing pixel
///
/// Both buffers hold alpha-stripped colors, so alpha never takes part.
///
/// # Errors
///
/// Returns [`ChartError::SizeMismatch`] if the dimensions differ, otherwise
/// [`ChartError::PixelMismatch`] for the lowest differing index
pub fn compare_buffers(original: &ImageBuffer, candidate: &ImageBuffer) -> Result<()> {
    ensure_same_size(original, candidate)?;

    let first = original
        .pixels()
        .iter()
        .zip(candidate.pixels())
        .enumerate()
        .find(|(_, (expected, found))| expected != found);

    match first {
        Some((index, (&expected, &found))) => Err(ChartError::PixelMismatch {
            index,
            expected,
            found,
        }),
        None => Ok(()),
    }
}

/// Every differing pixel between two same-sized buffers
///
/// # Errors
///
/// Returns [`ChartError::SizeMismatch`] if the dimensions differ
pub fn collect_mismatches(original: &ImageBuffer, candidate: &ImageBuffer) -> Result<Vec<Mismatch>> {
    ensure_same_size(original, candidate)?;

    Ok(original
        .pixels()
        .iter()
        .zip(candidate.pixels())
        .enumerate()
        .filter(|(_, (expected, found))| expected != found)
        .map(|(index, (&expected, &found))| Mismatch {
            index,
            expected,
            found,
        })
        .collect())
}

fn ensure_same_size(original: &ImageBuffer, candidate: &ImageBuffer) -> Result<()> {
    if original.dimensions() == candidate.dimensions() {
        Ok(())
    } else {
        Err(ChartError::SizeMismatch {
            expected: original.dimensions(),
            found: candidate.dimensions(),
        })
    }
}
