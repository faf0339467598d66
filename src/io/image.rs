//! Image decoding and encoding at the crate boundary

use crate::io::error::{ChartError, Result, computation_error, file_system_error};
use crate::spatial::ImageBuffer;
use image::RgbImage;
use std::path::Path;

/// Decode an image file into an alpha-stripped buffer
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded pixel data cannot be converted
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageBuffer> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| ChartError::ImageLoad {
        path: path_buf.clone(),
        source: e,
    })?;

    let buffer = ImageBuffer::from_dynamic_image(&img)?;
    log::debug!(
        "Loaded {}x{} image from '{}' ({:?})",
        buffer.width(),
        buffer.height(),
        path_buf.display(),
        img.color()
    );

    Ok(buffer)
}

/// Convert a buffer into an 8-bit RGB image
///
/// # Errors
///
/// Returns an error if the dimensions do not fit in `u32`
pub fn to_rgb_image(buffer: &ImageBuffer) -> Result<RgbImage> {
    let (width, height) = buffer.dimensions();
    let too_large = || {
        computation_error(
            "image conversion",
            &format!("{width}x{height} exceeds the maximum image size"),
        )
    };

    let width = u32::try_from(width).map_err(|_overflow| too_large())?;
    let height = u32::try_from(height).map_err(|_overflow| too_large())?;
    let raw: Vec<u8> = buffer
        .pixels()
        .iter()
        .flat_map(|color| color.to_array())
        .collect();

    RgbImage::from_raw(width, height, raw).ok_or_else(too_large)
}

/// Save an image, creating the parent directory if needed
///
/// The format is chosen from the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    image.save(path).map_err(|e| ChartError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
