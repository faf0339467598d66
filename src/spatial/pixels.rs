//! Alpha-stripped colors and the immutable row-major image buffer
//!
//! Every source pixel enters the crate through [`PixelColor::from_components`],
//! which is the single place where an alpha channel is dropped. Everything
//! downstream (partitioning, counting, reconstruction, comparison) therefore
//! only ever sees three-component colors.

use crate::io::error::{ChartError, Result};
use image::DynamicImage;
use std::fmt;

/// An RGB color with any alpha component already removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelColor {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl PixelColor {
    /// Create a color from its three channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from a 3- or 4-component source pixel
    ///
    /// A fourth component is treated as alpha and discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidSourceData`] if the pixel has any other
    /// number of components
    pub fn from_components(components: &[u8]) -> Result<Self> {
        match *components {
            [red, green, blue] | [red, green, blue, _] => Ok(Self::new(red, green, blue)),
            _ => Err(ChartError::InvalidSourceData {
                reason: format!(
                    "pixels must have 3 or 4 components, found {}",
                    components.len()
                ),
            }),
        }
    }

    /// Channels as an `[r, g, b]` array
    pub const fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for PixelColor {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for PixelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.red, self.green, self.blue)
    }
}

/// A decoded image as a flat, row-major sequence of alpha-stripped colors
///
/// Immutable once built; the pixel count always equals `width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    pixels: Vec<PixelColor>,
}

impl ImageBuffer {
    /// Wrap an already alpha-stripped pixel sequence
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidSourceData`] if `pixels.len()` differs
    /// from `width * height`
    pub fn new(width: usize, height: usize, pixels: Vec<PixelColor>) -> Result<Self> {
        let expected = width.checked_mul(height).ok_or_else(|| ChartError::InvalidSourceData {
            reason: format!("image size {width}x{height} overflows"),
        })?;

        if pixels.len() != expected {
            return Err(ChartError::InvalidSourceData {
                reason: format!(
                    "expected {expected} pixels for a {width}x{height} image, found {}",
                    pixels.len()
                ),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer from interleaved channel data with 3 or 4 channels per pixel
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidSourceData`] if the channel count is not
    /// 3 or 4, or the data length does not describe `width * height` pixels
    pub fn from_raw(width: usize, height: usize, channels: usize, data: &[u8]) -> Result<Self> {
        if !(3..=4).contains(&channels) {
            return Err(ChartError::InvalidSourceData {
                reason: format!("pixels must have 3 or 4 components, found {channels}"),
            });
        }

        if data.len() % channels != 0 {
            return Err(ChartError::InvalidSourceData {
                reason: format!(
                    "{} bytes do not divide into {channels}-component pixels",
                    data.len()
                ),
            });
        }

        let pixels = data
            .chunks_exact(channels)
            .map(PixelColor::from_components)
            .collect::<Result<Vec<_>>>()?;

        Self::new(width, height, pixels)
    }

    /// Convert a decoded image, stripping alpha if the source has it
    ///
    /// # Errors
    ///
    /// Propagates [`ImageBuffer::from_raw`] failures
    pub fn from_dynamic_image(image: &DynamicImage) -> Result<Self> {
        let (width, height) = (image.width() as usize, image.height() as usize);

        if image.color().has_alpha() {
            Self::from_raw(width, height, 4, image.to_rgba8().as_raw())
        } else {
            Self::from_raw(width, height, 3, image.to_rgb8().as_raw())
        }
    }

    /// Image width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Image size as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row-major pixel sequence
    pub fn pixels(&self) -> &[PixelColor] {
        &self.pixels
    }

    /// Pixel at a flat row-major index
    pub fn get(&self, index: usize) -> Option<PixelColor> {
        self.pixels.get(index).copied()
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the image has no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Consume the buffer and return its pixel sequence
    pub fn into_pixels(self) -> Vec<PixelColor> {
        self.pixels
    }
}
