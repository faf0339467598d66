//! Chart images: enlarged per-tile swatch grids and the complete mosaic
//!
//! Every pixel cell becomes a square swatch of its color framed in the
//! hue-inverted color. Large enough swatches also carry two text lines in
//! that color: the cell label (`B1=5:3`) and the `r, g, b` value. The
//! complete chart surrounds each tile with a black gutter and lays the tiles
//! out in grid order.
//!
//! All image sizes are computed with checked arithmetic and capped at
//! [`MAX_CHART_DIMENSION`] before any buffer is allocated.

use crate::analysis::labels::cell_label;
use crate::io::configuration::{
    CHART_INFIX, COMPLETE_CHART_LABEL, DEFAULT_SWATCH_SIZE, HUE_INVERSION_OFFSET,
    LABEL_FONT_RATIO, MAX_CHART_DIMENSION, MIN_LABEL_FONT_SIZE, SWATCH_BORDER, TILE_GUTTER,
};
use crate::io::error::{ChartError, Result, computation_error, invalid_parameter};
use crate::io::export::output_path;
use crate::io::image::save_image;
use crate::io::progress::ChartProgress;
use crate::spatial::{PixelColor, Tile, TileMatrix};
use ab_glyph::{FontArc, PxScale};
use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static LABEL_FONT: LazyLock<Option<FontArc>> = LazyLock::new(|| {
    FontArc::try_from_slice(include_bytes!("../../assets/DejaVuSansMono.ttf")).ok()
});

/// Geometry of rendered charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSettings {
    /// Edge length of one swatch, excluding its border
    pub swatch_size: u32,
    /// Border width around each swatch
    pub border: u32,
    /// Gutter width around each tile in the complete chart
    pub gutter: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            swatch_size: DEFAULT_SWATCH_SIZE,
            border: SWATCH_BORDER,
            gutter: TILE_GUTTER,
        }
    }
}

impl ChartSettings {
    /// Edge length of one swatch including its border on both sides
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidParameter`] if the size overflows `u32`
    pub fn cell_size(&self) -> Result<u32> {
        self.border
            .checked_mul(2)
            .and_then(|frame| self.swatch_size.checked_add(frame))
            .ok_or_else(|| self.too_large())
    }

    /// Font size for swatch labels, or `None` if swatches are too small
    pub fn label_scale(&self) -> Option<PxScale> {
        let size = self.swatch_size as f32 * LABEL_FONT_RATIO;
        (size >= MIN_LABEL_FONT_SIZE).then(|| PxScale::from(size))
    }

    fn too_large(&self) -> ChartError {
        invalid_parameter(
            "swatch",
            &self.swatch_size,
            &format!("chart images would exceed {MAX_CHART_DIMENSION} pixels per side"),
        )
    }
}

/// Contrasting frame color: each channel shifted half-way round its range
pub const fn inverted_hue(color: PixelColor) -> PixelColor {
    PixelColor::new(
        invert_channel(color.red),
        invert_channel(color.green),
        invert_channel(color.blue),
    )
}

const fn invert_channel(value: u8) -> u8 {
    if value < HUE_INVERSION_OFFSET {
        value.saturating_add(HUE_INVERSION_OFFSET)
    } else {
        value - HUE_INVERSION_OFFSET
    }
}

const fn rgb(color: PixelColor) -> Rgb<u8> {
    Rgb(color.to_array())
}

/// `count` cells of `unit` pixels plus `extra`, if that fits the size cap
fn chart_extent(count: usize, unit: u32, extra: u32) -> Option<u32> {
    u32::try_from(count)
        .ok()?
        .checked_mul(unit)?
        .checked_add(extra)
        .filter(|&extent| extent <= MAX_CHART_DIMENSION)
}

// Callers check that the framed size fits in u32
fn with_border(inner: &RgbImage, border: u32, fill: Rgb<u8>) -> RgbImage {
    let mut framed = RgbImage::from_pixel(
        inner.width() + 2 * border,
        inner.height() + 2 * border,
        fill,
    );
    imageops::replace(&mut framed, inner, i64::from(border), i64::from(border));
    framed
}

/// Draw text lines centred in a swatch, stacked with half a line of spacing
fn draw_labels(swatch: &mut RgbImage, lines: &[String], font: &FontArc, scale: PxScale, color: Rgb<u8>) {
    let sizes: Vec<(u32, u32)> = lines.iter().map(|line| text_size(scale, font, line)).collect();
    let line_height = sizes.iter().map(|&(_, height)| height).max().unwrap_or(0);
    let spacing = line_height / 2;
    let block = ((line_height + spacing) * lines.len() as u32).saturating_sub(spacing);
    let mut y = swatch.height().saturating_sub(block) / 2;

    for (line, &(width, _)) in lines.iter().zip(&sizes) {
        let x = swatch.width().saturating_sub(width) / 2;
        draw_text_mut(swatch, color, x as i32, y as i32, scale, font, line);
        y += line_height + spacing;
    }
}

/// Render one tile as a grid of bordered, labelled swatches
///
/// # Errors
///
/// Returns [`ChartError::InvalidParameter`] if the tile image would exceed
/// [`MAX_CHART_DIMENSION`] pixels on either side
pub fn render_tile(tile: &Tile, settings: &ChartSettings) -> Result<RgbImage> {
    let cell = settings.cell_size()?;
    let width = chart_extent(tile.width(), cell, 0).ok_or_else(|| settings.too_large())?;
    let height = chart_extent(tile.height(), cell, 0).ok_or_else(|| settings.too_large())?;

    let mut image = RgbImage::new(width, height);
    let labels = settings
        .label_scale()
        .and_then(|scale| LABEL_FONT.as_ref().map(|font| (font, scale)));

    for (pixel_row, row) in tile.rows().iter().enumerate() {
        for (pixel_col, &color) in row.iter().enumerate() {
            let ink = rgb(inverted_hue(color));
            let mut fill = RgbImage::from_pixel(settings.swatch_size, settings.swatch_size, rgb(color));

            if let Some((font, scale)) = labels {
                let lines = [
                    cell_label(tile.tile_row(), tile.tile_col(), pixel_row, pixel_col),
                    color.to_string(),
                ];
                draw_labels(&mut fill, &lines, font, scale, ink);
            }

            let swatch = with_border(&fill, settings.border, ink);
            imageops::replace(
                &mut image,
                &swatch,
                i64::from(pixel_col as u32 * cell),
                i64::from(pixel_row as u32 * cell),
            );
        }
    }

    Ok(image)
}

/// Lay out tile images in grid order, each framed by a black gutter
///
/// # Errors
///
/// Returns [`ChartError::Computation`] if the layout would exceed
/// [`MAX_CHART_DIMENSION`] pixels on either side
pub fn render_complete(tile_images: &[Vec<RgbImage>], gutter: u32) -> Result<RgbImage> {
    let too_large = || {
        computation_error(
            "chart layout",
            &format!("complete chart would exceed {MAX_CHART_DIMENSION} pixels per side"),
        )
    };
    let frame = gutter.checked_mul(2).ok_or_else(too_large)?;
    let framed_extent = |extent: u32| extent.checked_add(frame).ok_or_else(too_large);

    let mut width = 0u32;
    let mut row_heights = Vec::with_capacity(tile_images.len());

    for row in tile_images {
        let mut row_width = 0u32;
        let mut row_height = 0u32;
        for tile in row {
            row_width = row_width
                .checked_add(framed_extent(tile.width())?)
                .ok_or_else(too_large)?;
            row_height = row_height.max(framed_extent(tile.height())?);
        }
        width = width.max(row_width);
        row_heights.push(row_height);
    }

    let height = row_heights
        .iter()
        .try_fold(0u32, |total, &row_height| total.checked_add(row_height))
        .ok_or_else(too_large)?;
    if width > MAX_CHART_DIMENSION || height > MAX_CHART_DIMENSION {
        return Err(too_large());
    }

    let black = Rgb([0, 0, 0]);
    let mut complete = RgbImage::new(width, height);
    let mut y = 0;

    for (row, row_height) in tile_images.iter().zip(&row_heights) {
        let mut x = 0;
        for tile in row {
            let framed = with_border(tile, gutter, black);
            imageops::replace(&mut complete, &framed, i64::from(x), i64::from(y));
            x += framed.width();
        }
        y += row_height;
    }

    Ok(complete)
}

/// Check the complete chart for a matrix fits the size cap
fn ensure_complete_fits(matrix: &TileMatrix, settings: &ChartSettings) -> Result<()> {
    let cell = settings.cell_size()?;
    let frame = settings
        .gutter
        .checked_mul(2)
        .ok_or_else(|| settings.too_large())?;
    let (width, height) = matrix.image_dimensions();
    let gutters = |tiles: usize| chart_extent(tiles, frame, 0);

    let fits = gutters(matrix.tile_cols())
        .and_then(|extra| chart_extent(width, cell, extra))
        .zip(gutters(matrix.tile_rows()).and_then(|extra| chart_extent(height, cell, extra)))
        .is_some();

    if fits { Ok(()) } else { Err(settings.too_large()) }
}

/// Write `<prefix>_GRID-<label>.png` per tile and `<prefix>_GRID-COMPLETE.png`
///
/// Nothing is written for a matrix without tiles, or when the complete chart
/// would be too large.
///
/// # Errors
///
/// Returns an error if a chart would exceed the size cap or any chart image
/// cannot be saved
pub fn write_chart(
    matrix: &TileMatrix,
    prefix: &Path,
    settings: &ChartSettings,
    progress: &ChartProgress,
) -> Result<Vec<PathBuf>> {
    ensure_complete_fits(matrix, settings)?;

    let mut written = Vec::with_capacity(matrix.tile_count() + 1);
    let mut tile_images = Vec::with_capacity(matrix.tile_rows());

    for row in matrix.rows() {
        let mut row_images = Vec::with_capacity(row.len());
        for tile in row {
            let label = tile.label();
            let image = render_tile(tile, settings)?;
            let path = output_path(prefix, &format!("{CHART_INFIX}{label}.png"));
            save_image(&image, &path)?;
            written.push(path);
            row_images.push(image);
            progress.tile_done(&label);
        }
        tile_images.push(row_images);
    }

    if matrix.tile_count() > 0 {
        let complete = render_complete(&tile_images, settings.gutter)?;
        let path = output_path(prefix, &format!("{CHART_INFIX}{COMPLETE_CHART_LABEL}.png"));
        save_image(&complete, &path)?;
        written.push(path);
    }

    log::info!("Wrote {} chart image(s)", written.len());
    Ok(written)
}
