//! Global and per-tile color frequency tables
//!
//! A single traversal of the tile matrix (tile-rows top to bottom, tiles left
//! to right, pixel rows top to bottom, pixels left to right) updates the
//! global table and the current tile's table together. Color identifiers are
//! handed out the first time a color is met in that traversal, so labels
//! never depend on hash map iteration order.

use crate::analysis::labels::color_label;
use crate::spatial::{PixelColor, TileMatrix};
use std::collections::HashMap;

/// Occurrence counts keyed by color, iterated in first-encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorFrequencyTable {
    entries: Vec<(PixelColor, usize)>,
    index: HashMap<PixelColor, usize>,
}

impl ColorFrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a color
    ///
    /// Returns `true` if this is the first time the color was recorded.
    pub fn record(&mut self, color: PixelColor) -> bool {
        if let Some(entry) = self
            .index
            .get(&color)
            .and_then(|&position| self.entries.get_mut(position))
        {
            entry.1 += 1;
            false
        } else {
            self.index.insert(color, self.entries.len());
            self.entries.push((color, 1));
            true
        }
    }

    /// Occurrences of a color (zero if never seen)
    pub fn count(&self, color: &PixelColor) -> usize {
        self.index
            .get(color)
            .and_then(|&position| self.entries.get(position))
            .map_or(0, |&(_, count)| count)
    }

    /// Whether the color has been recorded
    pub fn contains(&self, color: &PixelColor) -> bool {
        self.index.contains_key(color)
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no color has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// `(color, count)` pairs in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (PixelColor, usize)> + '_ {
        self.entries.iter().copied()
    }
}

/// Color counts for one tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileColors {
    /// Tile label, e.g. `A1`
    pub label: String,
    /// Grid position as `(tile_row, tile_col)`
    pub position: (usize, usize),
    /// Color counts within the tile
    pub table: ColorFrequencyTable,
}

/// Result of aggregating colors over a tile matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorReport {
    global: ColorFrequencyTable,
    tiles: Vec<TileColors>,
    tile_index: HashMap<String, usize>,
    color_ids: HashMap<PixelColor, String>,
}

impl ColorReport {
    /// Whole-image color counts
    pub const fn global(&self) -> &ColorFrequencyTable {
        &self.global
    }

    /// Color counts for a tile label such as `B2`
    pub fn tile(&self, label: &str) -> Option<&ColorFrequencyTable> {
        self.tile_index
            .get(label)
            .and_then(|&position| self.tiles.get(position))
            .map(|tile| &tile.table)
    }

    /// Per-tile counts in traversal order
    pub fn tiles(&self) -> &[TileColors] {
        &self.tiles
    }

    /// Identifier assigned to a color, e.g. `Color:C`
    pub fn color_id(&self, color: &PixelColor) -> Option<&str> {
        self.color_ids.get(color).map(String::as_str)
    }

    /// `(color, identifier)` pairs in first-encounter order
    pub fn color_ids(&self) -> impl Iterator<Item = (PixelColor, &str)> + '_ {
        self.global
            .iter()
            .filter_map(|(color, _)| self.color_id(&color).map(|id| (color, id)))
    }

    /// Number of distinct colors in the image
    pub fn distinct_colors(&self) -> usize {
        self.global.len()
    }

    /// Number of pixels counted
    pub fn total_pixels(&self) -> usize {
        self.global.total()
    }

    /// `(color, count, identifier)` sorted by descending count
    ///
    /// Ties keep first-encounter order, so the ranking is as deterministic
    /// as the identifiers themselves.
    pub fn ranked_colors(&self) -> Vec<(PixelColor, usize, &str)> {
        let mut ranked: Vec<_> = self
            .global
            .iter()
            .filter_map(|(color, count)| self.color_id(&color).map(|id| (color, count, id)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Count colors over the whole matrix and per tile in one pass
pub fn aggregate(matrix: &TileMatrix) -> ColorReport {
    let mut global = ColorFrequencyTable::new();
    let mut tiles = Vec::with_capacity(matrix.tile_count());
    let mut color_ids = HashMap::new();

    for tile in matrix.tiles() {
        let mut table = ColorFrequencyTable::new();

        for color in tile.pixels() {
            table.record(color);
            if global.record(color) {
                color_ids.insert(color, color_label(global.len() - 1));
            }
        }

        tiles.push(TileColors {
            label: tile.label(),
            position: tile.position(),
            table,
        });
    }

    let tile_index = tiles
        .iter()
        .enumerate()
        .map(|(position, tile)| (tile.label.clone(), position))
        .collect();

    log::debug!(
        "Aggregated {} pixel(s) into {} distinct color(s) across {} tile(s)",
        global.total(),
        global.len(),
        tiles.len()
    );

    ColorReport {
        global,
        tiles,
        tile_index,
        color_ids,
    }
}
