//! Color aggregation and labelling over tile matrices

/// Global and per-tile color frequency tables
pub mod frequency;
/// Deterministic tile, color and cell labels
pub mod labels;

pub use frequency::{ColorFrequencyTable, ColorReport, TileColors, aggregate};
