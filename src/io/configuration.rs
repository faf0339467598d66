//! Runtime configuration defaults and output naming

/// Default tile size when `--grid` is not given
pub const DEFAULT_GRID: &str = "10x10";

// Chart rendering
/// Edge length of one pixel swatch in chart images
pub const DEFAULT_SWATCH_SIZE: u32 = 98;
/// Border drawn around each swatch in its hue-inverted color
pub const SWATCH_BORDER: u32 = 1;
/// Black gutter around each tile in the complete chart
pub const TILE_GUTTER: u32 = 10;
/// Offset applied to each channel when inverting a swatch color
pub const HUE_INVERSION_OFFSET: u8 = 179;

// Safety limits to prevent excessive memory allocation
/// Maximum accepted swatch edge length
pub const MAX_SWATCH_SIZE: u32 = 1_000;
/// Maximum edge length of any rendered chart image
pub const MAX_CHART_DIMENSION: u32 = 32_768;

// Swatch labels, drawn in the hue-inverted color
/// Label font size as a fraction of the swatch edge
pub const LABEL_FONT_RATIO: f32 = 0.1;
/// Swatches whose label font would be smaller than this get no labels
pub const MIN_LABEL_FONT_SIZE: f32 = 6.0;

// Output naming, appended to `<destination>/<image stem>`
/// Infix before the tile label of per-tile CSV files
pub const CSV_INFIX: &str = "_Grid-";
/// Infix before the tile label of per-tile chart images
pub const CHART_INFIX: &str = "_GRID-";
/// Label used for the whole-mosaic chart image
pub const COMPLETE_CHART_LABEL: &str = "COMPLETE";
/// Suffix of the plain-text summary report
pub const REPORT_SUFFIX: &str = "_report.txt";

/// File name prefix for temporary validation images
pub const VALIDATION_ARTIFACT_PREFIX: &str = "tilechart-validate-";
