//! Input/output: decoding, exports, CLI and error handling

/// Chart image rendering
pub mod chart;
/// Command-line interface
pub mod cli;
/// Defaults and output naming
pub mod configuration;
/// Error types
pub mod error;
/// CSV files and summary report
pub mod export;
/// Image decoding and encoding
pub mod image;
/// Progress display
pub mod progress;
