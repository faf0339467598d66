/// Grid partitioning and structural checks
pub mod partition;
/// Single-image run orchestration
pub mod pipeline;
/// Re-stitching tiles into a flat image
pub mod reconstruction;
/// Round-trip validation against the source image
pub mod validation;
