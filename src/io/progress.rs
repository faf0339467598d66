//! Progress display while chart tiles are rendered

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Tiles: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many tile charts have been rendered
///
/// A hidden tracker accepts the same calls and draws nothing.
pub struct ChartProgress {
    bar: ProgressBar,
}

impl ChartProgress {
    /// Visible progress bar over `tile_count` tiles
    pub fn new(tile_count: usize) -> Self {
        let bar = ProgressBar::new(tile_count as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Tracker over `tile_count` tiles that draws nothing
    pub fn hidden(tile_count: usize) -> Self {
        Self {
            bar: ProgressBar::with_draw_target(Some(tile_count as u64), ProgressDrawTarget::hidden()),
        }
    }

    /// Visible or hidden tracker depending on `visible`
    pub fn for_tiles(tile_count: usize, visible: bool) -> Self {
        if visible {
            Self::new(tile_count)
        } else {
            Self::hidden(tile_count)
        }
    }

    /// Record one finished tile
    pub fn tile_done(&self, label: &str) {
        self.bar.set_message(label.to_string());
        self.bar.inc(1);
    }

    /// Tiles recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar once rendering is complete
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
