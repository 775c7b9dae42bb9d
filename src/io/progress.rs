//! Progress display for the collage pipeline phases

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static LOADING_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates progress display across the load and render phases
///
/// The decode phase gets a counting bar and the render phase a spinner.
/// Only one display is active at a time; starting a phase clears the
/// previous one.
pub struct ProgressManager {
    active: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager with no active display
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Begin the decode-phase bar over the discovered files
    pub fn start_loading(&mut self, total: usize) {
        self.clear_active();
        let bar = ProgressBar::new(total as u64);
        bar.set_style(LOADING_STYLE.clone());
        bar.set_message("Loading images");
        self.active = Some(bar);
    }

    /// Advance the decode bar after one file finished decoding
    pub fn image_loaded(&self) {
        if let Some(ref bar) = self.active {
            bar.inc(1);
        }
    }

    /// Swap to a spinner while cells are resampled and painted
    pub fn start_render(&mut self, slots: usize, grid_label: &str) {
        self.clear_active();
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(PHASE_STYLE.clone());
        spinner.set_message(format!("Painting {slots} slots into a {grid_label} grid"));
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.active = Some(spinner);
    }

    /// Clear any remaining display
    pub fn finish(&mut self) {
        self.clear_active();
    }

    fn clear_active(&mut self) {
        if let Some(bar) = self.active.take() {
            bar.finish_and_clear();
        }
    }
}
