//! Command-line interface for building grid collages from image directories

use crate::compose::render_collage;
use crate::io::configuration::{ACCEPTED_EXTENSIONS, DEFAULT_PADDING, DEFAULT_TARGET_WIDTH};
use crate::io::error::Result;
use crate::io::output::{default_output_path, save_collage};
use crate::io::progress::ProgressManager;
use crate::io::sources::{collect_paths, load_image, normalize_extensions};
use crate::layout::fill::fill_slots;
use crate::layout::{GridPlan, LayoutMode};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridstitch")]
#[command(
    author,
    version,
    about = "Build 4:3 grid collages from directories of images"
)]
/// Command-line arguments for the collage builder
pub struct Cli {
    /// Directory scanned recursively for source images
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output file path (defaults to a mode-specific name inside SOURCE)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Choose rows and columns from the image count instead of fixed 6x6
    #[arg(short, long)]
    pub adaptive: bool,

    /// Canvas width in pixels
    #[arg(short, long, default_value_t = DEFAULT_TARGET_WIDTH)]
    pub width: u32,

    /// Padding between cells in pixels
    #[arg(short, long, default_value_t = DEFAULT_PADDING)]
    pub padding: u32,

    /// Comma-separated file extensions to collect
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = ACCEPTED_EXTENSIONS.iter().map(ToString::to_string)
    )]
    pub extensions: Vec<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Layout mode selected by the flags
    pub const fn layout_mode(&self) -> LayoutMode {
        if self.adaptive {
            LayoutMode::Adaptive
        } else {
            LayoutMode::Fixed
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Destination path, explicit or derived from the source directory
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.source, self.layout_mode()))
    }
}

/// Orchestrates the collage pipeline from discovery to persistence
pub struct CollageProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl CollageProcessor {
    /// Create a new processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);

        Self { cli, progress }
    }

    /// Run the pipeline: discover, decode, plan, fill, paint, save
    ///
    /// # Errors
    ///
    /// Returns an error if discovery, decoding, planning, rendering or
    /// saving fails. No output file is written on failure.
    pub fn process(&mut self) -> Result<()> {
        let extensions = normalize_extensions(&self.cli.extensions);
        let paths = collect_paths(&self.cli.source, &extensions)?;

        if let Some(ref mut pm) = self.progress {
            pm.start_loading(paths.len());
        }

        let mut images = Vec::with_capacity(paths.len());
        for path in &paths {
            images.push(load_image(path)?);
            if let Some(ref pm) = self.progress {
                pm.image_loaded();
            }
        }

        let plan = self
            .cli
            .layout_mode()
            .plan(images.len(), self.cli.width, self.cli.padding)?;

        if let Some(ref mut pm) = self.progress {
            pm.start_render(plan.slot_count(), &plan.grid_label());
        }

        let slots = fill_slots(images, plan.slot_count());
        let canvas = render_collage(&plan, &slots)?;

        let destination = self.cli.output_path();
        save_collage(&canvas, &destination)?;

        if let Some(ref mut pm) = self.progress {
            pm.finish();
        }

        self.report_success(&plan, &destination);
        Ok(())
    }

    // Allow print for user feedback once the collage is written
    #[allow(clippy::print_stdout)]
    fn report_success(&self, plan: &GridPlan, destination: &Path) {
        if self.cli.quiet {
            return;
        }
        println!(
            "4:3 {} collage ({}x{}) saved to {}",
            plan.grid_label(),
            plan.canvas_width,
            plan.canvas_height,
            destination.display()
        );
    }
}
