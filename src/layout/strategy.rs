//! Row and column selection for the two layout policies
//!
//! The fixed policy always produces a 6x6 contact sheet on an exact 4:3
//! canvas. The adaptive policy scans row counts for the split whose
//! column-to-row balance comes closest to 4:3, forces each cell to 4:3,
//! and derives the canvas height from the chosen row count. Both accept
//! that sources are stretched to their cell, since nothing is cropped.

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::layout::plan::GridPlan;

/// Row and column count of the fixed layout
pub const FIXED_GRID_DIMENSION: u32 = 6;

/// Width component of the aspect ratio shared by canvas and cells
pub const ASPECT_WIDTH: u32 = 4;
/// Height component of the aspect ratio shared by canvas and cells
pub const ASPECT_HEIGHT: u32 = 3;

// Ratio both strategies steer toward, as a float for the adaptive scan
const TARGET_RATIO: f64 = ASPECT_WIDTH as f64 / ASPECT_HEIGHT as f64;

/// Grid-sizing strategy for a collage request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Constant 6x6 grid regardless of image count
    Fixed,
    /// Row count chosen to best approximate the target aspect ratio
    Adaptive,
}

impl LayoutMode {
    /// Compute the grid plan for the given image count and canvas settings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `target_width` is zero or exceeds [`MAX_CANVAS_DIMENSION`]
    /// - `padding` leaves no pixels for the cells themselves
    /// - adaptive planning receives an image count of zero
    /// - the adaptive canvas height would exceed [`MAX_CANVAS_DIMENSION`]
    pub fn plan(self, image_count: usize, target_width: u32, padding: u32) -> Result<GridPlan> {
        match self {
            Self::Fixed => plan_fixed(target_width, padding),
            Self::Adaptive => plan_adaptive(image_count, target_width, padding),
        }
    }
}

fn plan_fixed(target_width: u32, padding: u32) -> Result<GridPlan> {
    validate_target_width(target_width)?;

    let rows = FIXED_GRID_DIMENSION;
    let cols = FIXED_GRID_DIMENSION;
    // Canvas size is exact 4:3; floor remainders stay inside the cells
    let canvas_height = target_width * ASPECT_HEIGHT / ASPECT_WIDTH;
    if canvas_height == 0 {
        return Err(invalid_parameter(
            "target-width",
            &target_width,
            &"too narrow for a 4:3 canvas",
        ));
    }
    let cell_width = cell_span(target_width, cols, padding)?;
    let cell_height = cell_span(canvas_height, rows, padding)?;

    Ok(GridPlan {
        rows,
        cols,
        cell_width,
        cell_height,
        canvas_width: target_width,
        canvas_height,
        padding,
    })
}

fn plan_adaptive(image_count: usize, target_width: u32, padding: u32) -> Result<GridPlan> {
    validate_target_width(target_width)?;

    let (rows, cols) = select_adaptive_grid(image_count).ok_or_else(|| {
        invalid_parameter(
            "image-count",
            &image_count,
            &"at least one source image is required",
        )
    })?;

    let cell_width = cell_span(target_width, cols, padding)?;
    // Cells are forced to 4:3 no matter how the grid balances out
    let cell_height = cell_width * ASPECT_HEIGHT / ASPECT_WIDTH;
    if cell_height == 0 {
        return Err(invalid_parameter(
            "target-width",
            &target_width,
            &format!("cells would be {cell_width}px wide but 0px tall"),
        ));
    }

    let canvas_height = checked_canvas_height(rows, cell_height, padding).ok_or_else(|| {
        invalid_parameter(
            "image-count",
            &image_count,
            &format!("a {rows}-row canvas would exceed {MAX_CANVAS_DIMENSION}px"),
        )
    })?;

    Ok(GridPlan {
        rows,
        cols,
        cell_width,
        cell_height,
        canvas_width: target_width,
        canvas_height,
        padding,
    })
}

/// Scan row counts and keep the split closest to the target ratio
///
/// For each candidate row count, the column count is the smallest that
/// still covers every image, so `rows * cols >= image_count` always
/// holds for the winner. Ties keep the first candidate in the ascending
/// scan, so the smallest row count wins; reproducibility of planned
/// grids depends on this scan order. Returns `None` only for an image
/// count of zero.
pub fn select_adaptive_grid(image_count: usize) -> Option<(u32, u32)> {
    let mut best: Option<(u32, u32, f64)> = None;

    for rows in 1..=image_count {
        let cols = image_count.div_ceil(rows);
        let ratio = (cols as f64 / rows as f64) / TARGET_RATIO;
        let deviation = (ratio - 1.0).abs();

        if best.is_none_or(|(_, _, current)| deviation < current) {
            best = Some((rows as u32, cols as u32, deviation));
        }
    }

    best.map(|(rows, cols, _)| (rows, cols))
}

// Usable pixels per cell once inter-cell padding is taken out, floored
fn cell_span(total: u32, count: u32, padding: u32) -> Result<u32> {
    let gaps = padding.checked_mul(count - 1).ok_or_else(|| {
        invalid_parameter("padding", &padding, &"padding overflows the canvas size")
    })?;
    let span = total.checked_sub(gaps).unwrap_or(0) / count;
    if span == 0 {
        return Err(invalid_parameter(
            "padding",
            &padding,
            &format!("no pixels left for cells in a span of {total} split {count} ways"),
        ));
    }
    Ok(span)
}

fn checked_canvas_height(rows: u32, cell_height: u32, padding: u32) -> Option<u32> {
    rows.checked_mul(cell_height)
        .zip(padding.checked_mul(rows - 1))
        .and_then(|(cell_total, gap_total)| cell_total.checked_add(gap_total))
        .filter(|total| *total <= MAX_CANVAS_DIMENSION)
}

fn validate_target_width(target_width: u32) -> Result<()> {
    if target_width == 0 || target_width > MAX_CANVAS_DIMENSION {
        return Err(invalid_parameter(
            "target-width",
            &target_width,
            &format!("must be between 1 and {MAX_CANVAS_DIMENSION}"),
        ));
    }
    Ok(())
}
