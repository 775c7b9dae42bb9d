//! Background allocation and slot-by-slot painting

use crate::io::configuration::BACKGROUND_COLOR;
use crate::io::error::{CollageError, Result};
use crate::layout::GridPlan;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

/// Paint a slot sequence onto a freshly allocated background canvas
///
/// Slots are painted in reading order. Every image is resampled to the
/// exact cell size with the Lanczos filter, stretching whatever aspect
/// ratio it arrived with, then written over the background without
/// blending. Floor rounding in the plan can leave a thin background
/// margin along the right and bottom canvas edges; that margin is never
/// painted.
///
/// # Errors
///
/// Returns [`CollageError::SlotMismatch`] when the sequence length does
/// not equal the plan's slot count.
pub fn render_collage(plan: &GridPlan, slots: &[RgbImage]) -> Result<RgbImage> {
    if slots.len() != plan.slot_count() {
        return Err(CollageError::SlotMismatch {
            expected: plan.slot_count(),
            actual: slots.len(),
        });
    }

    let mut canvas = RgbImage::from_pixel(
        plan.canvas_width,
        plan.canvas_height,
        Rgb(BACKGROUND_COLOR),
    );

    for (index, source) in slots.iter().enumerate() {
        let (row, col) = plan.slot_position(index);
        let (x, y) = plan.cell_origin(row, col);
        let cell = imageops::resize(
            source,
            plan.cell_width,
            plan.cell_height,
            FilterType::Lanczos3,
        );
        imageops::replace(&mut canvas, &cell, i64::from(x), i64::from(y));
    }

    Ok(canvas)
}
