//! Collage rendering onto background canvases

/// Canvas allocation, per-slot resampling and placement
pub mod canvas;

pub use canvas::render_collage;
