//! Grid collage generation from directories of images
//!
//! The system discovers every image under a source directory, plans a grid
//! of rows and columns for a 4:3 canvas, cycles images to fill any unused
//! slots, and paints each slot with a Lanczos-resampled copy of its image.

#![forbid(unsafe_code)]

/// Canvas allocation and per-slot painting
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Grid planning, slot geometry and cyclic slot filling
pub mod layout;

pub use io::error::{CollageError, Result};
