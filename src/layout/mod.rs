//! Grid planning and slot management
//!
//! This module contains the layout-related functionality:
//! - Pixel geometry of a planned grid
//! - The fixed and adaptive row/column selection strategies
//! - Cyclic filling of unused slots

/// Cyclic slot filling for undersupplied grids
pub mod fill;
/// Grid geometry shared by both layout strategies
pub mod plan;
/// Row and column selection strategies
pub mod strategy;

pub use plan::GridPlan;
pub use strategy::LayoutMode;
