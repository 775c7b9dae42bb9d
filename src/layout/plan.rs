//! Pixel geometry for a planned collage grid

/// Pixel geometry for one collage request
///
/// Built once by a layout strategy and read-only afterwards. Slot index
/// `i` maps to grid position `(i / cols, i % cols)` in row-major order.
/// Floor rounding during planning can leave a band of background pixels
/// up to `cols - 1` wide on the right edge and, in the fixed layout, up
/// to `rows - 1` tall on the bottom edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPlan {
    /// Number of grid rows
    pub rows: u32,
    /// Number of grid columns
    pub cols: u32,
    /// Width of every cell in pixels
    pub cell_width: u32,
    /// Height of every cell in pixels
    pub cell_height: u32,
    /// Total canvas width in pixels
    pub canvas_width: u32,
    /// Total canvas height in pixels
    pub canvas_height: u32,
    /// Gap between adjacent cells in pixels
    pub padding: u32,
}

impl GridPlan {
    /// Total number of slots in the grid
    pub const fn slot_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Grid position `(row, col)` of a slot index in row-major order
    pub const fn slot_position(&self, index: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((index / cols) as u32, (index % cols) as u32)
    }

    /// Canvas pixel offset of a cell's top-left corner
    ///
    /// Padding sits between cells only, never at the canvas edge, so
    /// cell `(0, 0)` starts at the canvas origin.
    pub const fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        (
            col * (self.cell_width + self.padding),
            row * (self.cell_height + self.padding),
        )
    }

    /// Human-readable `"RxC"` label for user-facing messages
    pub fn grid_label(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }
}
