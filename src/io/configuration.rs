//! Collage defaults and safety limits

// Caller-facing defaults matching the common contact-sheet use
/// Canvas width in pixels when none is requested
pub const DEFAULT_TARGET_WIDTH: u32 = 1600;
/// Gap between adjacent cells in pixels
pub const DEFAULT_PADDING: u32 = 5;

/// File extensions accepted during source discovery (lowercase, no dot)
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

/// Background color painted where no cell lands
pub const BACKGROUND_COLOR: [u8; 3] = [240, 240, 240];

// Safety limit to prevent excessive memory allocation; also the JPEG
// encoder's hard dimension cap
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 65_535;

// Output settings
/// Default output filename for the fixed 6x6 layout
pub const FIXED_OUTPUT_NAME: &str = "collage_6x6.jpg";
/// Default output filename for the adaptive layout
pub const ADAPTIVE_OUTPUT_NAME: &str = "collage_adaptive.jpg";
