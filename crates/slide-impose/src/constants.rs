//! Shared constants for slide imposition
//!
//! This module centralizes magic numbers and constants used throughout
//! the imposition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Sheet Geometry
// =============================================================================

/// Default margin around the printable area (mm)
pub const DEFAULT_MARGIN_MM: f32 = 20.0;

/// Default vertical gap between consecutive pages on a sheet (mm)
pub const DEFAULT_GUTTER_MM: f32 = 5.0;

/// Distance of the title baseline above the usable top edge (mm)
pub const TITLE_BASELINE_OFFSET_MM: f32 = 5.0;

/// Default number of source pages per output sheet
pub const DEFAULT_PAGES_PER_SHEET: usize = 3;

// =============================================================================
// Rendering
// =============================================================================

/// Rasterization multiplier relative to the 72 dpi point grid
pub const DEFAULT_RENDER_SCALE: f32 = 2.0;

// =============================================================================
// Text
// =============================================================================

/// Resource name of the label font inside each output page
pub const FONT_RESOURCE_NAME: &str = "F1";

/// Base font used for titles and page numbers
pub const LABEL_BASE_FONT: &str = "Helvetica";

/// Default font size for the sheet title (points)
pub const TITLE_FONT_SIZE: f32 = 9.0;

/// Default font size for page numbers (points)
pub const PAGE_NUMBER_FONT_SIZE: f32 = 8.0;

/// Marker appended to truncated titles
pub const ELLIPSIS: &str = "...";

/// Advance width used for characters outside the metrics table (1/1000 em)
pub const HELVETICA_DEFAULT_WIDTH: u16 = 556;

/// Helvetica advance widths for printable ASCII (0x20..=0x7E), 1/1000 em
pub const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];
