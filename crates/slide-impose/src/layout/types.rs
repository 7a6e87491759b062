//! Layout data types for imposition
//!
//! These types represent the intermediate layout calculations between
//! sheet planning and PDF rendering. All coordinates are PDF points with
//! the origin at the bottom-left corner of the output sheet.

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Whether the two rectangles share any interior area
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}

/// Where the title line goes on a sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleArea {
    /// Left edge of the text
    pub x: f32,
    /// Text baseline
    pub baseline_y: f32,
    /// Width available before the text overflows the printable area
    pub max_width: f32,
}

/// Region reserved for exactly one rendered source page and its label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Sheet this slot belongs to
    pub sheet_index: usize,
    /// Position within the sheet, 0 = top
    pub position: usize,
    pub rect: Rect,
}

/// Slot geometry for one output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub sheet_index: usize,
    /// Present only when a title line is drawn on this sheet
    pub title: Option<TitleArea>,
    /// Top edge of the area shared by the slots
    pub usable_top: f32,
    /// Vertical budget of each slot
    pub section_height: f32,
    /// Slots, top to bottom
    pub slots: Vec<Slot>,
}

/// Final placement of a rendered page on the output sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlacement {
    /// 0-based source page index
    pub source_page: usize,
    /// Position and drawn size of the image in points
    pub content_rect: Rect,
    /// Uniform scale applied to the rendered image
    pub scale: f32,
}
