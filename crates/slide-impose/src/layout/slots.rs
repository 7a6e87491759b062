//! Slot layout for a single sheet
//!
//! The sheet is split into a title band (optional) and `n` slots of equal
//! height stacked top to bottom:
//!
//! ```text
//!   +--------------------------+  page_height
//!   |  Title - Sheet 1/3       |  baseline = page_height - m + 5mm
//!   +--------------------------+  usable_top (page_height - m, or - m/2 without title)
//!   |  slot 0                  |
//!   +--------------------------+
//!   |  slot 1                  |
//!   +--------------------------+
//!   |  slot n-1                |
//!   +--------------------------+  m
//! ```

use crate::constants::{TITLE_BASELINE_OFFSET_MM, mm_to_pt};

use super::{Rect, SheetLayout, Slot, TitleArea};

/// Compute the title area and slot rectangles for one sheet.
///
/// # Arguments
/// * `sheet_index` - 0-based sheet index
/// * `page_count` - Source pages on this sheet (at least 1)
/// * `sheet_size` - Output sheet (width, height) in points
/// * `margin` - Margin in points
/// * `draw_title` - Whether a title line is drawn on this sheet
pub fn compute_sheet_layout(
    sheet_index: usize,
    page_count: usize,
    sheet_size: (f32, f32),
    margin: f32,
    draw_title: bool,
) -> SheetLayout {
    let (page_width, page_height) = sheet_size;
    let content_width = page_width - 2.0 * margin;

    let (usable_top, title) = if draw_title {
        let title = TitleArea {
            x: margin,
            baseline_y: page_height - margin + mm_to_pt(TITLE_BASELINE_OFFSET_MM),
            max_width: content_width,
        };
        (page_height - margin, Some(title))
    } else {
        // Less margin at the top when there is no title to make room for
        (page_height - margin / 2.0, None)
    };

    let section_height = (usable_top - margin) / page_count.max(1) as f32;

    let slots = (0..page_count)
        .map(|position| Slot {
            sheet_index,
            position,
            rect: Rect::new(
                margin,
                usable_top - (position + 1) as f32 * section_height,
                content_width,
                section_height,
            ),
        })
        .collect();

    SheetLayout {
        sheet_index,
        title,
        usable_top,
        section_height,
        slots,
    }
}
