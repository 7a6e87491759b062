//! Content placement within slots
//!
//! Each rendered page is scaled uniformly to fit its slot, centered
//! horizontally and hung from a running cursor: the first page starts at the
//! sheet's usable top and every following page starts one gutter below the
//! bottom of the previous one. Narrow pages therefore pull later pages up
//! instead of leaving each slot's unused height in place. A page never
//! extends below the bottom of its own slot, so the gutters taken by earlier
//! pages shrink later ones rather than pushing them off the sheet.

use super::{PagePlacement, Rect, Slot};

/// Uniform scale that fits `image` inside `slot` without distortion
pub fn fit_scale(slot: &Rect, image_width: f32, image_height: f32) -> f32 {
    (slot.width / image_width).min(slot.height / image_height)
}

/// Place one image in `slot` with its top edge at `cursor_top`.
///
/// The image is fitted to the slot width and to the height left between the
/// cursor and the slot bottom, whichever is smaller.
pub fn place_page(
    slot: &Slot,
    source_page: usize,
    cursor_top: f32,
    image_width: f32,
    image_height: f32,
) -> PagePlacement {
    let available_height = slot.rect.height.min(cursor_top - slot.rect.y).max(0.0);
    let bounds = Rect::new(slot.rect.x, slot.rect.y, slot.rect.width, available_height);
    let scale = fit_scale(&bounds, image_width, image_height);
    let width = image_width * scale;
    let height = image_height * scale;
    let x = slot.rect.x + (slot.rect.width - width) / 2.0;

    PagePlacement {
        source_page,
        content_rect: Rect::new(x, cursor_top - height, width, height),
        scale,
    }
}

/// Cursor position for the page following `placement`
pub fn next_cursor(placement: &PagePlacement, gutter: f32) -> f32 {
    placement.content_rect.y - gutter
}
