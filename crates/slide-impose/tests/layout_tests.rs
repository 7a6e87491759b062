use slide_impose::constants::{mm_to_pt, pt_to_mm};
use slide_impose::layout::*;

const A4: (f32, f32) = (595.276, 841.89);

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.01
}

#[test]
fn test_title_reserves_full_margin() {
    let margin = mm_to_pt(20.0);
    let layout = compute_sheet_layout(0, 3, A4, margin, true);

    assert!(approx(layout.usable_top, A4.1 - margin));
    assert!(approx(layout.section_height, (A4.1 - 2.0 * margin) / 3.0));

    let title = layout.title.expect("title area");
    assert!(approx(title.x, margin));
    assert!(approx(title.max_width, A4.0 - 2.0 * margin));
    assert!(approx(pt_to_mm(title.baseline_y - layout.usable_top), 5.0));
}

#[test]
fn test_no_title_uses_half_margin_at_top() {
    let margin = mm_to_pt(20.0);
    let layout = compute_sheet_layout(1, 2, A4, margin, false);

    assert!(layout.title.is_none());
    assert!(approx(layout.usable_top, A4.1 - margin / 2.0));
    assert!(approx(
        layout.section_height,
        (A4.1 - margin / 2.0 - margin) / 2.0
    ));
}

#[test]
fn test_slots_stack_without_overlap() {
    let margin = mm_to_pt(20.0);
    for page_count in 1..=6 {
        for draw_title in [true, false] {
            let layout = compute_sheet_layout(4, page_count, A4, margin, draw_title);
            assert_eq!(layout.slots.len(), page_count);

            for (i, slot) in layout.slots.iter().enumerate() {
                assert_eq!(slot.position, i);
                assert_eq!(slot.sheet_index, 4);
                assert!(approx(slot.rect.x, margin));
                assert!(approx(slot.rect.width, A4.0 - 2.0 * margin));
                assert!(approx(slot.rect.height, layout.section_height));
                assert!(slot.rect.height > 0.0);

                // Inside the printable area
                assert!(slot.rect.y >= margin - 0.01);
                assert!(slot.rect.top() <= layout.usable_top + 0.01);
                assert!(slot.rect.right() <= A4.0 - margin + 0.01);

                for other in &layout.slots[i + 1..] {
                    assert!(!slot.rect.overlaps(&other.rect));
                    assert!(other.rect.top() <= slot.rect.y + 0.01);
                }
            }

            let bottom = layout.slots.last().unwrap().rect.y;
            assert!(approx(bottom, margin));
        }
    }
}

#[test]
fn test_fit_preserves_aspect_ratio() {
    let slot = Rect::new(0.0, 0.0, 400.0, 200.0);

    // Wide image is limited by width
    let scale = fit_scale(&slot, 1280.0, 360.0);
    assert!(approx(scale, 400.0 / 1280.0));

    // Tall image is limited by height
    let scale = fit_scale(&slot, 640.0, 720.0);
    assert!(approx(scale, 200.0 / 720.0));
}

#[test]
fn test_place_page_centers_horizontally_below_cursor() {
    let slot = Slot {
        sheet_index: 0,
        position: 0,
        rect: Rect::new(50.0, 500.0, 400.0, 300.0),
    };
    let placement = place_page(&slot, 7, 800.0, 600.0, 600.0);

    assert_eq!(placement.source_page, 7);
    assert!(approx(placement.scale, 0.5));
    assert!(approx(placement.content_rect.width, 300.0));
    assert!(approx(placement.content_rect.height, 300.0));
    assert!(approx(placement.content_rect.x, 50.0 + 50.0));
    assert!(approx(placement.content_rect.top(), 800.0));
    assert!(approx(next_cursor(&placement, 10.0), 490.0));
}

#[test]
fn test_wide_pages_pack_upwards() {
    let margin = mm_to_pt(20.0);
    let gutter = mm_to_pt(5.0);
    let layout = compute_sheet_layout(0, 3, A4, margin, true);

    // Very wide slides are width-limited, so they end above their slot bottom
    let mut cursor = layout.usable_top;
    let mut placements = Vec::new();
    for (slot, page) in layout.slots.iter().zip([1usize, 2, 3]) {
        let placement = place_page(slot, page, cursor, 1280.0, 540.0);
        cursor = next_cursor(&placement, gutter);
        placements.push(placement);
    }

    for pair in placements.windows(2) {
        let gap = pair[0].content_rect.y - pair[1].content_rect.top();
        assert!(approx(gap, gutter));
    }
    for (placement, slot) in placements.iter().zip(&layout.slots) {
        assert!(placement.content_rect.width <= slot.rect.width + 0.01);
        assert!(placement.content_rect.height <= slot.rect.height + 0.01);
    }
    assert!(placements[2].content_rect.y > layout.slots[2].rect.y);
    assert!(placements[2].content_rect.y > margin);
}

#[test]
fn test_height_limited_pages_shrink_to_stay_in_their_slots() {
    let margin = mm_to_pt(20.0);
    let gutter = mm_to_pt(5.0);
    let layout = compute_sheet_layout(0, 6, A4, margin, true);

    // 16:9 slides are height-limited at six per sheet
    let mut cursor = layout.usable_top;
    let mut placements = Vec::new();
    for (slot, page) in layout.slots.iter().zip(0usize..) {
        let placement = place_page(slot, page, cursor, 640.0, 360.0);
        cursor = next_cursor(&placement, gutter);
        placements.push(placement);
    }

    for (placement, slot) in placements.iter().zip(&layout.slots) {
        assert!(placement.content_rect.y >= slot.rect.y - 0.01);
        assert!(placement.content_rect.height <= slot.rect.height + 0.01);
    }
    for pair in placements.windows(2) {
        let gap = pair[0].content_rect.y - pair[1].content_rect.top();
        assert!(approx(gap, gutter));
    }

    let last = placements.last().unwrap();
    assert!(approx(last.content_rect.y, margin));
}

#[test]
fn test_place_page_uses_height_left_below_cursor() {
    let slot = Slot {
        sheet_index: 0,
        position: 1,
        rect: Rect::new(50.0, 100.0, 400.0, 300.0),
    };
    // Cursor sits 50pt below the slot top
    let placement = place_page(&slot, 2, 350.0, 1000.0, 1000.0);

    assert!(approx(placement.scale, 0.25));
    assert!(approx(placement.content_rect.height, 250.0));
    assert!(approx(placement.content_rect.y, 100.0));
}
