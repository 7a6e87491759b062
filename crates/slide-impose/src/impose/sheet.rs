//! Sheet rendering for imposition

use crate::constants::FONT_RESOURCE_NAME;
use crate::layout::{PagePlacement, SheetLayout, compute_sheet_layout, next_cursor, place_page};
use crate::options::ProcessingConfig;
use crate::plan::Sheet;
use crate::render::{create_image_xobject, render_page};
use crate::source::PageSource;
use crate::text::{format_title_line, pdf_text, text_width};
use crate::types::*;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Everything that stays the same for every sheet of one document
pub(crate) struct SheetContext<'a> {
    pub title: &'a str,
    pub sheet_count: usize,
    pub sheet_size: (f32, f32),
    pub margin: f32,
    pub gutter: f32,
    pub font_id: ObjectId,
    pub parent_pages_id: ObjectId,
    pub config: &'a ProcessingConfig,
}

/// A composed sheet, kept so callers can inspect what went where
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedSheet {
    pub sheet: Sheet,
    pub layout: SheetLayout,
    pub placements: Vec<PagePlacement>,
    /// The header line drawn on this sheet, if any
    pub title_line: Option<String>,
}

/// Whether the title line goes on `sheet_index`
pub fn sheet_has_title(config: &ProcessingConfig, sheet_index: usize) -> bool {
    config.add_title && (sheet_index == 0 || !config.title_on_first_sheet_only)
}

/// Render one sheet into a new page of `output`.
///
/// `on_page_placed` runs once after each source page has been drawn.
pub(crate) fn render_sheet<S, F>(
    output: &mut Document,
    source: &S,
    sheet: &Sheet,
    ctx: &SheetContext<'_>,
    on_page_placed: &mut F,
) -> Result<(ObjectId, ComposedSheet)>
where
    S: PageSource + ?Sized,
    F: FnMut(usize),
{
    let config = ctx.config;
    let draw_title = sheet_has_title(config, sheet.index);
    let layout = compute_sheet_layout(
        sheet.index,
        sheet.page_count(),
        ctx.sheet_size,
        ctx.margin,
        draw_title,
    );

    let mut operations = Vec::new();
    let mut xobjects = Dictionary::new();

    // Title line
    let title_line = layout.title.map(|area| {
        let line = format_title_line(
            ctx.title,
            sheet.index,
            ctx.sheet_count,
            area.max_width,
            config.title_font_size,
        );
        push_text(
            &mut operations,
            &line,
            config.title_font_size,
            area.x,
            area.baseline_y,
        );
        line
    });

    // Pages, top to bottom
    let mut placements = Vec::with_capacity(sheet.page_count());
    let mut cursor = layout.usable_top;
    for (slot, &source_page) in layout.slots.iter().zip(&sheet.source_pages) {
        let rendered = render_page(source, source_page, config.render_scale, config.invert_colors)?;
        let (image_width, image_height) = rendered.size();
        let placement = place_page(slot, source_page, cursor, image_width, image_height);
        cursor = next_cursor(&placement, ctx.gutter);

        let xobject_name = format!("Im{}", slot.position);
        let xobject_id = create_image_xobject(output, &rendered.image)?;
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        let rect = &placement.content_rect;
        operations.push(Operation::new("q", vec![]));
        operations.push(Operation::new(
            "cm",
            vec![
                rect.width.into(),
                Object::Integer(0),
                Object::Integer(0),
                rect.height.into(),
                rect.x.into(),
                rect.y.into(),
            ],
        ));
        operations.push(Operation::new(
            "Do",
            vec![Object::Name(xobject_name.into_bytes())],
        ));
        operations.push(Operation::new("Q", vec![]));

        // Page number, right-aligned to the slot just below the image
        let label = format!("Page {}", source_page + 1);
        let label_x = slot.rect.right() - text_width(&label, config.label_font_size);
        let label_y = rect.y - config.label_font_size;
        push_text(
            &mut operations,
            &label,
            config.label_font_size,
            label_x,
            label_y,
        );

        log::debug!(
            "Sheet {}: placed page {} at ({:.1}, {:.1}) scale {:.3}",
            sheet.index + 1,
            source_page + 1,
            rect.x,
            rect.y,
            placement.scale
        );
        placements.push(placement);
        on_page_placed(source_page);
    }

    // Build resources
    let mut fonts = Dictionary::new();
    fonts.set(FONT_RESOURCE_NAME, Object::Reference(ctx.font_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));
    resources.set("Font", Object::Dictionary(fonts));

    // Create content stream
    let content = Content { operations }.encode()?;
    let content_id = output.add_object(Stream::new(Dictionary::new(), content));

    let (sheet_width, sheet_height) = ctx.sheet_size;
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(ctx.parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(sheet_width),
            Object::Real(sheet_height),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    let page_id = output.add_object(page_dict);

    Ok((
        page_id,
        ComposedSheet {
            sheet: sheet.clone(),
            layout,
            placements,
            title_line,
        },
    ))
}

fn push_text(operations: &mut Vec<Operation>, text: &str, font_size: f32, x: f32, y: f32) {
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![
            Object::Name(FONT_RESOURCE_NAME.as_bytes().to_vec()),
            font_size.into(),
        ],
    ));
    operations.push(Operation::new("Td", vec![x.into(), y.into()]));
    operations.push(Operation::new("Tj", vec![pdf_text(text)]));
    operations.push(Operation::new("ET", vec![]));
}
