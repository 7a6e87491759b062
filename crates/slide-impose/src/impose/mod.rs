//! Slide imposition - packing several source pages onto each printed sheet
//!
//! This module orchestrates the imposition process:
//! 1. Open the source document and select the pages to print
//! 2. Partition the selection into sheets
//! 3. Lay out, rasterize and place every page of every sheet
//! 4. Write the output PDF

mod io;
mod sheet;

pub use io::{save_pdf, write_pdf};
pub use sheet::{ComposedSheet, sheet_has_title};

use crate::constants::{LABEL_BASE_FONT, mm_to_pt};
use crate::options::ProcessingConfig;
use crate::plan::plan_sheets;
use crate::selection::select_pages;
use crate::source::{PageSource, PdfiumSource, document_name, init_pdfium};
use crate::text::pdf_text;
use crate::types::*;
use lopdf::{Dictionary, Document, Object};
use sheet::{SheetContext, render_sheet};
use std::path::{Path, PathBuf};

/// The in-memory result of imposing one document
#[derive(Debug)]
pub struct ImposedDocument {
    /// Output PDF, one page per sheet
    pub document: Document,
    /// What was placed on each sheet, in sheet order
    pub sheets: Vec<ComposedSheet>,
    /// Number of source pages placed
    pub total_pages: usize,
}

impl ImposedDocument {
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

/// Process one PDF: impose `input` and write the result to `output`.
///
/// `on_progress(done, total)` is called after every placed page. Returns the
/// number of output sheets. Runs the work on the blocking thread pool.
pub async fn process<F>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ProcessingConfig,
    on_progress: F,
) -> Result<usize>
where
    F: FnMut(usize, usize) + Send + 'static,
{
    config.validate()?;

    let input: PathBuf = input.as_ref().to_owned();
    let output: PathBuf = output.as_ref().to_owned();
    let config = config.clone();

    tokio::task::spawn_blocking(move || process_blocking(&input, &output, &config, on_progress))
        .await?
}

/// Synchronous version of [`process`]
pub fn process_blocking<F>(
    input: &Path,
    output: &Path,
    config: &ProcessingConfig,
    on_progress: F,
) -> Result<usize>
where
    F: FnMut(usize, usize),
{
    config.validate()?;

    let bytes = std::fs::read(input)?;
    let pdfium = init_pdfium()?;
    let source = PdfiumSource::open(&pdfium, bytes, input)?;

    let imposed = impose_source(&source, config, on_progress).map_err(|e| match e {
        ImposeError::EmptyDocument(_) => ImposeError::EmptyDocument(document_name(input)),
        other => other,
    })?;
    let sheet_count = imposed.sheet_count();

    // Nothing reaches the output path until every page has rendered
    write_pdf(imposed.document, output)?;

    log::info!(
        "Imposed {} pages of {} onto {} sheets -> {}",
        imposed.total_pages,
        document_name(input),
        sheet_count,
        output.display()
    );

    Ok(sheet_count)
}

/// Impose every selected page of `source` into a new in-memory PDF.
pub fn impose_source<S, F>(
    source: &S,
    config: &ProcessingConfig,
    mut on_progress: F,
) -> Result<ImposedDocument>
where
    S: PageSource + ?Sized,
    F: FnMut(usize, usize),
{
    config.validate()?;

    let range = select_pages(source.page_count(), config.skip_first_page, source.title())?;
    let plan = plan_sheets(range, config.pages_per_sheet);
    let total_pages = plan.total_pages;

    log::debug!(
        "{}: {} pages selected, {} sheets of up to {}",
        source.title(),
        total_pages,
        plan.sheet_count(),
        plan.pages_per_sheet
    );

    // Build output document
    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();

    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(LABEL_BASE_FONT.as_bytes().to_vec()));
    font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    let font_id = output.add_object(font_dict);

    let ctx = SheetContext {
        title: source.title(),
        sheet_count: plan.sheet_count(),
        sheet_size: config.sheet_size_pt(),
        margin: mm_to_pt(config.margin_mm),
        gutter: mm_to_pt(config.gutter_mm),
        font_id,
        parent_pages_id: pages_tree_id,
        config,
    };

    let mut pages_done = 0;
    let mut report = |_source_page: usize| {
        pages_done += 1;
        on_progress(pages_done, total_pages);
    };

    let mut page_refs = Vec::with_capacity(plan.sheet_count());
    let mut sheets = Vec::with_capacity(plan.sheet_count());
    for sheet in &plan.sheets {
        let (page_id, composed) = render_sheet(&mut output, source, sheet, &ctx, &mut report)?;
        page_refs.push(Object::Reference(page_id));
        sheets.push(composed);
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));
    output.trailer.set("Root", catalog_id);

    let info_id = output.add_object(Dictionary::from_iter(vec![
        ("Title", pdf_text(source.title())),
        ("Producer", pdf_text(concat!("slide-impose ", env!("CARGO_PKG_VERSION")))),
    ]));
    output.trailer.set("Info", info_id);

    Ok(ImposedDocument {
        document: output,
        sheets,
        total_pages,
    })
}
