//! Source documents: page count, rasterization and a best-effort title
//!
//! The engine only talks to [`PageSource`]; [`PdfiumSource`] is the
//! production implementation backed by PDFium.

mod pdfium;

pub use pdfium::{PdfiumSource, init_pdfium};

use crate::types::*;
use image::RgbImage;
use std::path::Path;

/// An open document whose pages can be rasterized one at a time
pub trait PageSource {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Title used for the sheet header line
    fn title(&self) -> &str;

    /// Rasterize page `index` (0-based) at `scale` times the 72 dpi point grid
    fn render_page(&self, index: usize, scale: f32) -> Result<RgbImage>;
}

/// Pick the document title: the metadata title when it has any
/// non-whitespace content, else the file name without its extension.
pub fn resolve_title(metadata_title: Option<&str>, path: &Path) -> String {
    match metadata_title.map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string()),
    }
}

/// File name used to identify a document in errors and batch reports
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
