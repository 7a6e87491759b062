use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("{0} has no pages to process")]
    EmptyDocument(String),
    #[error("Failed to render page {page}: {message}")]
    Render { page: usize, message: String },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("PDFium error: {0}")]
    Pdfium(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl From<pdfium_render::prelude::PdfiumError> for ImposeError {
    fn from(err: pdfium_render::prelude::PdfiumError) -> Self {
        ImposeError::Pdfium(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (slide handouts are printed this way)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Counts describing how a document will be laid out, computed without
/// rasterizing anything.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpositionStatistics {
    /// Pages in the source document
    pub source_pages: usize,
    /// Pages left after applying the skip-first-page policy
    pub selected_pages: usize,
    /// Maximum source pages placed on one output sheet
    pub pages_per_sheet: usize,
    /// Number of output sheets (output pages)
    pub output_sheets: usize,
    /// Source pages placed on the final sheet
    pub pages_on_last_sheet: usize,
}
