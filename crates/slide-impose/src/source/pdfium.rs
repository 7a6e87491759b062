use super::{PageSource, resolve_title};
use crate::types::*;
use image::RgbImage;
use pdfium_render::prelude::*;
use std::path::Path;

/// Environment variable naming a directory that contains the PDFium library
pub const PDFIUM_LIB_DIR_ENV: &str = "PDFIUM_LIB_DIR";

/// Initialize Pdfium, trying `$PDFIUM_LIB_DIR`, then the vendored library,
/// then falling back to the system library
pub fn init_pdfium() -> Result<Pdfium> {
    let env_path = std::env::var_os(PDFIUM_LIB_DIR_ENV).map(std::path::PathBuf::from);

    // When running from cargo, the working directory is the workspace root
    let vendor_path = std::env::current_dir().ok().map(|mut p| {
        p.push("vendor/pdfium/lib");
        p
    });

    for dir in env_path.into_iter().chain(vendor_path) {
        if !dir.exists() {
            continue;
        }
        match Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&dir)) {
            Ok(binding) => {
                log::debug!("Bound PDFium from {}", dir.display());
                return Ok(Pdfium::new(binding));
            }
            Err(e) => log::debug!("Could not bind PDFium from {}: {}", dir.display(), e),
        }
    }

    Ok(Pdfium::bind_to_system_library().map(Pdfium::new)?)
}

/// A PDF opened through PDFium
pub struct PdfiumSource<'a> {
    document: PdfDocument<'a>,
    title: String,
}

impl<'a> PdfiumSource<'a> {
    /// Open a PDF from its bytes; `path` is only used to derive a fallback title
    pub fn open(pdfium: &'a Pdfium, bytes: Vec<u8>, path: &Path) -> Result<Self> {
        let document = pdfium.load_pdf_from_byte_vec(bytes, None)?;

        let metadata_title = document
            .metadata()
            .get(PdfDocumentMetadataTagType::Title)
            .map(|tag| tag.value().to_string());
        let title = resolve_title(metadata_title.as_deref(), path);

        Ok(Self { document, title })
    }
}

impl PageSource for PdfiumSource<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn render_page(&self, index: usize, scale: f32) -> Result<RgbImage> {
        let render_error = |message: String| ImposeError::Render {
            page: index,
            message,
        };

        let page_index = u16::try_from(index)
            .map_err(|_| render_error("page index exceeds PDFium limits".to_string()))?;
        let page = self
            .document
            .pages()
            .get(page_index)
            .map_err(|e| render_error(e.to_string()))?;

        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| render_error(e.to_string()))?;

        Ok(bitmap.as_image().into_rgb8())
    }
}
