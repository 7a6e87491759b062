//! Rasterization of source pages

use crate::source::PageSource;
use crate::types::*;
use image::RgbImage;
use image::imageops;

/// One source page rasterized for placement on a sheet.
///
/// Lives only for the slot it is drawn into.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// 0-based source page index
    pub source_page: usize,
    pub image: RgbImage,
}

impl RenderedPage {
    /// Pixel size as floats, for layout
    pub fn size(&self) -> (f32, f32) {
        (self.image.width() as f32, self.image.height() as f32)
    }
}

/// Rasterize `index` at `scale` and optionally invert its colors
pub fn render_page<S: PageSource + ?Sized>(
    source: &S,
    index: usize,
    scale: f32,
    invert: bool,
) -> Result<RenderedPage> {
    let mut image = source.render_page(index, scale)?;

    if image.width() == 0 || image.height() == 0 {
        return Err(ImposeError::Render {
            page: index,
            message: "rendered page has zero dimensions".to_string(),
        });
    }

    if invert {
        invert_colors(&mut image);
    }

    Ok(RenderedPage {
        source_page: index,
        image,
    })
}

/// Invert every channel in place (`v -> 255 - v`)
pub fn invert_colors(image: &mut RgbImage) {
    imageops::invert(image);
}
