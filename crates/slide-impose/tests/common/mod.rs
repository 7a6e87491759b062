use image::{Rgb, RgbImage};
use slide_impose::{ImposeError, PageSource, Result};

/// In-memory document whose pages render as solid light-grey rectangles
pub struct FakeSource {
    pub title: String,
    /// Page sizes in points
    pub pages: Vec<(u32, u32)>,
    /// Page index whose rasterization fails
    pub failing_page: Option<usize>,
}

impl FakeSource {
    /// `count` landscape 16:9 slides
    pub fn slides(title: &str, count: usize) -> Self {
        Self {
            title: title.to_string(),
            pages: vec![(320, 180); count],
            failing_page: None,
        }
    }
}

impl PageSource for FakeSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn render_page(&self, index: usize, scale: f32) -> Result<RgbImage> {
        if self.failing_page == Some(index) {
            return Err(ImposeError::Render {
                page: index,
                message: "corrupt content stream".to_string(),
            });
        }
        let (w, h) = self.pages[index];
        let width = (w as f32 * scale).round() as u32;
        let height = (h as f32 * scale).round() as u32;
        Ok(RgbImage::from_pixel(width, height, Rgb([230, 230, 230])))
    }
}
