use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-run processing configuration, supplied by the caller for every
/// document and never mutated while a document is being processed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProcessingConfig {
    // Page selection
    pub skip_first_page: bool,

    // Title line
    pub add_title: bool,
    pub title_on_first_sheet_only: bool,

    // Imposition
    pub pages_per_sheet: usize,

    // Output sheet
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub margin_mm: f32,
    pub gutter_mm: f32,

    // Rendering
    pub render_scale: f32,
    pub invert_colors: bool,

    // Text
    pub title_font_size: f32,
    pub label_font_size: f32,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            skip_first_page: true,
            add_title: true,
            title_on_first_sheet_only: false,
            pages_per_sheet: DEFAULT_PAGES_PER_SHEET,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_mm: DEFAULT_MARGIN_MM,
            gutter_mm: DEFAULT_GUTTER_MM,
            render_scale: DEFAULT_RENDER_SCALE,
            invert_colors: true,
            title_font_size: TITLE_FONT_SIZE,
            label_font_size: PAGE_NUMBER_FONT_SIZE,
        }
    }
}

impl ProcessingConfig {
    /// Load configuration from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Output sheet size in points, orientation applied
    pub fn sheet_size_pt(&self) -> (f32, f32) {
        let (w, h) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        (mm_to_pt(w), mm_to_pt(h))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.pages_per_sheet == 0 {
            return Err(ImposeError::Config(
                "Pages per sheet must be at least 1".to_string(),
            ));
        }

        if !self.margin_mm.is_finite() || self.margin_mm < 0.0 {
            return Err(ImposeError::Config(format!(
                "Margin must be a non-negative number of millimeters, got {}",
                self.margin_mm
            )));
        }

        if !self.gutter_mm.is_finite() || self.gutter_mm < 0.0 {
            return Err(ImposeError::Config(format!(
                "Gutter must be a non-negative number of millimeters, got {}",
                self.gutter_mm
            )));
        }

        if !self.render_scale.is_finite() || self.render_scale <= 0.0 {
            return Err(ImposeError::Config(format!(
                "Render scale must be positive, got {}",
                self.render_scale
            )));
        }

        for (name, size) in [
            ("Title font size", self.title_font_size),
            ("Page number font size", self.label_font_size),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ImposeError::Config(format!(
                    "{} must be positive, got {}",
                    name, size
                )));
            }
        }

        let (width_mm, height_mm) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        if width_mm <= 2.0 * self.margin_mm || height_mm <= 2.0 * self.margin_mm {
            return Err(ImposeError::Config(format!(
                "A {} mm margin leaves no printable area on a {} x {} mm sheet",
                self.margin_mm, width_mm, height_mm
            )));
        }

        Ok(())
    }
}
