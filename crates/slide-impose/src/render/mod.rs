//! Page rendering modules for imposition
//!
//! This module handles everything between a source page and the pixels
//! drawn on the output sheet:
//! - Rasterizing source pages and inverting their colors
//! - Embedding rasters as image XObjects in the output document

mod raster;
mod xobject;

pub use raster::*;
pub use xobject::create_image_xobject;
