//! Layout calculation modules for imposition
//!
//! This module handles all the geometric calculations for a sheet:
//! - Slot layout (title area and equal-height stacked slots)
//! - Content placement (aspect-preserving fit, tight vertical packing)

mod placement;
mod slots;
mod types;

pub use placement::*;
pub use slots::*;
pub use types::*;
