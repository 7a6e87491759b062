//! Imposition planning: partition the selected pages into output sheets

use crate::selection::PageRange;

/// One output sheet and the source pages it carries, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// 0-based sheet index
    pub index: usize,
    /// 0-based source page indices in placement order
    pub source_pages: Vec<usize>,
}

impl Sheet {
    pub fn page_count(&self) -> usize {
        self.source_pages.len()
    }
}

/// The full sheet assignment for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpositionPlan {
    pub sheets: Vec<Sheet>,
    /// Number of selected source pages across all sheets
    pub total_pages: usize,
    pub pages_per_sheet: usize,
}

impl ImpositionPlan {
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

/// Number of sheets needed for `total_pages` at `pages_per_sheet` each
pub fn sheet_count(total_pages: usize, pages_per_sheet: usize) -> usize {
    total_pages.div_ceil(pages_per_sheet)
}

/// Split `range` into consecutive sheets of at most `pages_per_sheet` pages.
///
/// # Panics
///
/// Panics if `pages_per_sheet` is 0. `ProcessingConfig::validate` rejects
/// that value before any entry point in this crate plans sheets.
pub fn plan_sheets(range: PageRange, pages_per_sheet: usize) -> ImpositionPlan {
    let indices: Vec<usize> = range.indices().collect();
    let sheets = indices
        .chunks(pages_per_sheet)
        .enumerate()
        .map(|(index, chunk)| Sheet {
            index,
            source_pages: chunk.to_vec(),
        })
        .collect();

    ImpositionPlan {
        sheets,
        total_pages: range.len(),
        pages_per_sheet,
    }
}
