//! Page selection: which source pages take part in the imposition

use crate::types::*;
use std::ops::Range;

/// Ordered, contiguous run of 0-based source page indices to lay out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    /// First selected source page
    pub start: usize,
    /// One past the last selected source page
    pub end: usize,
}

impl PageRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Select the pages to process, dropping the cover page when
/// `skip_first_page` is set.
///
/// `name` only appears in the error when nothing is left to lay out.
pub fn select_pages(page_count: usize, skip_first_page: bool, name: &str) -> Result<PageRange> {
    let start = usize::from(skip_first_page);
    let range = PageRange {
        start,
        end: page_count.max(start),
    };

    if range.is_empty() {
        return Err(ImposeError::EmptyDocument(name.to_string()));
    }

    Ok(range)
}
