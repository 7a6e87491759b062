use crate::options::ProcessingConfig;
use crate::plan::sheet_count;
use crate::selection::select_pages;
use crate::types::*;

/// Calculate statistics for a document with `page_count` pages, without
/// rendering anything
pub fn calculate_statistics(
    page_count: usize,
    config: &ProcessingConfig,
) -> Result<ImpositionStatistics> {
    config.validate()?;

    let range = select_pages(page_count, config.skip_first_page, "document")?;
    let selected_pages = range.len();
    let output_sheets = sheet_count(selected_pages, config.pages_per_sheet);

    // Whatever the full sheets did not absorb lands on the last one
    let remainder = selected_pages % config.pages_per_sheet;
    let pages_on_last_sheet = if remainder == 0 {
        config.pages_per_sheet
    } else {
        remainder
    };

    Ok(ImpositionStatistics {
        source_pages: page_count,
        selected_pages,
        pages_per_sheet: config.pages_per_sheet,
        output_sheets,
        pages_on_last_sheet,
    })
}
