//! Text measurement and title formatting
//!
//! Widths come from the standard Helvetica metrics. Title truncation then
//! assumes every character is as wide as the average character of the full
//! line, which is only good enough to avoid gross overflow.

use crate::constants::{ELLIPSIS, HELVETICA_DEFAULT_WIDTH, HELVETICA_WIDTHS};
use lopdf::{Object, StringFormat};

/// Advance width of `ch` in 1/1000 em
fn char_width(ch: char) -> u16 {
    match ch {
        ' '..='~' => HELVETICA_WIDTHS[ch as usize - 0x20],
        _ => HELVETICA_DEFAULT_WIDTH,
    }
}

/// Width of `text` set in Helvetica at `font_size`, in points
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(ch))).sum();
    units as f32 * font_size / 1000.0
}

/// The fixed part of the title line that is never truncated
pub fn sheet_suffix(sheet_index: usize, sheet_count: usize) -> String {
    format!(" - Sheet {}/{}", sheet_index + 1, sheet_count)
}

/// Build the header line `"{title} - Sheet {i+1}/{N}"`, shortening the title
/// with `"..."` when the line would be wider than `max_width`.
pub fn format_title_line(
    title: &str,
    sheet_index: usize,
    sheet_count: usize,
    max_width: f32,
    font_size: f32,
) -> String {
    let suffix = sheet_suffix(sheet_index, sheet_count);
    let line = format!("{}{}", title, suffix);

    let width = text_width(&line, font_size);
    if width <= max_width {
        return line;
    }

    let line_chars = line.chars().count();
    let avg_char_width = width / line_chars as f32;
    let fitting_chars = (max_width / avg_char_width).floor() as usize;
    let keep = fitting_chars
        .saturating_sub(ELLIPSIS.len())
        .saturating_sub(suffix.chars().count());

    let truncated: String = title.chars().take(keep).collect();
    format!("{}{}{}", truncated, ELLIPSIS, suffix)
}

/// Encode `text` as a literal PDF string for a WinAnsi-encoded base font.
///
/// Characters outside Latin-1 have no glyph in the standard fonts and are
/// replaced by `?`.
pub fn pdf_text(text: &str) -> Object {
    let bytes = text
        .chars()
        .map(|ch| u8::try_from(u32::from(ch)).unwrap_or(b'?'))
        .collect();
    Object::String(bytes, StringFormat::Literal)
}
