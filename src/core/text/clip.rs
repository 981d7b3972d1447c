//! Visual clipping of an already-decided line.
//!
//! The fitter never cuts an identifier; this is only used by the presentation layer when the
//! lone first identifier is wider than the space it was given.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{cell_width, grapheme_width};

/// Clip `text` to at most `max_cells` cells, ending in `ellipsis` when anything was cut.
pub fn clip_to_cells(text: &str, max_cells: usize, ellipsis: &str) -> String {
    if max_cells == 0 {
        return String::new();
    }

    if cell_width(text) <= max_cells {
        return text.to_string();
    }

    let ellipsis_cells = cell_width(ellipsis);
    let target = max_cells.saturating_sub(ellipsis_cells);
    if target == 0 {
        return ellipsis.chars().take(max_cells).collect();
    }

    let mut clipped = String::with_capacity(text.len().min(max_cells * 4) + ellipsis.len());
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let width = grapheme_width(grapheme);
        if used + width > target {
            break;
        }
        clipped.push_str(grapheme);
        used += width;
    }
    clipped.push_str(ellipsis);
    clipped
}

/// Right-pad `text` with spaces up to `cells` cells.
pub fn pad_to_cells(text: &str, cells: usize) -> String {
    let padding = cells.saturating_sub(cell_width(text));
    format!("{text}{}", " ".repeat(padding))
}
