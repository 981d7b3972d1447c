//! Grapheme cell widths for terminal-grid measurement.

use emojis::get as emoji_get;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

const TAB_WIDTH: usize = 3;

/// Cell width of a single grapheme cluster.
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }
    if grapheme == "\t" {
        return TAB_WIDTH;
    }

    // RGI emoji sequences render as one double-width cell pair regardless of their
    // code point count.
    if emoji_get(grapheme).is_some() {
        return 2;
    }

    grapheme
        .chars()
        .map(|ch| {
            if ch == '\t' {
                TAB_WIDTH
            } else {
                UnicodeWidthChar::width(ch).unwrap_or(0)
            }
        })
        .sum()
}

/// Number of terminal cells `text` occupies on a single line.
pub fn cell_width(text: &str) -> usize {
    text.graphemes(true).map(grapheme_width).sum()
}

#[cfg(test)]
mod tests {
    use super::{cell_width, grapheme_width};

    #[test]
    fn ascii_address_is_one_cell_per_char() {
        assert_eq!(cell_width("a@x.com"), 7);
        assert_eq!(cell_width(", ..."), 5);
    }

    #[test]
    fn rgi_emoji_width_is_two() {
        assert_eq!(cell_width("😀"), 2);
        assert_eq!(grapheme_width("❤️"), 2);
    }

    #[test]
    fn wide_and_zero_width_chars() {
        assert_eq!(cell_width("日本"), 4);
        assert_eq!(cell_width("e\u{301}"), 1);
        assert_eq!(cell_width(""), 0);
    }

    #[test]
    fn tabs_expand_to_three_cells() {
        assert_eq!(cell_width("a\tb"), 5);
    }
}
