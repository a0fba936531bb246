//! Display-width helpers for fixed-column terminal lines.
//!
//! Widths are measured in terminal cells and strings are only ever cut at
//! grapheme cluster boundaries, so wide characters are never split.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const ELLIPSIS: &str = "...";

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Longest prefix of `s` that fits in `max_cells`, and its width
fn take_width(s: &str, max_cells: usize) -> (&str, usize) {
    let mut width = 0;
    let mut end = 0;
    for (i, grapheme) in s.grapheme_indices(true) {
        let gw = display_width(grapheme);
        if width + gw > max_cells {
            break;
        }
        width += gw;
        end = i + grapheme.len();
    }
    (&s[..end], width)
}

/// Shorten `s` to at most `max_cells`, ending with `...` when cut.
///
/// Strings that already fit are returned unchanged. Budgets narrower than
/// the ellipsis get as many dots as fit.
pub fn truncate_with_ellipsis(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    let ellipsis_width = display_width(ELLIPSIS);
    if max_cells < ellipsis_width {
        return ".".repeat(max_cells);
    }
    let (head, _) = take_width(s, max_cells - ellipsis_width);
    format!("{}{}", head, ELLIPSIS)
}

/// Pad with spaces on the right up to `width` cells (never cuts)
pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Pad with spaces on the left up to `width` cells (never cuts)
pub fn pad_left(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// Clip and pad so the result is exactly `width` cells wide
pub fn fit_to_width(s: &str, width: usize) -> String {
    let (head, w) = take_width(s, width);
    format!("{}{}", head, " ".repeat(width - w))
}

/// Center `s` in `width` cells, clipping when it does not fit
pub fn center(s: &str, width: usize) -> String {
    let (head, w) = take_width(s, width);
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{}{}", " ".repeat(left), head, " ".repeat(right))
}

/// Byte offset of the grapheme boundary after `byte_offset`, `None` at the end
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let next = s[byte_offset..]
        .grapheme_indices(true)
        .nth(1)
        .map_or(s.len(), |(i, _)| byte_offset + i);
    Some(next)
}

/// Byte offset of the grapheme boundary before `byte_offset`, `None` at the start
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}
