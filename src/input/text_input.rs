use crate::text::{display_width, next_grapheme_boundary, prev_grapheme_boundary};
use unicode_segmentation::UnicodeSegmentation;

/// Maximum characters accepted in a task description
pub const CHAR_LIMIT: usize = 156;

/// Single-line text buffer with a cursor, used while adding a task.
///
/// The cursor is a byte offset that always sits on a grapheme cluster
/// boundary, so moving and deleting treat "e" plus a combining accent as
/// one character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> String {
        self.value.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of characters typed so far
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert at the cursor; ignored once the limit is reached
    pub fn insert(&mut self, c: char) {
        if c.is_control() || self.len() >= CHAR_LIMIT {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.value, self.cursor) {
            self.value.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.value, self.cursor) {
            self.value.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.value, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.value, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Delete the word before the cursor (Ctrl+W)
    pub fn delete_word(&mut self) {
        let head = self.value[..self.cursor].trim_end();
        let start = head
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        self.value.drain(start..self.cursor);
        self.cursor = start;
    }

    /// The part of the buffer to show in a field `width` cells wide, and the
    /// cursor column within it. Scrolls horizontally to keep the cursor in
    /// view with one spare cell for the cursor itself.
    pub fn visible(&self, width: usize) -> (String, usize) {
        let width = width.max(1);
        let graphemes: Vec<(usize, &str)> = self.value.grapheme_indices(true).collect();
        let widths: Vec<usize> = graphemes.iter().map(|(_, g)| display_width(g)).collect();
        let cursor_index = graphemes
            .iter()
            .position(|(i, _)| *i >= self.cursor)
            .unwrap_or(graphemes.len());

        let mut start = 0;
        while start < cursor_index && widths[start..cursor_index].iter().sum::<usize>() >= width {
            start += 1;
        }

        let mut shown = String::new();
        let mut used = 0;
        for ((_, grapheme), w) in graphemes[start..].iter().zip(&widths[start..]) {
            if used + w > width {
                break;
            }
            used += w;
            shown.push_str(grapheme);
        }

        let cursor_col = widths[start..cursor_index].iter().sum();
        (shown, cursor_col)
    }
}
