use std::ops::Range;

/// Offset that keeps `cursor` inside a window of `height` rows.
///
/// Scrolls up when the cursor is above the window and down just far enough
/// when it is below; otherwise the offset is left alone.
pub fn ensure_cursor_visible(cursor: usize, offset: usize, height: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let height = height.max(1);
    if cursor < offset {
        cursor
    } else if cursor >= offset + height {
        cursor + 1 - height
    } else {
        offset
    }
}

/// Visible window onto the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            height: height.max(1),
        }
    }

    #[cfg(test)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Change the number of rows, keeping the cursor in view
    pub fn resize(&mut self, height: usize, cursor: usize, count: usize) {
        self.height = height.max(1);
        self.follow(cursor, count);
    }

    /// Scroll so the cursor row is visible.
    ///
    /// The offset never leaves blank rows below the last task while earlier
    /// tasks are scrolled out, so a shrinking list or a taller window pulls
    /// the view back up.
    pub fn follow(&mut self, cursor: usize, count: usize) {
        let offset = ensure_cursor_visible(cursor, self.offset, self.height, count);
        self.offset = offset.min(count.saturating_sub(self.height));
    }

    /// Rows to draw for a list of `count` items
    pub fn visible_range(&self, count: usize) -> Range<usize> {
        let start = self.offset.min(count);
        let end = (self.offset + self.height).min(count);
        start..end
    }
}

/// Cursor after moving by `delta` rows, without wrapping.
///
/// A single step past either end leaves the cursor where it is; larger
/// jumps (page moves) stop at the first or last row.
pub fn step_cursor(cursor: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let last = count - 1;
    let cursor = cursor.min(last);
    if delta < 0 {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        cursor.saturating_add(delta as usize).min(last)
    }
}

/// Cursor after removing a row from a list that now has `count` items
pub fn clamp_cursor(cursor: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        cursor.min(count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_visible_scrolls_down() {
        // 20 tasks, 5 rows, cursor jumps to 17
        assert_eq!(ensure_cursor_visible(17, 0, 5, 20), 13);
    }

    #[test]
    fn test_ensure_visible_scrolls_up() {
        assert_eq!(ensure_cursor_visible(2, 10, 5, 20), 2);
    }

    #[test]
    fn test_ensure_visible_unchanged_inside_window() {
        assert_eq!(ensure_cursor_visible(12, 10, 5, 20), 10);
        assert_eq!(ensure_cursor_visible(14, 10, 5, 20), 10);
        assert_eq!(ensure_cursor_visible(15, 10, 5, 20), 11);
    }

    #[test]
    fn test_ensure_visible_empty_list() {
        assert_eq!(ensure_cursor_visible(0, 7, 5, 0), 0);
    }

    #[test]
    fn test_step_cursor_does_not_wrap() {
        assert_eq!(step_cursor(0, -1, 4), 0);
        assert_eq!(step_cursor(3, 1, 4), 3);
        assert_eq!(step_cursor(1, 1, 4), 2);
        assert_eq!(step_cursor(2, -1, 4), 1);
        assert_eq!(step_cursor(0, 1, 0), 0);
    }

    #[test]
    fn test_step_cursor_page_moves_clamp() {
        assert_eq!(step_cursor(2, 10, 6), 5);
        assert_eq!(step_cursor(4, -10, 6), 0);
    }

    #[test]
    fn test_clamp_cursor() {
        assert_eq!(clamp_cursor(3, 3), 2);
        assert_eq!(clamp_cursor(1, 3), 1);
        assert_eq!(clamp_cursor(0, 0), 0);
    }

    #[test]
    fn test_viewport_resize_keeps_cursor_visible() {
        let mut viewport = Viewport::new(10);
        viewport.follow(9, 20);
        assert_eq!(viewport.offset(), 0);

        viewport.resize(3, 9, 20);
        assert_eq!(viewport.height(), 3);
        assert_eq!(viewport.offset(), 7);
        assert!(viewport.visible_range(20).contains(&9));
    }

    #[test]
    fn test_viewport_height_floor() {
        let mut viewport = Viewport::new(0);
        assert_eq!(viewport.height(), 1);
        viewport.resize(0, 4, 10);
        assert_eq!(viewport.height(), 1);
        assert_eq!(viewport.offset(), 4);
    }

    #[test]
    fn test_visible_range_short_list() {
        let viewport = Viewport::new(5);
        assert_eq!(viewport.visible_range(3), 0..3);
        assert_eq!(viewport.visible_range(0), 0..0);
    }

    #[test]
    fn test_growing_window_pulls_offset_back() {
        let mut viewport = Viewport::new(5);
        viewport.follow(19, 20);
        assert_eq!(viewport.offset(), 15);

        viewport.resize(30, 19, 20);
        assert_eq!(viewport.offset(), 0);
        assert_eq!(viewport.visible_range(20), 0..20);
    }

    #[test]
    fn test_shrinking_list_pulls_offset_back() {
        let mut viewport = Viewport::new(5);
        viewport.follow(19, 20);

        // Rows removed from the bottom, cursor stays on the last one
        viewport.follow(11, 12);
        assert_eq!(viewport.offset(), 7);
        assert_eq!(viewport.visible_range(12), 7..12);

        viewport.follow(3, 4);
        assert_eq!(viewport.offset(), 0);
        assert_eq!(viewport.visible_range(4), 0..4);
    }
}
