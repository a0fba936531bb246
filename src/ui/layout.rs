use crate::domain::UiMode;
use crate::text::display_width;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Prompt shown in front of the text field
pub const INPUT_PROMPT: &str = "New Task: ";

/// Outer padding on every side of the screen
const PADDING: u16 = 1;
/// Border rows/columns around the task list
const LIST_FRAME: u16 = 2;
/// Border columns around the input box
const INPUT_FRAME: u16 = 2;
/// Narrowest text field we will lay out
const MIN_INPUT_WIDTH: u16 = 10;

/// Heights of the fixed bands around the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    /// Title plus the blank row under it
    pub title: u16,
    /// Error box, zero when there is no error
    pub error: u16,
    pub stats: u16,
    /// Calendar indicator plus the blank row under it
    pub calendar: u16,
    /// Input box, only laid out while adding
    pub input: u16,
    pub help: u16,
}

impl Chrome {
    pub fn new(has_error: bool) -> Self {
        Self {
            title: 2,
            error: if has_error { 3 } else { 0 },
            stats: 1,
            calendar: 2,
            input: 4,
            help: 1,
        }
    }

    fn input_height(&self, mode: UiMode) -> u16 {
        match mode {
            UiMode::Adding => self.input,
            UiMode::Viewing => 0,
        }
    }

    fn total(&self, mode: UiMode) -> u16 {
        self.title + self.error + self.stats + self.calendar + self.input_height(mode) + self.help
    }
}

/// Sizes derived from the terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Columns available to one list row
    pub viewport_width: u16,
    /// Task rows visible at once
    pub viewport_height: u16,
    /// Columns available to the text field
    pub input_width: u16,
}

/// Compute the list viewport and input sizes for a terminal.
///
/// Used for the first layout and for every resize.
pub fn compute_layout(width: u16, height: u16, mode: UiMode, chrome: Chrome) -> ScreenLayout {
    let available_width = width.saturating_sub(PADDING * 2);
    let available_height = height
        .saturating_sub(PADDING * 2)
        .saturating_sub(chrome.total(mode));

    let prompt_width = display_width(INPUT_PROMPT) as u16;

    ScreenLayout {
        viewport_width: available_width.saturating_sub(LIST_FRAME).max(1),
        viewport_height: available_height.saturating_sub(LIST_FRAME).max(1),
        input_width: available_width
            .saturating_sub(INPUT_FRAME + prompt_width + 1)
            .max(MIN_INPUT_WIDTH),
    }
}

/// Screen regions for one frame
pub struct ScreenAreas {
    pub title: Rect,
    pub error: Option<Rect>,
    pub stats: Rect,
    pub calendar: Rect,
    pub input: Option<Rect>,
    pub list: Rect,
    pub help: Rect,
}

/// Split the terminal into bands.
///
/// Uses the same `Chrome` as `compute_layout`, so the list area's inner
/// height matches the viewport height whenever the terminal is large enough.
pub fn screen_areas(area: Rect, mode: UiMode, chrome: Chrome) -> ScreenAreas {
    let inner = area.inner(&Margin {
        horizontal: PADDING,
        vertical: PADDING,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(chrome.title),
            Constraint::Length(chrome.error),
            Constraint::Length(chrome.stats),
            Constraint::Length(chrome.calendar),
            Constraint::Length(chrome.input_height(mode)),
            Constraint::Min(0),
            Constraint::Length(chrome.help),
        ])
        .split(inner);

    ScreenAreas {
        title: chunks[0],
        error: (chrome.error > 0).then_some(chunks[1]),
        stats: chunks[2],
        calendar: chunks[3],
        input: (mode == UiMode::Adding).then_some(chunks[4]),
        list: chunks[5],
        help: chunks[6],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_layout_viewing() {
        let layout = compute_layout(100, 40, UiMode::Viewing, Chrome::new(false));
        // 40 - 2 padding - 6 chrome - 2 frame
        assert_eq!(layout.viewport_height, 30);
        assert_eq!(layout.viewport_width, 96);
    }

    #[test]
    fn test_compute_layout_adding_and_error_reduce_height() {
        let viewing = compute_layout(100, 40, UiMode::Viewing, Chrome::new(false));
        let adding = compute_layout(100, 40, UiMode::Adding, Chrome::new(false));
        let with_error = compute_layout(100, 40, UiMode::Viewing, Chrome::new(true));

        assert_eq!(viewing.viewport_height - adding.viewport_height, 4);
        assert_eq!(viewing.viewport_height - with_error.viewport_height, 3);
    }

    #[test]
    fn test_compute_layout_tiny_terminal_floors() {
        let layout = compute_layout(3, 2, UiMode::Adding, Chrome::new(true));
        assert_eq!(layout.viewport_height, 1);
        assert_eq!(layout.viewport_width, 1);
        assert_eq!(layout.input_width, MIN_INPUT_WIDTH);
    }

    #[test]
    fn test_input_width() {
        let layout = compute_layout(80, 24, UiMode::Adding, Chrome::new(false));
        // 78 available - 2 border - 10 prompt - 1 cursor cell
        assert_eq!(layout.input_width, 65);
    }

    #[test]
    fn test_screen_areas_match_computed_viewport() {
        for mode in [UiMode::Viewing, UiMode::Adding] {
            for has_error in [false, true] {
                let chrome = Chrome::new(has_error);
                let layout = compute_layout(120, 50, mode, chrome);
                let areas = screen_areas(Rect::new(0, 0, 120, 50), mode, chrome);

                assert_eq!(areas.list.height - LIST_FRAME, layout.viewport_height);
                assert_eq!(areas.list.width - LIST_FRAME, layout.viewport_width);
                assert_eq!(areas.error.is_some(), has_error);
                assert_eq!(areas.input.is_some(), mode == UiMode::Adding);
            }
        }
    }
}
