pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use header::{render_calendar_indicator, render_error, render_stats, render_title};
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::{screen_areas, Chrome};
use list_pane::render_list_pane;
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let chrome = Chrome::new(app.error.is_some());
    let areas = screen_areas(f.size(), app.ui_mode, chrome);

    render_title(f, app, areas.title);
    if let Some(error_area) = areas.error {
        render_error(f, app, error_area);
    }
    render_stats(f, app, areas.stats);
    render_calendar_indicator(f, app, areas.calendar);

    render_list_pane(f, app, areas.list);

    // Input box last so it owns the terminal cursor
    if let Some(input_area) = areas.input {
        render_input_form(f, app, input_area);
    }

    render_keybindings(f, app, areas.help);
}
