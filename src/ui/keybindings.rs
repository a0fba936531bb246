use crate::app::AppState;
use crate::input::help_text;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(format!(" {}", help_text(app.ui_mode))).style(app.theme.help);
    f.render_widget(paragraph, area);
}
