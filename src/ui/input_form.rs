use crate::app::AppState;
use crate::input::text_input::CHAR_LIMIT;
use crate::ui::layout::INPUT_PROMPT;
use crate::text::display_width;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub const INPUT_TITLE: &str = " 📝 Add New Task ";
pub const INPUT_PLACEHOLDER: &str = "Describe your task...";

/// Render the task input box and place the terminal cursor in it
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = &app.theme;
    let (shown, cursor_col) = app.input.visible(app.input_width());

    let field = if app.input.is_empty() {
        Span::styled(INPUT_PLACEHOLDER, theme.placeholder)
    } else {
        Span::raw(shown)
    };

    let lines = vec![
        Line::from(vec![Span::styled(INPUT_PROMPT, theme.input_title), field]),
        Line::styled(
            format!("{}/{}", app.input.len(), CHAR_LIMIT),
            theme.help,
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.input_border)
        .title(Span::styled(INPUT_TITLE, theme.input_title));

    f.render_widget(Paragraph::new(lines).block(block), area);

    let x = area.x + 1 + display_width(INPUT_PROMPT) as u16 + cursor_col as u16;
    let max_x = area.x + area.width.saturating_sub(2);
    f.set_cursor(x.min(max_x), area.y + 1);
}
