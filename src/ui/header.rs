use crate::app::AppState;
use crate::domain::StatusCounts;
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub const TITLE: &str = "stint · task time tracker";

/// One-line summary of task counts
pub fn stats_text(counts: StatusCounts) -> String {
    format!(
        "Pending: {} | In Progress: {} | Paused: {} | Completed: {}",
        counts.pending, counts.in_progress, counts.paused, counts.completed
    )
}

pub fn render_title(f: &mut Frame, app: &AppState, area: Rect) {
    let title = Paragraph::new(Line::styled(TITLE, app.theme.title)).alignment(Alignment::Center);
    f.render_widget(title, area);
}

pub fn render_error(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(message) = &app.error {
        let paragraph = Paragraph::new(format!("Error: {}", message))
            .style(app.theme.error)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(app.theme.error),
            );
        f.render_widget(paragraph, area);
    }
}

pub fn render_stats(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = Paragraph::new(format!(" {}", stats_text(app.store.counts()))).style(app.theme.stats);
    f.render_widget(stats, area);
}

pub fn render_calendar_indicator(f: &mut Frame, app: &AppState, area: Rect) {
    let text = format!(" Calendar: {}", app.calendar.name());
    f.render_widget(Paragraph::new(text).style(app.theme.calendar), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_text() {
        let counts = StatusCounts {
            pending: 3,
            in_progress: 1,
            paused: 2,
            completed: 4,
        };
        assert_eq!(
            stats_text(counts),
            "Pending: 3 | In Progress: 1 | Paused: 2 | Completed: 4"
        );
    }
}
