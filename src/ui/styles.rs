use crate::domain::TaskStatus;
use ratatui::style::{Color, Modifier, Style};

/// Styles used by every pane.
///
/// Built once when the session starts and handed to the renderers through
/// the app state.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub stats: Style,
    pub calendar: Style,
    pub error: Style,
    pub help: Style,
    pub border: Style,
    pub row: Style,
    pub selected_row: Style,
    pub pending: Style,
    pub in_progress: Style,
    pub paused: Style,
    pub completed: Style,
    pub input_border: Style,
    pub input_title: Style,
    pub placeholder: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            stats: Style::default().add_modifier(Modifier::BOLD),
            calendar: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            help: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            row: Style::default().fg(Color::White),
            selected_row: Style::default().add_modifier(Modifier::REVERSED),
            pending: Style::default().fg(Color::White),
            in_progress: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            paused: Style::default().fg(Color::Yellow),
            completed: Style::default().fg(Color::Green),
            input_border: Style::default().fg(Color::Cyan),
            input_title: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Row style for a task in the given status
    pub fn status(&self, status: TaskStatus) -> Style {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Paused => self.paused,
            TaskStatus::Completed => self.completed,
        }
    }

    /// Style for a list row
    pub fn list_row(&self, status: TaskStatus, selected: bool) -> Style {
        let base = self.row.patch(self.status(status));
        if selected {
            base.patch(self.selected_row)
        } else {
            base
        }
    }
}
