use crate::app::AppState;
use crate::domain::{format_date_field, format_hms, CalendarVariant, Task, TaskStatus};
use crate::text::{center, display_width, fit_to_width, pad_left, pad_right, truncate_with_ellipsis};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

/// Marker in front of the cursor row
pub const SELECTED_MARKER: &str = "❯ ";
/// Indent in front of every other row
pub const UNSELECTED_MARKER: &str = "  ";
/// Shown instead of rows when there are no tasks
pub const NO_TASKS: &str = "No tasks yet. Press 'a' to add one!";

/// Width of the `[HH:MM:SS]` column including its padding
const TIME_WIDTH: usize = 11;
/// Width of the `(MM/DD)` column including its padding
const DATE_WIDTH: usize = 8;
/// Width of the `001. ` line number column
const LINE_NUMBER_WIDTH: usize = 5;
/// Spaces between status, date, description and time
const SEPARATORS: usize = 3;
/// The description never gets fewer columns than this
const MIN_DESCRIPTION_WIDTH: usize = 5;

/// Display toggles for list rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineOptions {
    pub show_line_numbers: bool,
    pub calendar: CalendarVariant,
}

/// Width of the status column: the widest label plus one space
fn status_width() -> usize {
    TaskStatus::all()
        .iter()
        .map(|status| display_width(status.label()))
        .max()
        .unwrap_or(0)
        + 1
}

/// Columns left for the description in a row of `width` cells
pub fn description_budget(width: usize, options: LineOptions) -> usize {
    let line_numbers = if options.show_line_numbers {
        LINE_NUMBER_WIDTH
    } else {
        0
    };
    let fixed = display_width(SELECTED_MARKER)
        + line_numbers
        + status_width()
        + DATE_WIDTH
        + TIME_WIDTH
        + SEPARATORS;
    width.saturating_sub(fixed).max(MIN_DESCRIPTION_WIDTH)
}

/// Render one task as a line exactly `width` cells wide.
///
/// Layout: marker, optional line number, status, date, description, and the
/// right-aligned elapsed time. Only the description shrinks; on terminals
/// too narrow even for its minimum the line is clipped on the right.
pub fn render_task_line(
    task: &Task,
    index: usize,
    selected: bool,
    width: usize,
    options: LineOptions,
    now: DateTime<Local>,
) -> String {
    let mut line = String::new();

    line.push_str(if selected {
        SELECTED_MARKER
    } else {
        UNSELECTED_MARKER
    });

    if options.show_line_numbers {
        line.push_str(&pad_right(&format!("{:03}. ", index + 1), LINE_NUMBER_WIDTH));
    }

    line.push_str(&pad_right(task.status.label(), status_width()));
    line.push(' ');

    line.push_str(&pad_right(
        &format_date_field(task.created_at, options.calendar),
        DATE_WIDTH,
    ));
    line.push(' ');

    let budget = description_budget(width, options);
    let description = single_line(&task.description);
    line.push_str(&pad_right(&truncate_with_ellipsis(&description, budget), budget));
    line.push(' ');

    let elapsed = format!("[{}]", format_hms(task.effective_elapsed(now)));
    line.push_str(&pad_left(&elapsed, TIME_WIDTH));

    fit_to_width(&line, width)
}

/// The empty-list placeholder, centered in `width` cells
pub fn placeholder_line(width: usize) -> String {
    center(NO_TASKS, width)
}

/// Collapse control characters so a description always stays on one row
fn single_line(description: &str) -> String {
    description
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = &app.theme;
    let count = app.store.len();
    let width = app.viewport_width();
    let range = app.viewport.visible_range(count);

    let title = if count > app.viewport.height() && !range.is_empty() {
        format!(" Tasks {}-{} of {} ", range.start + 1, range.end, count)
    } else {
        format!(" Tasks ({}) ", count)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(theme.border)
        .title(Span::styled(title, theme.title));

    let items: Vec<ListItem> = if count == 0 {
        let inner_height = area.height.saturating_sub(2) as usize;
        let mut lines = vec![ListItem::new(""); inner_height / 2];
        lines.push(ListItem::new(Line::styled(placeholder_line(width), theme.placeholder)));
        lines
    } else {
        let now = app.now();
        let options = app.line_options();
        range
            .map(|index| {
                let task = &app.store.tasks()[index];
                let selected = index == app.cursor;
                let text = render_task_line(task, index, selected, width, options, now);
                ListItem::new(text).style(theme.list_row(task.status, selected))
            })
            .collect()
    };

    f.render_widget(List::new(items).block(block), area);
}
