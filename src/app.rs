use crate::clock::Clock;
use crate::domain::{
    apply, clamp_cursor, pause_all_active, step_cursor, CalendarVariant, LifecycleAction,
    TaskStore, Transition, UiMode, Viewport,
};
use crate::input::TextInput;
use crate::persistence::{backup_tasks, save_tasks, Settings, StoreError};
use crate::ui::layout::{compute_layout, Chrome};
use crate::ui::list_pane::LineOptions;
use crate::ui::styles::Theme;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Terminal size assumed until the first resize event
const INITIAL_SIZE: (u16, u16) = (80, 24);

/// How the session ended
#[derive(Debug)]
pub enum QuitOutcome {
    /// Tasks were written to `path`; an unreadable old file was copied to
    /// `backup` first
    Saved {
        path: PathBuf,
        backup: Option<PathBuf>,
    },
    /// The file could not be loaded and nothing was edited, so it was left
    /// as it is
    Untouched(PathBuf),
    Failed(StoreError),
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub cursor: usize,
    pub viewport: Viewport,
    pub ui_mode: UiMode,
    pub show_line_numbers: bool,
    pub calendar: CalendarVariant,
    pub input: TextInput,
    /// Message shown in the error band until the next keystroke
    pub error: Option<String>,
    pub theme: Theme,
    tasks_file: PathBuf,
    terminal_size: (u16, u16),
    viewport_width: u16,
    input_width: u16,
    running: bool,
    /// The task file exists but could not be loaded
    load_failed: bool,
    /// A task was added, removed or changed this session
    edited: bool,
    quit_outcome: Option<QuitOutcome>,
    clock: Box<dyn Clock>,
}

impl AppState {
    pub fn new(
        store: TaskStore,
        load_error: Option<StoreError>,
        tasks_file: PathBuf,
        settings: &Settings,
        clock: Box<dyn Clock>,
    ) -> Self {
        let load_failed = load_error.is_some();
        let mut app = Self {
            store,
            cursor: 0,
            viewport: Viewport::default(),
            ui_mode: UiMode::Viewing,
            show_line_numbers: settings.show_line_numbers,
            calendar: settings.calendar,
            input: TextInput::default(),
            error: load_error.map(|e| e.to_string()),
            theme: Theme::default(),
            tasks_file,
            terminal_size: INITIAL_SIZE,
            viewport_width: 1,
            input_width: 1,
            running: true,
            load_failed,
            edited: false,
            quit_outcome: None,
            clock,
        };
        app.enter_viewing();
        app
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Columns available to one list row
    pub fn viewport_width(&self) -> usize {
        self.viewport_width as usize
    }

    /// Columns available to the text field
    pub fn input_width(&self) -> usize {
        self.input_width as usize
    }

    pub fn line_options(&self) -> LineOptions {
        LineOptions {
            show_line_numbers: self.show_line_numbers,
            calendar: self.calendar,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.relayout();
    }

    /// Recompute viewport and input sizes after anything that changes the
    /// chrome: a resize, a mode switch, or the error band appearing.
    fn relayout(&mut self) {
        let (width, height) = self.terminal_size;
        let chrome = Chrome::new(self.error.is_some());
        let layout = compute_layout(width, height, self.ui_mode, chrome);

        self.viewport_width = layout.viewport_width;
        self.input_width = layout.input_width;
        self.viewport.resize(
            layout.viewport_height as usize,
            self.cursor,
            self.store.len(),
        );
    }

    /// Move the cursor by `delta` rows; stops at the ends
    pub fn navigate(&mut self, delta: isize) {
        if self.store.is_empty() {
            return;
        }
        self.cursor = step_cursor(self.cursor, delta, self.store.len());
        self.viewport.follow(self.cursor, self.store.len());
    }

    pub fn page_up(&mut self) {
        self.navigate(-(self.viewport.height() as isize));
    }

    pub fn page_down(&mut self) {
        self.navigate(self.viewport.height() as isize);
    }

    pub fn start_adding(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::Adding;
        self.relayout();
    }

    pub fn cancel_adding(&mut self) {
        self.input.clear();
        self.enter_viewing();
    }

    /// Switch to Viewing, or to Adding when there is nothing to view
    pub fn enter_viewing(&mut self) {
        self.ui_mode = if self.store.is_empty() {
            UiMode::Adding
        } else {
            UiMode::Viewing
        };
        self.relayout();
    }

    /// Prepend a task and select it. Blank descriptions are ignored.
    pub fn add(&mut self, description: &str) -> bool {
        let now = self.now();
        if self.store.add(description, now).is_none() {
            return false;
        }
        self.edited = true;
        self.cursor = 0;
        self.viewport.follow(self.cursor, self.store.len());
        true
    }

    /// Add the text field's content as a task, staying in Adding mode
    pub fn submit_input(&mut self) -> bool {
        let value = self.input.value();
        let added = self.add(&value);
        if added {
            self.input.clear();
        }
        added
    }

    pub fn delete(&mut self) {
        if self.store.remove(self.cursor).is_none() {
            return;
        }
        self.edited = true;
        self.cursor = clamp_cursor(self.cursor, self.store.len());
        self.viewport.follow(self.cursor, self.store.len());
        if self.store.is_empty() {
            self.enter_viewing();
        }
    }

    pub fn toggle(&mut self) -> Option<Transition> {
        self.apply(LifecycleAction::Toggle)
    }

    pub fn complete(&mut self) -> Option<Transition> {
        self.apply(LifecycleAction::Complete)
    }

    fn apply(&mut self, action: LifecycleAction) -> Option<Transition> {
        let now = self.now();
        let transition = apply(&mut self.store, self.cursor, action, now);
        self.edited |= transition.is_some();
        transition
    }

    pub fn toggle_line_numbers(&mut self) {
        self.show_line_numbers = !self.show_line_numbers;
    }

    pub fn toggle_calendar(&mut self) {
        self.calendar = self.calendar.toggled();
    }

    /// Periodic tick. Nothing changes; returns whether a live timer is on
    /// screen and needs a redraw.
    pub fn tick(&self) -> bool {
        self.running && self.store.active_index().is_some()
    }

    pub fn clear_error(&mut self) {
        if self.error.take().is_some() {
            self.relayout();
        }
    }

    /// Pause running tasks, save, and stop the session.
    ///
    /// A task file that failed to load is never overwritten blindly: it is
    /// left alone when nothing was edited, and backed up before saving
    /// otherwise.
    pub fn quit(&mut self) -> &QuitOutcome {
        let now = self.now();
        pause_all_active(&mut self.store, now);

        let outcome = match self.save() {
            Ok(outcome) => outcome,
            Err(e) => {
                self.error = Some(e.to_string());
                QuitOutcome::Failed(e)
            }
        };

        self.running = false;
        self.quit_outcome.insert(outcome)
    }

    fn save(&self) -> Result<QuitOutcome, StoreError> {
        if self.load_failed && !self.edited {
            return Ok(QuitOutcome::Untouched(self.tasks_file.clone()));
        }

        let backup = if self.load_failed && self.tasks_file.exists() {
            Some(backup_tasks(&self.tasks_file)?)
        } else {
            None
        };

        save_tasks(&self.tasks_file, &self.store)?;
        Ok(QuitOutcome::Saved {
            path: self.tasks_file.clone(),
            backup,
        })
    }

    pub fn take_quit_outcome(&mut self) -> Option<QuitOutcome> {
        self.quit_outcome.take()
    }
}
