mod app;
mod clock;
mod domain;
mod input;
mod persistence;
mod text;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::{AppState, QuitOutcome};
use clap::{Parser, Subcommand};
use clock::{Clock, SystemClock};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::CalendarVariant;
use persistence::{load_settings, load_tasks, resolve_tasks_file, save_settings, settings_file_for, Settings};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use ticker::Ticker;
use ui::list_pane::{placeholder_line, render_task_line, LineOptions};

#[derive(Parser)]
#[command(name = "stint")]
#[command(about = "A terminal task tracker that times what you work on", long_about = None)]
struct Cli {
    /// Task file to use instead of the default (also: STINT_FILE)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Show line numbers at start-up
    #[arg(short = 'n', long, global = true)]
    line_numbers: bool,

    /// Calendar for the date column: gregorian or jalali
    #[arg(short, long, global = true)]
    calendar: Option<CalendarVariant>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the path of the task file
    Path,
    /// Print the task list and exit
    List {
        /// Line width in columns
        #[arg(short, long, default_value_t = 80)]
        width: usize,
    },
    /// Write a settings file with the current options next to the task file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tasks_file = resolve_tasks_file(cli.file.as_deref())?;
    let settings_file = settings_file_for(&tasks_file);

    let mut settings = load_settings(&settings_file).unwrap_or_else(|e| {
        eprintln!("Warning: {:#}; using default settings", e);
        Settings::default()
    });
    if cli.line_numbers {
        settings.show_line_numbers = true;
    }
    if let Some(calendar) = cli.calendar {
        settings.calendar = calendar;
    }

    match cli.command {
        Some(Commands::Path) => {
            println!("{}", tasks_file.display());
            Ok(())
        }
        Some(Commands::List { width }) => print_list(&tasks_file, &settings, width),
        Some(Commands::Init) => {
            if settings_file.exists() {
                println!("Settings already exist: {}", settings_file.display());
                return Ok(());
            }
            save_settings(&settings_file, &settings)?;
            println!("Wrote settings: {}", settings_file.display());
            Ok(())
        }
        None => run_tui(tasks_file, &settings),
    }
}

/// Print every task once, without the interactive UI
fn print_list(tasks_file: &Path, settings: &Settings, width: usize) -> Result<()> {
    let store = load_tasks(tasks_file)?;
    if store.is_empty() {
        println!("{}", placeholder_line(width).trim_end());
        return Ok(());
    }

    let options = LineOptions {
        show_line_numbers: settings.show_line_numbers,
        calendar: settings.calendar,
    };
    let now = SystemClock.now();
    for (index, task) in store.tasks().iter().enumerate() {
        println!(
            "{}",
            render_task_line(task, index, false, width, options, now).trim_end()
        );
    }
    Ok(())
}

fn run_tui(tasks_file: PathBuf, settings: &Settings) -> Result<()> {
    eprintln!("Using task file: {}", tasks_file.display());

    let (store, load_error) = match load_tasks(&tasks_file) {
        Ok(store) => (store, None),
        Err(e) => {
            eprintln!("Error: {}: {}", e.kind(), e);
            (Default::default(), Some(e))
        }
    };

    let mut app = AppState::new(store, load_error, tasks_file, settings, Box::new(SystemClock));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // The loop can fail before a quit key arrives; still pause and save
    if app.is_running() {
        app.quit();
    }

    match app.take_quit_outcome() {
        Some(QuitOutcome::Failed(e)) => eprintln!("Error on exit: {}", e),
        Some(QuitOutcome::Saved { path, backup }) => {
            if let Some(backup) = backup {
                eprintln!("Kept a copy of the unreadable task file at {}", backup.display());
            }
            eprintln!("Saved tasks to {}. Bye!", path.display());
        }
        Some(QuitOutcome::Untouched(path)) => {
            eprintln!("Left {} unchanged since it could not be loaded. Bye!", path.display())
        }
        None => eprintln!("Bye!"),
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    settings: &Settings,
) -> Result<()> {
    let (width, height) = terminal::size().context("Failed to read terminal size")?;
    app.resize(width, height);

    let mut ticker = Ticker::new(settings.tick_interval(), Instant::now());
    let mut redraw = true;

    while app.is_running() {
        if redraw {
            terminal.draw(|f| ui::render(f, app))?;
            redraw = false;
        }

        // Wait for input until the next tick is due
        if event::poll(ticker.remaining(Instant::now()))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(app, key) {
                        break;
                    }
                    redraw = true;
                }
                Event::Resize(width, height) => {
                    app.resize(width, height);
                    redraw = true;
                }
                _ => {}
            }
        }

        if ticker.poll(Instant::now()) {
            redraw |= app.tick();
        }
    }

    Ok(())
}
