pub mod error;
pub mod files;
pub mod settings;
pub mod tasks_file;

pub use error::StoreError;
pub use files::{atomic_write, resolve_tasks_file, settings_file_for};
pub use settings::{load_settings, save_settings, Settings};
pub use tasks_file::{backup_tasks, load_tasks, save_tasks};
