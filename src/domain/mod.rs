pub mod calendar;
pub mod duration;
pub mod enums;
pub mod lifecycle;
pub mod store;
pub mod task;
pub mod viewport;

pub use calendar::format_date_field;
pub use duration::format_hms;
pub use enums::{CalendarVariant, TaskStatus, UiMode};
pub use lifecycle::{apply, pause_all_active, LifecycleAction, Transition};
pub use store::{StatusCounts, TaskStore};
pub use task::Task;
pub use viewport::{clamp_cursor, step_cursor, Viewport};
