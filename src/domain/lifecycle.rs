//! Status transitions and time accrual.
//!
//! At most one task is in progress at any time. Starting a task pauses any
//! other running task first, inside the same call, so callers never observe
//! two running timers.

use super::enums::TaskStatus;
use super::store::TaskStore;
use super::task::Task;
use chrono::{DateTime, Local};
use uuid::Uuid;

/// User action applied to the task under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Start, pause or resume
    Toggle,
    /// Mark as completed
    Complete,
}

/// What a successful transition changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub task_id: Uuid,
    pub from: TaskStatus,
    pub to: TaskStatus,
    /// Tasks that were running and got paused to make room
    pub paused_others: Vec<Uuid>,
}

/// Apply `action` to the task at `index`.
///
/// Returns `None` when the index is out of range or the action does not
/// apply (toggling or completing a completed task).
pub fn apply(
    store: &mut TaskStore,
    index: usize,
    action: LifecycleAction,
    now: DateTime<Local>,
) -> Option<Transition> {
    let from = store.get(index)?.status;
    let to = next_status(from, action)?;

    let mut paused_others = Vec::new();
    if to == TaskStatus::InProgress {
        for (i, other) in store.iter_mut() {
            if i != index && other.is_in_progress() {
                pause(other, now);
                paused_others.push(other.id);
            }
        }
    }

    let task = store.get_mut(index)?;
    match to {
        TaskStatus::InProgress => {
            task.status = TaskStatus::InProgress;
            task.last_started_at = Some(now);
        }
        TaskStatus::Paused => pause(task, now),
        TaskStatus::Completed => {
            accrue(task, now);
            task.status = TaskStatus::Completed;
        }
        TaskStatus::Pending => return None,
    }

    Some(Transition {
        task_id: task.id,
        from,
        to,
        paused_others,
    })
}

/// Pause every running task. Used when the session ends.
///
/// Returns how many tasks were paused.
pub fn pause_all_active(store: &mut TaskStore, now: DateTime<Local>) -> usize {
    let mut paused = 0;
    for (_, task) in store.iter_mut() {
        if task.is_in_progress() {
            pause(task, now);
            paused += 1;
        }
    }
    paused
}

fn next_status(from: TaskStatus, action: LifecycleAction) -> Option<TaskStatus> {
    match (from, action) {
        (TaskStatus::Pending | TaskStatus::Paused, LifecycleAction::Toggle) => {
            Some(TaskStatus::InProgress)
        }
        (TaskStatus::InProgress, LifecycleAction::Toggle) => Some(TaskStatus::Paused),
        (TaskStatus::Completed, _) => None,
        (_, LifecycleAction::Complete) => Some(TaskStatus::Completed),
    }
}

fn pause(task: &mut Task, now: DateTime<Local>) {
    accrue(task, now);
    task.status = TaskStatus::Paused;
}

/// Fold the running session into `time_spent` and clear the start time.
fn accrue(task: &mut Task, now: DateTime<Local>) {
    task.time_spent = task.time_spent + task.live_interval(now);
    task.last_started_at = None;
}
