use super::enums::TaskStatus;
use super::task::Task;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Ordered list of tasks; index 0 is the most recently added
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

/// Per-status task counts for the stats bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub paused: usize,
    pub completed: usize,
}

impl TaskStore {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut Task)> {
        self.tasks.iter_mut().enumerate()
    }

    /// Create a task at the front of the list.
    ///
    /// The description is trimmed; a blank one is rejected and `None` is
    /// returned without touching the store.
    pub fn add(&mut self, description: &str, now: DateTime<Local>) -> Option<&Task> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }
        self.tasks.insert(0, Task::new(description, now));
        self.tasks.first()
    }

    /// Remove the task at `index`
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    /// Index of the in-progress task, if any
    pub fn active_index(&self) -> Option<usize> {
        self.tasks.iter().position(Task::is_in_progress)
    }

    pub fn counts(&self) -> StatusCounts {
        self.tasks
            .iter()
            .fold(StatusCounts::default(), |mut counts, task| {
                match task.status {
                    TaskStatus::Pending => counts.pending += 1,
                    TaskStatus::InProgress => counts.in_progress += 1,
                    TaskStatus::Paused => counts.paused += 1,
                    TaskStatus::Completed => counts.completed += 1,
                }
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, ManualClock};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_prepends_and_trims() {
        let clock = ManualClock::fixed();
        let mut store = TaskStore::default();
        store.add("first", clock.now());
        store.add("  second  ", clock.now());

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().description, "second");
        assert_eq!(store.get(1).unwrap().description, "first");
    }

    #[test]
    fn test_add_rejects_blank_description() {
        let clock = ManualClock::fixed();
        let mut store = TaskStore::default();
        assert!(store.add("", clock.now()).is_none());
        assert!(store.add(" \t ", clock.now()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let clock = ManualClock::fixed();
        let mut store = TaskStore::default();
        store.add("a", clock.now());
        store.add("b", clock.now());
        assert_ne!(store.get(0).unwrap().id, store.get(1).unwrap().id);
    }

    #[test]
    fn test_remove_out_of_range() {
        let clock = ManualClock::fixed();
        let mut store = TaskStore::default();
        store.add("only", clock.now());
        assert!(store.remove(3).is_none());
        assert_eq!(store.remove(0).unwrap().description, "only");
        assert!(store.is_empty());
    }

    #[test]
    fn test_counts() {
        let clock = ManualClock::fixed();
        let mut store = TaskStore::default();
        store.add("a", clock.now());
        store.add("b", clock.now());
        store.add("c", clock.now());
        store.get_mut(0).unwrap().status = TaskStatus::Completed;
        store.get_mut(1).unwrap().status = TaskStatus::InProgress;

        let counts = store.counts();
        assert_eq!(
            counts,
            StatusCounts {
                pending: 1,
                in_progress: 1,
                paused: 0,
                completed: 1,
            }
        );
        assert_eq!(store.active_index(), Some(1));
    }

    #[test]
    fn test_store_serializes_as_array() {
        let clock = ManualClock::fixed();
        let mut store = TaskStore::default();
        store.add("a", clock.now());
        let value = serde_json::to_value(&store).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }
}
