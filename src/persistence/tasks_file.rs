use super::error::StoreError;
use super::files::{atomic_write, read_if_exists};
use crate::domain::TaskStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Load the task list.
///
/// A missing or blank file is an empty store, not an error. Tasks saved as
/// in progress are loaded as they are; the lifecycle pauses them on the next
/// session end.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<TaskStore, StoreError> {
    let path = path.as_ref();
    let content = read_if_exists(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(content) = content else {
        return Ok(TaskStore::default());
    };
    if content.trim().is_empty() {
        return Ok(TaskStore::default());
    }

    let store: Option<TaskStore> =
        serde_json::from_str(&content).map_err(|source| StoreError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(store.unwrap_or_default())
}

/// Save the task list as pretty-printed JSON
pub fn save_tasks<P: AsRef<Path>>(path: P, store: &TaskStore) -> Result<(), StoreError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(store)?;
    atomic_write(path, &json).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        reason: format!("{:#}", e),
    })
}

/// Copy the task file to `<file>.bak` before it gets overwritten.
///
/// Used when the file could not be loaded, so its content survives the save
/// that replaces it.
pub fn backup_tasks<P: AsRef<Path>>(path: P) -> Result<PathBuf, StoreError> {
    let path = path.as_ref();
    let mut backup = path.as_os_str().to_os_string();
    backup.push(".bak");
    let backup = PathBuf::from(backup);

    fs::copy(path, &backup).map_err(|e| StoreError::Write {
        path: backup.clone(),
        reason: format!("backup of {}: {}", path.display(), e),
    })?;
    Ok(backup)
}
