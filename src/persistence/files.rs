use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Environment variable that overrides the task file location
pub const FILE_ENV: &str = "STINT_FILE";

/// Default directory for stint data (`<config dir>/stint`)
pub fn default_data_dir() -> Result<PathBuf> {
    let config = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .context("Could not determine config directory")?;
    Ok(config.join("stint"))
}

/// Resolve the task file: explicit path, then `STINT_FILE`, then the default
pub fn resolve_tasks_file(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env::var_os(FILE_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(default_data_dir()?.join("tasks.json"))
}

/// Settings file that sits next to the task file
pub fn settings_file_for(tasks_file: &Path) -> PathBuf {
    match tasks_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join("settings.json"),
        _ => PathBuf::from("settings.json"),
    }
}

/// Atomically write content to a file using temp file + rename.
///
/// The parent directory is created when missing.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => env::current_dir().context("Could not determine current directory")?,
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(&dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, `None` if the file doesn't exist
pub fn read_if_exists<P: AsRef<Path>>(path: P) -> std::io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_path_wins() {
        let path = resolve_tasks_file(Some(Path::new("/tmp/mine.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/mine.json"));
    }

    #[test]
    fn test_settings_file_sits_next_to_tasks() {
        assert_eq!(
            settings_file_for(Path::new("/data/stint/tasks.json")),
            PathBuf::from("/data/stint/settings.json")
        );
        assert_eq!(
            settings_file_for(Path::new("tasks.json")),
            PathBuf::from("settings.json")
        );
    }

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "Hello, world!").unwrap();

        let content = read_if_exists(&test_file).unwrap();
        assert_eq!(content.as_deref(), Some("Hello, world!"));
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("tasks.json");

        atomic_write(&nested, "[]").unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_atomic_write_replaces_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "first").unwrap();
        atomic_write(&test_file, "second").unwrap();
        assert_eq!(read_if_exists(&test_file).unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_read_nonexistent_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nonexistent.txt");

        assert!(read_if_exists(&test_file).unwrap().is_none());
    }
}
