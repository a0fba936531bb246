use crate::domain::CalendarVariant;
use crate::ticker::DEFAULT_TICK_MS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Shortest tick interval accepted from the settings file
pub const MIN_TICK_MS: u64 = 100;

/// User settings stored in settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show ordinal line numbers at start-up
    pub show_line_numbers: bool,
    /// Calendar used for the date column at start-up
    pub calendar: CalendarVariant,
    /// Redraw interval for the live timer, in milliseconds
    pub tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_line_numbers: false,
            calendar: CalendarVariant::Gregorian,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(MIN_TICK_MS))
    }
}

/// Load settings from settings.json
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        // If file doesn't exist, return default settings
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings: {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Invalid settings file: {}", path.display()))?;
    Ok(settings)
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
