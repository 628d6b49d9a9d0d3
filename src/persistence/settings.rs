use super::files::{atomic_write, read_file};
use crate::domain::TimeBucket;
use crate::ticker::DEFAULT_TICK_SECS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// User settings stored in settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Last selected bucket, in minutes
    #[serde(default = "default_bucket_minutes")]
    pub selected_bucket: u32,
    /// Decay cadence in seconds
    #[serde(default = "default_tick_secs")]
    pub tick_secs: u64,
    /// Emoji glyphs in the task list; false falls back to ASCII
    #[serde(default = "default_use_emoji")]
    pub use_emoji: bool,
}

fn default_bucket_minutes() -> u32 {
    TimeBucket::default().minutes()
}

fn default_tick_secs() -> u64 {
    DEFAULT_TICK_SECS
}

fn default_use_emoji() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selected_bucket: default_bucket_minutes(),
            tick_secs: default_tick_secs(),
            use_emoji: default_use_emoji(),
        }
    }
}

impl Settings {
    /// Selected bucket; unknown values map to the default bucket
    pub fn bucket(&self) -> TimeBucket {
        TimeBucket::from_minutes(self.selected_bucket)
    }

    /// Decay cadence, never shorter than one second
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_secs.max(1))
    }
}

/// Load settings, returning defaults if the file doesn't exist
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let content = read_file(path)?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings: {}", path.display()))
}

/// Save settings
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    atomic_write(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_settings() {
        let temp_dir = tempdir().unwrap();
        let settings = load_settings(temp_dir.path().join("settings.json")).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bucket(), TimeBucket::OneHour);
        assert_eq!(settings.tick_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = Settings {
            selected_bucket: 15,
            tick_secs: 2,
            use_emoji: false,
        };
        save_settings(&path, &settings).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.bucket(), TimeBucket::FifteenMinutes);
        assert_eq!(loaded.tick_secs, 2);
        assert!(!loaded.use_emoji);
    }

    #[test]
    fn test_partial_and_odd_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"selectedBucket": 7, "tickSecs": 0}"#).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.bucket(), TimeBucket::OneHour);
        assert_eq!(loaded.tick_interval(), Duration::from_secs(1));

        std::fs::write(&path, r#"{}"#).unwrap();
        assert_eq!(load_settings(&path).unwrap(), Settings::default());

        std::fs::write(&path, r#"{"useEmoji": false}"#).unwrap();
        let loaded = load_settings(&path).unwrap();
        assert!(!loaded.use_emoji);
        assert_eq!(loaded.tick_secs, DEFAULT_TICK_SECS);
    }
}
