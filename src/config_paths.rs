//! Where quiz-author keeps its files on disk
//!
//! One per-user directory holds the YAML config, the storage slots and
//! the rolling logs. On Windows it sits under `%APPDATA%`; elsewhere it
//! follows `XDG_CONFIG_HOME`, defaulting to `~/.config`.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "quiz-author";

/// Per-user quiz-author directory, `None` when no home can be found
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// The author config, read by `AuthorConfig::load`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Default home of the question slots (`<slot>.json` each)
pub fn storage_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("storage"))
}

/// Daily log files
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the log directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_config_dir() {
        let Some(base) = config_dir() else {
            return;
        };
        assert!(base.ends_with(APP_DIR));
        assert_eq!(config_file(), Some(base.join("config.yaml")));
        assert_eq!(storage_dir(), Some(base.join("storage")));
        assert_eq!(logs_dir(), Some(base.join("logs")));
    }
}
