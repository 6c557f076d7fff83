//! File System Utilities
//!
//! Per-user directories for settings and log files.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", "campus", "campus-gui").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/campus-gui/` or `$XDG_CONFIG_HOME/campus-gui/`
/// - **macOS**: `~/Library/Application Support/org.campus.campus-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\campus\campus-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory (log files live under `logs/`)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/campus-gui/`
/// - **macOS**: `~/Library/Application Support/org.campus.campus-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\campus\campus-gui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let base = std::env::temp_dir().join(format!("campus-gui-fs-{}", std::process::id()));
        let nested = base.join("a").join("b");
        let created = ensure_dir(&nested).expect("create dir");
        assert!(created.is_dir());
        // Existing directory is fine
        assert!(ensure_dir(&nested).is_ok());
        let _ = fs::remove_dir_all(&base);
    }
}
