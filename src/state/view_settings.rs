//! ViewSettings - Persisted List Preferences
//!
//! Page size, card layout and locale, stored as TOML in the config directory.

use std::path::{Path, PathBuf};

use locale_config::Locale;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

const SETTINGS_FILE: &str = "campus-gui.toml";

/// Locales shipped in `locales/app.yml`
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

fn get_config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE))
}

/// Persisted view preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    page_size: usize,
    card_layout: bool,
    locale: Option<String>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            card_layout: true,
            locale: None,
        }
    }
}

impl ViewSettings {
    /// Load settings from the config directory
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        Self::load_from(&path)
    }

    /// Load settings from a file; missing or empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading settings file");
        let value = match std::fs::read_to_string(path) {
            Ok(value) => value,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut settings: Self = if value.trim().is_empty() {
            Self::default()
        } else {
            toml::from_str(&value).map_err(|e| {
                error!(error = %e, path = ?path, "Failed to parse settings file");
                e
            })?
        };

        settings.normalize();
        Ok(settings)
    }

    /// Save settings to the config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        info!(path = ?path, "Settings saved");
        Ok(())
    }

    fn normalize(&mut self) {
        if !DEFAULT_PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            warn!(page_size = self.page_size, "Unsupported page size, using default");
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.locale.as_deref().is_none_or(str::is_empty) {
            self.locale = Some(detect_locale(&Locale::current().to_string()).to_string());
        }
    }

    // ==================== Getters ====================

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn card_layout(&self) -> bool {
        self.card_layout
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    // ==================== Setters ====================

    /// Returns false when the size is not one of the offered options
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !DEFAULT_PAGE_SIZE_OPTIONS.contains(&page_size) {
            return false;
        }
        self.page_size = page_size;
        true
    }

    pub fn set_card_layout(&mut self, enabled: bool) {
        self.card_layout = enabled;
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = Some(locale.into());
    }
}

/// Display name of a shipped locale, in its own language
pub fn locale_name(locale: &str) -> &'static str {
    match locale {
        "zh-CN" => "中文",
        _ => "English",
    }
}

/// Map a system locale tag (e.g. `zh-CN,en-US`) to a shipped locale
pub fn detect_locale(system: &str) -> &'static str {
    let primary = system.split(',').next().unwrap_or_default();
    if primary.to_ascii_lowercase().starts_with("zh") {
        "zh-CN"
    } else {
        "en"
    }
}
