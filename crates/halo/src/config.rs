//! Persisted mod configuration.
//!
//! One TOML file holds every feature flag, the accent colour and the layout
//! of each category window. It is read when the overlay opens and written
//! after every completed gesture and on close.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use halo_ui::{LayoutStore, WindowLayout};
use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors raised while reading or writing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Filesystem access failed.
    #[error("config I/O failed at {path:?}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`ModConfig`].
    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be encoded.
    #[error("config encode failed: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything the overlay persists.
///
/// Missing keys take their defaults, so files written by older builds load
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModConfig {
    /// Auto-clicker on/off.
    pub auto_clicker_enabled: bool,
    /// Lower clicks-per-second bound.
    pub auto_clicker_min_cps: f64,
    /// Upper clicks-per-second bound.
    pub auto_clicker_max_cps: f64,
    /// Keep-sprint on/off.
    pub sprint_enabled: bool,
    /// Chest highlight on/off.
    pub chest_esp_enabled: bool,
    /// Chest highlight red channel.
    pub chest_esp_red: u8,
    /// Chest highlight green channel.
    pub chest_esp_green: u8,
    /// Chest highlight blue channel.
    pub chest_esp_blue: u8,
    /// Host key code that opens the overlay.
    pub toggle_key: i32,
    /// Show the version string on the title screen.
    pub show_version: bool,
    /// Accent red channel.
    pub accent_red: u8,
    /// Accent green channel.
    pub accent_green: u8,
    /// Accent blue channel.
    pub accent_blue: u8,
    /// Window geometry by window name. Kept last: TOML tables follow values.
    #[serde(deserialize_with = "lenient_layouts")]
    pub layouts: BTreeMap<String, WindowLayout>,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            auto_clicker_enabled: false,
            auto_clicker_min_cps: 18.1,
            auto_clicker_max_cps: 22.14,
            sprint_enabled: false,
            chest_esp_enabled: false,
            chest_esp_red: 100,
            chest_esp_green: 150,
            chest_esp_blue: 255,
            toggle_key: 46,
            show_version: false,
            accent_red: 100,
            accent_green: 150,
            accent_blue: 255,
            layouts: BTreeMap::new(),
        }
    }
}

impl ModConfig {
    /// Accent colour as `0xRRGGBB`.
    #[must_use]
    pub fn accent_rgb(&self) -> u32 {
        pack_rgb(self.accent_red, self.accent_green, self.accent_blue)
    }

    /// Chest highlight colour as `0xRRGGBB`.
    #[must_use]
    pub fn chest_esp_rgb(&self) -> u32 {
        pack_rgb(self.chest_esp_red, self.chest_esp_green, self.chest_esp_blue)
    }
}

fn pack_rgb(red: u8, green: u8, blue: u8) -> u32 {
    u32::from(red) << 16 | u32::from(green) << 8 | u32::from(blue)
}

/// Drops individual malformed layout records instead of failing the file.
fn lenient_layouts<'de, D>(deserializer: D) -> Result<BTreeMap<String, WindowLayout>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, toml::Value>::deserialize(deserializer)?;
    let mut layouts = BTreeMap::new();
    for (name, value) in raw {
        match WindowLayout::deserialize(value) {
            Ok(layout) => {
                layouts.insert(name, layout);
            }
            Err(err) => tracing::warn!("Dropping malformed layout for window '{}': {}", name, err),
        }
    }
    Ok(layouts)
}

/// Configuration readable from any host thread.
pub type SharedConfig = Arc<RwLock<ModConfig>>;

/// File-backed configuration.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    shared: SharedConfig,
}

impl ConfigStore {
    /// Loads `path`, falling back to defaults.
    ///
    /// A missing file is created with defaults. An unreadable or malformed
    /// file is logged and replaced by defaults in memory only, so a typo in
    /// a hand-edited file is not overwritten until the next save.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = match Self::read(&path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                let store = Self::with_config(path, ModConfig::default());
                if let Err(err) = store.save() {
                    tracing::warn!("Failed to write default config: {}", err);
                }
                return store;
            }
            Err(err) => {
                tracing::warn!("Using default config: {}", err);
                ModConfig::default()
            }
        };
        Self::with_config(path, config)
    }

    /// Wraps an in-memory configuration that saves to `path`.
    pub fn with_config(path: impl Into<PathBuf>, config: ModConfig) -> Self {
        Self {
            path: path.into(),
            shared: Arc::new(RwLock::new(config)),
        }
    }

    /// Reads and parses `path`. `Ok(None)` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read,
    /// and [`ConfigError::Parse`] if it is not valid.
    pub fn read(path: &Path) -> ConfigResult<Option<ModConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(toml::from_str(&content)?))
    }

    /// Writes the current configuration, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] or [`ConfigError::Io`].
    pub fn save(&self) -> ConfigResult<()> {
        let encoded = toml::to_string_pretty(&*self.shared.read())?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, encoded).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// File location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Handle for readers on other threads.
    #[must_use]
    pub fn shared(&self) -> SharedConfig {
        Arc::clone(&self.shared)
    }

    /// Copy of the current configuration.
    #[must_use]
    pub fn snapshot(&self) -> ModConfig {
        self.shared.read().clone()
    }

    /// Mutates the configuration in place.
    pub fn update<R>(&self, f: impl FnOnce(&mut ModConfig) -> R) -> R {
        f(&mut self.shared.write())
    }

    /// Forgets every stored window layout.
    pub fn clear_layouts(&self) {
        self.shared.write().layouts.clear();
    }
}

impl LayoutStore for ConfigStore {
    fn layout(&self, window: &str) -> Option<WindowLayout> {
        self.shared
            .read()
            .layouts
            .get(window)
            .copied()
            .filter(WindowLayout::is_usable)
    }

    fn commit(&mut self, window: &str, layout: WindowLayout) {
        self.shared.write().layouts.insert(window.to_owned(), layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ModConfig::default();
        assert_eq!(config.auto_clicker_min_cps, 18.1);
        assert_eq!(config.auto_clicker_max_cps, 22.14);
        assert_eq!(config.toggle_key, 46);
        assert_eq!(config.accent_rgb(), 0x6496FF);
        assert_eq!(config.chest_esp_rgb(), 0x6496FF);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: ModConfig = toml::from_str("sprint_enabled = true\naccent_red = 255\n").unwrap();
        assert!(config.sprint_enabled);
        assert_eq!(config.accent_rgb(), 0xFF96FF);
        assert_eq!(config.toggle_key, 46);
        assert!(config.layouts.is_empty());
    }

    #[test]
    fn test_malformed_layout_dropped_individually() {
        let text = r#"
show_version = true

[layouts.Combat]
x = 10
y = 20
width = 220
height = 180

[layouts.Render]
x = "left"
"#;
        let config: ModConfig = toml::from_str(text).unwrap();
        assert!(config.show_version);
        assert_eq!(config.layouts.len(), 1);
        assert_eq!(config.layouts["Combat"], WindowLayout::new(10, 20, 220, 180));
    }

    #[test]
    fn test_zero_sized_layout_reads_as_absent() {
        let mut config = ModConfig::default();
        config.layouts.insert("Client".into(), WindowLayout::new(5, 5, 0, 150));
        config.layouts.insert("Movement".into(), WindowLayout::new(5, 5, 200, 150));
        let store = ConfigStore::with_config("unused.toml", config);

        assert_eq!(store.layout("Client"), None);
        assert_eq!(store.layout("Movement"), Some(WindowLayout::new(5, 5, 200, 150)));
        assert_eq!(store.layout("Combat"), None);
    }

    #[test]
    fn test_encoded_config_parses_back() {
        let mut config = ModConfig::default();
        config.auto_clicker_enabled = true;
        config.layouts.insert("Combat".into(), WindowLayout::new(1, 2, 300, 400));

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: ModConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
