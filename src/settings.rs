use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".unified_control_panel";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

/// User preferences stored as JSON in the per-user config directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Reserved. Loaded and written back but not shown anywhere yet.
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    /// When enabled the application initialises the logger at debug level.
    /// This and `log_file` are dropped from the file on save while unset,
    /// even if the loaded file spelled out `false` or `null`.
    #[serde(default, skip_serializing_if = "is_false")]
    pub debug_logging: bool,
    /// Optional file receiving a copy of the log output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    /// Keys this version does not know about, preserved on save.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_theme() -> String {
    "dark".into()
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            favorites: Vec::new(),
            theme: default_theme(),
            debug_logging: false,
            log_file: None,
            extra: serde_json::Map::new(),
        }
    }
}

impl Preferences {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Only `"light"` selects the light palette.
    pub fn theme_mode(&self) -> ThemeMode {
        if self.theme.eq_ignore_ascii_case("light") {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

/// `~/.unified_control_panel/config.json`, relative to the working
/// directory when no home directory is known.
pub fn default_path() -> PathBuf {
    dirs_next::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("config file {} does not exist", .path.display())]
    Missing { path: PathBuf },
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub prefs: Preferences,
    /// Set when defaults were substituted for a missing or corrupt file.
    pub recovered: Option<ConfigLoadError>,
    /// Set when writing the substituted defaults failed.
    pub save_error: Option<anyhow::Error>,
}

/// Load preferences from `path`, substituting and persisting defaults when
/// the file is missing or cannot be parsed. Never fails.
pub fn load_or_init(path: &Path) -> LoadOutcome {
    let err = match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Preferences>(&content) {
            Ok(prefs) => {
                return LoadOutcome {
                    prefs,
                    recovered: None,
                    save_error: None,
                }
            }
            Err(source) => ConfigLoadError::Parse {
                path: path.to_path_buf(),
                source,
            },
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => ConfigLoadError::Missing {
            path: path.to_path_buf(),
        },
        Err(source) => ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    };
    let prefs = Preferences::default();
    let save_error = prefs.save(path).err();
    LoadOutcome {
        prefs,
        recovered: Some(err),
        save_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_has_two_keys() {
        let json = serde_json::to_value(Preferences::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["theme"], "dark");
        assert_eq!(obj["favorites"], serde_json::json!([]));
    }

    #[test]
    fn theme_mode_defaults_to_dark() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.theme_mode(), ThemeMode::Dark);
        prefs.theme = "Light".into();
        assert_eq!(prefs.theme_mode(), ThemeMode::Light);
        prefs.theme = "solarized".into();
        assert_eq!(prefs.theme_mode(), ThemeMode::Dark);
    }
}
