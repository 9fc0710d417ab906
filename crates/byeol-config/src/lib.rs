//! Persisted preferences.
//!
//! A single small TOML file in the platform config directory holds the one
//! value worth remembering between runs: the selected theme.

use std::fs;
use std::path::PathBuf;

use byeol_core::Theme;
use color_eyre::eyre::{Result, WrapErr, eyre};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
}

impl Config {
    /// Load the saved preferences, falling back to defaults when the file is
    /// missing or unreadable. A broken config file should never keep the
    /// screensaver from starting.
    pub fn load() -> Self {
        config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|body| toml::from_str(&body).ok())
            .unwrap_or_default()
    }

    /// Write the preferences back to disk, creating the config directory if
    /// needed.
    pub fn save(&self) -> Result<()> {
        let path = config_path().ok_or_else(|| eyre!("no config directory available"))?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).wrap_err("creating config directory")?;
        }
        let body = toml::to_string_pretty(self).wrap_err("serializing preferences")?;
        fs::write(&path, body).wrap_err_with(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "byeol").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_violet() {
        assert_eq!(Config::default().theme, Theme::Violet);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config { theme: Theme::Cyan };
        let body = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<Config>(&body).unwrap(), config);
    }

    #[test]
    fn theme_serializes_as_a_lowercase_name() {
        let body = toml::to_string_pretty(&Config { theme: Theme::Rose }).unwrap();
        assert!(body.contains("\"rose\""), "unexpected config body: {body}");
    }

    #[test]
    fn unknown_fields_and_values_fall_back_cleanly() {
        // serde(default) fills in missing fields.
        assert_eq!(toml::from_str::<Config>("").unwrap(), Config::default());
        // An unknown theme name is a parse error, which load() maps to the
        // default rather than an abort.
        assert!(toml::from_str::<Config>("theme = \"plaid\"").is_err());
    }
}
