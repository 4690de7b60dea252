use crate::contrast::TextColors;
use crate::theme::Palette;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.yml";

/// User settings, read from `config.yml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `schedule.txt` and `tasks.txt`.
    pub data_dir: Option<PathBuf>,
    /// Dark palette when true (the default), light palette otherwise.
    pub dark_mode: bool,
    /// Text colors used on top of event backgrounds.
    pub event_text: TextColors,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: None,
            dark_mode: true,
            event_text: TextColors::default(),
        }
    }
}

impl Config {
    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.dark_mode)
    }

    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "hourglass").context("locating config directory")?;
        Ok(dirs.config_dir().join(CONFIG_FILE))
    }

    /// Loads `path`, or the platform config file when `None`. A missing file
    /// yields the defaults; an unreadable or invalid one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&path).with_context(|| format!("reading {:?}", path))?;
        Self::from_yaml(&data).with_context(|| format!("parsing {:?}", path))
    }

    pub fn from_yaml(data: &str) -> Result<Self> {
        if data.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rgb;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("{}").unwrap(), Config::default());
    }

    #[test]
    fn dark_mode_by_default() {
        let config = Config::from_yaml("data_dir: /tmp/x\n").unwrap();
        assert!(config.dark_mode);
        assert_eq!(config.palette(), Palette::DARK);

        let config = Config::from_yaml("dark_mode: false\n").unwrap();
        assert_eq!(config.palette(), Palette::LIGHT);
        assert_eq!(config.palette().background, Rgb::new(0xd3, 0xd3, 0xd3));
    }

    #[test]
    fn partial_theme() {
        let config = Config::from_yaml(
            "data_dir: /tmp/hourglass\nevent_text:\n  dark_on_light: '#101010'\n",
        )
        .unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/hourglass")));
        assert_eq!(config.event_text.dark_on_light, Rgb::new(0x10, 0x10, 0x10));
        assert_eq!(
            config.event_text.light_on_dark,
            TextColors::default().light_on_dark
        );
    }

    #[test]
    fn bad_color_is_rejected() {
        assert!(Config::from_yaml("event_text:\n  dark_on_light: 'navy'\n").is_err());
    }

    #[test]
    fn yaml_round_trip() {
        let config = Config {
            data_dir: Some(PathBuf::from("data")),
            dark_mode: false,
            event_text: TextColors {
                dark_on_light: Rgb::BLACK,
                light_on_dark: Rgb::WHITE,
            },
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("'#ffffff'") || yaml.contains("\"#ffffff\""));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }
}
