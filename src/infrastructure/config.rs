use std::{path::PathBuf, time::Duration};

use config::{ConfigError, File, FileFormat};
use serde::Deserialize;

use crate::{
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const DEFAULT_BASE_URL: &str = "http://localhost:8082";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Where the catalog backend lives and how long to wait for it
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// The configuration embedded in the binary
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Embedded defaults overlaid with the user's config files, if any
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?;

        let config_files = [
            ("config.json5", FileFormat::Json5),
            ("config.json", FileFormat::Json),
            ("config.yaml", FileFormat::Yaml),
            ("config.toml", FileFormat::Toml),
            ("config.ini", FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true;
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config);
        Ok(cfg)
    }

    /// Fills in every binding and style the user did not override
    pub fn merge_defaults(&mut self, defaults: Config) {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles.entry(style_key.clone()).or_insert(*style);
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::config::keybindings::Action;

    #[test]
    fn test_embedded_defaults() {
        let cfg = Config::defaults().expect("embedded config parses");
        assert_eq!(cfg.api, ApiConfig::default());
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())),
            Some(Action::Quit)
        );
        assert!(cfg.styles.contains_key("badge_active"));
    }

    #[test]
    fn test_user_bindings_win_over_defaults() {
        let mut cfg: Config =
            json5::from_str(r#"{ keybindings: { "<q>": "Back" }, api: { base_url: "http://example.test" } }"#)
                .expect("valid config");
        cfg.merge_defaults(Config::defaults().expect("embedded config parses"));

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        assert_eq!(cfg.keybindings.action_for(q), Some(Action::Back));
        let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::empty());
        assert_eq!(cfg.keybindings.action_for(r), Some(Action::Refresh));
        assert_eq!(cfg.api.base_url, "http://example.test");
        assert_eq!(cfg.api.timeout_secs, 10);
    }

    #[test]
    fn test_with_base_url() {
        let cfg = Config::default().with_base_url("http://127.0.0.1:9000");
        assert_eq!(cfg.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(cfg.api.connect_timeout(), Duration::from_secs(5));
    }
}
