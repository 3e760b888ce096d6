use std::path::Path;

use config::ConfigError;
use serde::Deserialize;

use crate::domain::split::{SplitConfiguration, DEFAULT_TIP_PERCENTAGE};
use crate::presentation::config::{keybindings, styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Values a fresh split starts with
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub bill_amount: f64,
    #[serde(default = "default_tip_percentage")]
    pub tip_percentage: f64,
}

fn default_tip_percentage() -> f64 {
    DEFAULT_TIP_PERCENTAGE
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            bill_amount: 0.0,
            tip_percentage: DEFAULT_TIP_PERCENTAGE,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir())
    }

    /// The configuration shipped inside the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Layers any config file found in `config_dir` over the embedded
    /// defaults. Missing files are fine.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder();

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        Ok(cfg)
    }

    pub fn initial_split(&self) -> SplitConfiguration {
        SplitConfiguration::with_defaults(self.defaults.bill_amount, self.defaults.tip_percentage)
    }
}
