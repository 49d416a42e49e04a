//! Configuration loading and management

mod io;
mod settings;
mod store;

pub use settings::{ApiKeys, AssetSettings, StorySettings};
pub use store::{ConfigStore, FileConfigStore};

use serde::{Deserialize, Serialize};

/// Main configuration structure, persisted as `~/.reelsmith/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Story panel selections (theme, models, text placement, font)
    #[serde(default)]
    pub story_settings: StorySettings,

    /// Provider credentials used by the generation backends
    #[serde(default)]
    pub api_keys: ApiKeys,

    /// Where bundled assets (preview image, fonts) live
    #[serde(default)]
    pub assets: AssetSettings,
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
