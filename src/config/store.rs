//! Configuration store used by the GUI
//!
//! The story panel only needs read/write access to the story settings and a
//! way to persist them, so it talks to this trait instead of a concrete file.

use std::path::PathBuf;

use anyhow::Result;

use super::{Config, StorySettings};

/// Durable holder of the persisted story settings
pub trait ConfigStore {
    fn story_settings(&self) -> &StorySettings;

    fn story_settings_mut(&mut self) -> &mut StorySettings;

    /// Persist the current in-memory state
    fn save(&mut self) -> Result<()>;
}

/// [`ConfigStore`] backed by a TOML file on disk
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    config: Config,
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self { config, path }
    }

    /// Open the store at `path`, falling back to defaults when the file
    /// cannot be read or parsed. A missing file is created.
    pub fn open(path: PathBuf) -> Self {
        let config = if path.exists() {
            Config::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!("{:#}. Falling back to defaults.", e);
                Config::default()
            })
        } else {
            Config::load_or_init(&path).unwrap_or_else(|e| {
                tracing::warn!("Failed to initialize config: {:#}. Using defaults.", e);
                Config::default()
            })
        };

        Self::new(config, path)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl ConfigStore for FileConfigStore {
    fn story_settings(&self) -> &StorySettings {
        &self.config.story_settings
    }

    fn story_settings_mut(&mut self) -> &mut StorySettings {
        &mut self.config.story_settings
    }

    fn save(&mut self) -> Result<()> {
        self.config.save_to_file(&self.path)
    }
}
