//! Shared test utilities for story panel tests

use reelsmith::config::{ConfigStore, StorySettings};

/// In-memory config store that records every save
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub settings: StorySettings,
    /// Snapshot of the settings taken at each save
    pub saved: Vec<StorySettings>,
}

impl RecordingStore {
    pub fn with_settings(settings: StorySettings) -> Self {
        Self {
            settings,
            saved: Vec::new(),
        }
    }

    pub fn save_count(&self) -> usize {
        self.saved.len()
    }
}

impl ConfigStore for RecordingStore {
    fn story_settings(&self) -> &StorySettings {
        &self.settings
    }

    fn story_settings_mut(&mut self) -> &mut StorySettings {
        &mut self.settings
    }

    fn save(&mut self) -> anyhow::Result<()> {
        self.saved.push(self.settings.clone());
        Ok(())
    }
}

/// Settings with a non-default value in every field
pub fn custom_settings() -> StorySettings {
    StorySettings {
        theme: "Facts".to_string(),
        text_model: "Openai".to_string(),
        voice_model: "Luna".to_string(),
        text_position: "bottom".to_string(),
        font: "Monosans".to_string(),
    }
}
