//! Settings snapshot read out of the story panel

use serde::Serialize;

use super::StoryError;
use crate::config::StorySettings;

/// Transient read-out of every control on the story panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryWindowValues {
    pub theme: String,
    pub text_model: String,
    pub idea: String,
    pub context: String,
    pub voice_model: String,
    pub text_position: String,
    pub text_font: String,
}

impl StoryWindowValues {
    /// Copy the persistable fields into `settings`.
    ///
    /// All five enumerated fields are written every time. Idea and context
    /// are not part of the persisted settings.
    pub fn apply_to(&self, settings: &mut StorySettings) {
        settings.theme = self.theme.clone();
        settings.text_model = self.text_model.clone();
        settings.voice_model = self.voice_model.clone();
        settings.font = self.text_font.clone();
        settings.text_position = self.text_position.clone();
    }

    /// Check the snapshot is ready for story generation.
    ///
    /// The idea is not trimmed: whitespace counts as input.
    pub fn validate_for_generation(&self) -> Result<(), StoryError> {
        if self.idea.is_empty() {
            return Err(StoryError::MissingIdea);
        }
        Ok(())
    }
}

/// A validated request handed to the story generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryRequest {
    pub values: StoryWindowValues,
}

impl TryFrom<StoryWindowValues> for StoryRequest {
    type Error = StoryError;

    fn try_from(values: StoryWindowValues) -> Result<Self, Self::Error> {
        values.validate_for_generation()?;
        Ok(Self { values })
    }
}
