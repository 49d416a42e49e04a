//! Story panel settings

use serde::{Deserialize, Serialize};

/// Persisted selections of the story settings panel.
///
/// Values are plain strings: whatever the file holds is loaded and shown as-is,
/// even when it is not one of the options the panel offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorySettings {
    /// Narrative theme ("Horror", "Facts")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Text generation backend ("DeepInfra", "Openai")
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Voiceover voice ("Arceus", "Luna", "Asteria")
    #[serde(default = "default_voice_model")]
    pub voice_model: String,

    /// Vertical placement of captions ("top", "center", "bottom")
    #[serde(default = "default_text_position")]
    pub text_position: String,

    /// Caption font ("default", "Futura", "Monosans")
    #[serde(default = "default_font")]
    pub font: String,
}

fn default_theme() -> String {
    "Horror".to_string()
}

fn default_text_model() -> String {
    "DeepInfra".to_string()
}

fn default_voice_model() -> String {
    "Arceus".to_string()
}

fn default_text_position() -> String {
    "center".to_string()
}

fn default_font() -> String {
    "default".to_string()
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            text_model: default_text_model(),
            voice_model: default_voice_model(),
            text_position: default_text_position(),
            font: default_font(),
        }
    }
}
