//! Provider credentials

use serde::{Deserialize, Serialize};

/// API keys for the generation providers.
///
/// The story panel never edits these, but every save writes the whole config,
/// so they have to round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeys {
    /// DeepInfra token for story text generation
    #[serde(default)]
    pub deepinfra: String,

    /// OpenAI key for story text generation
    #[serde(default)]
    pub openai: String,

    /// Deepgram key for the Aura voiceover models
    #[serde(default)]
    pub deepgram: String,
}
