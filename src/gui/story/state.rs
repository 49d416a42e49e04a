//! Story panel state
//!
//! Holds the live value of every control on the panel.

use std::path::PathBuf;

use eframe::egui::FontFamily;

use super::PanelAction;
use super::preview::PreviewImage;
use crate::config::ConfigStore;
use crate::story::{SettingKey, StoryError, StoryWindowValues};

/// State behind the story settings panel
pub struct StoryPanel {
    // Enumerated settings, loaded from the config store
    pub(super) theme: String,
    pub(super) text_model: String,
    pub(super) voice_model: String,
    pub(super) text_position: String,
    pub(super) text_font: String,

    // Free text, never persisted
    pub(super) idea: String,
    pub(super) context: String,

    /// Warning dialog currently shown, blocks the rest of the panel
    pub(super) warning: Option<StoryError>,
    /// Last save failure, shown under the settings
    pub(super) save_error: Option<String>,

    pub(super) preview: PreviewImage,
    pub(super) label_family: FontFamily,
}

impl StoryPanel {
    /// Build the panel with every enumerated control initialized from `store`
    pub fn new(store: &impl ConfigStore) -> Self {
        let settings = store.story_settings();
        Self {
            theme: settings.theme.clone(),
            text_model: settings.text_model.clone(),
            voice_model: settings.voice_model.clone(),
            text_position: settings.text_position.clone(),
            text_font: settings.font.clone(),
            idea: String::new(),
            context: String::new(),
            warning: None,
            save_error: None,
            preview: PreviewImage::None,
            label_family: FontFamily::Proportional,
        }
    }

    /// Show the image at `path` in the preview pane
    pub fn with_preview(mut self, path: PathBuf) -> Self {
        self.set_preview(path);
        self
    }

    pub fn set_preview(&mut self, path: PathBuf) {
        self.preview = PreviewImage::Pending(path);
    }

    /// Font family used for section labels
    pub fn set_label_family(&mut self, family: FontFamily) {
        self.label_family = family;
    }

    /// Current value of an enumerated control
    pub fn value(&self, key: SettingKey) -> &str {
        match key {
            SettingKey::Theme => &self.theme,
            SettingKey::TextModel => &self.text_model,
            SettingKey::VoiceModel => &self.voice_model,
            SettingKey::TextPosition => &self.text_position,
            SettingKey::Font => &self.text_font,
        }
    }

    fn value_mut(&mut self, key: SettingKey) -> &mut String {
        match key {
            SettingKey::Theme => &mut self.theme,
            SettingKey::TextModel => &mut self.text_model,
            SettingKey::VoiceModel => &mut self.voice_model,
            SettingKey::TextPosition => &mut self.text_position,
            SettingKey::Font => &mut self.text_font,
        }
    }

    /// Change an enumerated control to `value`. Combo box picks land here.
    ///
    /// Returns the action to raise, or `None` when the value did not change.
    pub fn select(&mut self, key: SettingKey, value: &str) -> Option<PanelAction> {
        let slot = self.value_mut(key);
        if slot.as_str() == value {
            return None;
        }
        *slot = value.to_string();
        Some(PanelAction::SettingChanged(key))
    }

    pub fn idea(&self) -> &str {
        &self.idea
    }

    pub fn set_idea(&mut self, idea: impl Into<String>) {
        self.idea = idea.into();
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    /// Warning dialog currently open, if any
    pub fn warning(&self) -> Option<&StoryError> {
        self.warning.as_ref()
    }

    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    /// Message of the last failed save, cleared by the next successful one
    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    /// Read every control into a settings snapshot
    pub fn snapshot(&self) -> StoryWindowValues {
        StoryWindowValues {
            theme: self.theme.clone(),
            text_model: self.text_model.clone(),
            idea: self.idea.clone(),
            context: self.context.clone(),
            voice_model: self.voice_model.clone(),
            text_position: self.text_position.clone(),
            text_font: self.text_font.clone(),
        }
    }
}
