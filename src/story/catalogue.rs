//! Enumerated story settings and their declared options

use crate::config::StorySettings;

/// One of the five persisted, enumerated story settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Theme,
    TextModel,
    VoiceModel,
    TextPosition,
    Font,
}

impl SettingKey {
    /// All keys in panel order
    pub const ALL: [SettingKey; 5] = [
        SettingKey::Theme,
        SettingKey::TextModel,
        SettingKey::VoiceModel,
        SettingKey::TextPosition,
        SettingKey::Font,
    ];

    /// Row label shown next to the combo box
    pub fn label(self) -> &'static str {
        match self {
            SettingKey::Theme => "Theme",
            SettingKey::TextModel => "Text Model",
            SettingKey::VoiceModel => "Voice model",
            SettingKey::TextPosition => "Text position",
            SettingKey::Font => "Text font",
        }
    }

    /// Options offered by the combo box
    pub fn options(self) -> &'static [&'static str] {
        match self {
            SettingKey::Theme => &["Horror", "Facts"],
            SettingKey::TextModel => &["DeepInfra", "Openai"],
            SettingKey::VoiceModel => &["Arceus", "Luna", "Asteria"],
            SettingKey::TextPosition => &["top", "center", "bottom"],
            SettingKey::Font => &["default", "Futura", "Monosans"],
        }
    }

    /// Stable egui id salt for the combo box
    pub fn id_salt(self) -> &'static str {
        match self {
            SettingKey::Theme => "story_theme",
            SettingKey::TextModel => "story_text_model",
            SettingKey::VoiceModel => "story_voice_model",
            SettingKey::TextPosition => "story_text_position",
            SettingKey::Font => "story_font",
        }
    }

    /// Whether `value` is one of the declared options.
    ///
    /// Only used for display; undeclared values are never rejected.
    pub fn is_declared(self, value: &str) -> bool {
        self.options().contains(&value)
    }

    pub fn read(self, settings: &StorySettings) -> &str {
        match self {
            SettingKey::Theme => &settings.theme,
            SettingKey::TextModel => &settings.text_model,
            SettingKey::VoiceModel => &settings.voice_model,
            SettingKey::TextPosition => &settings.text_position,
            SettingKey::Font => &settings.font,
        }
    }

    pub fn write(self, settings: &mut StorySettings, value: String) {
        let slot = match self {
            SettingKey::Theme => &mut settings.theme,
            SettingKey::TextModel => &mut settings.text_model,
            SettingKey::VoiceModel => &mut settings.voice_model,
            SettingKey::TextPosition => &mut settings.text_position,
            SettingKey::Font => &mut settings.font,
        };
        *slot = value;
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_declared_options() {
        let settings = StorySettings::default();
        for key in SettingKey::ALL {
            assert!(
                key.is_declared(key.read(&settings)),
                "default for {key} is not offered"
            );
        }
    }

    #[test]
    fn test_write_touches_only_its_field() {
        let mut settings = StorySettings::default();
        SettingKey::TextPosition.write(&mut settings, "bottom".to_string());

        assert_eq!(settings.text_position, "bottom");
        assert_eq!(
            StorySettings {
                text_position: "center".to_string(),
                ..settings
            },
            StorySettings::default()
        );
    }

    #[test]
    fn test_option_lists() {
        assert_eq!(SettingKey::Theme.options(), &["Horror", "Facts"]);
        assert_eq!(SettingKey::VoiceModel.options().len(), 3);
        assert!(!SettingKey::Font.is_declared("Comic Sans"));
        assert!(!SettingKey::Theme.is_declared("horror"));
    }
}
