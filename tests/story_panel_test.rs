//! Binding between the story panel and the config store

mod common;

use common::{RecordingStore, custom_settings};
use reelsmith::config::StorySettings;
use reelsmith::gui::{PanelAction, StoryPanel};
use reelsmith::story::{SettingKey, StoryError};

#[test]
fn test_construction_reflects_stored_values() {
    let store = RecordingStore::with_settings(custom_settings());
    let panel = StoryPanel::new(&store);

    for key in SettingKey::ALL {
        assert_eq!(panel.value(key), key.read(&store.settings), "{key}");
    }
    assert_eq!(panel.idea(), "");
    assert_eq!(panel.context(), "");
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_construction_keeps_undeclared_values() {
    let store = RecordingStore::with_settings(StorySettings {
        theme: "Romance".to_string(),
        font: "Comic Sans".to_string(),
        ..StorySettings::default()
    });
    let panel = StoryPanel::new(&store);

    assert_eq!(panel.value(SettingKey::Theme), "Romance");
    assert_eq!(panel.value(SettingKey::Font), "Comic Sans");
}

#[test]
fn test_theme_change_scenario() {
    let mut store = RecordingStore::default();
    assert_eq!(store.settings.theme, "Horror");
    let mut panel = StoryPanel::new(&store);

    let action = panel.select(SettingKey::Theme, "Facts");
    assert_eq!(action, Some(PanelAction::SettingChanged(SettingKey::Theme)));
    panel.on_setting_changed(&mut store);

    assert_eq!(store.settings.theme, "Facts");
    assert_eq!(store.settings.text_model, "DeepInfra");
    assert_eq!(store.settings.voice_model, "Arceus");
    assert_eq!(store.settings.font, "default");
    assert_eq!(store.settings.text_position, "center");
    assert_eq!(store.save_count(), 1);
}

#[test]
fn test_every_setting_change_saves_once() {
    let mut store = RecordingStore::default();
    let mut panel = StoryPanel::new(&store);

    for (i, key) in SettingKey::ALL.into_iter().enumerate() {
        let new_value = *key.options().last().unwrap();
        if panel.select(key, new_value).is_some() {
            panel.on_setting_changed(&mut store);
        }
        assert_eq!(key.read(&store.settings), new_value);
        assert_eq!(store.save_count(), i + 1, "{key}");
    }
}

#[test]
fn test_change_rewrites_all_enumerated_fields() {
    let mut store = RecordingStore::with_settings(custom_settings());
    let mut panel = StoryPanel::new(&store);

    // Someone else edited the store after the panel was built
    store.settings.voice_model = "Asteria".to_string();

    panel.select(SettingKey::Font, "Futura");
    panel.on_setting_changed(&mut store);

    // The panel's view of the other fields wins
    assert_eq!(store.settings.voice_model, "Luna");
    assert_eq!(store.settings.font, "Futura");
    assert_eq!(store.save_count(), 1);
}

#[test]
fn test_free_text_never_reaches_store() {
    let mut store = RecordingStore::default();
    let mut panel = StoryPanel::new(&store);
    panel.set_idea("Horror");
    panel.set_context("Facts about deep sea creatures");

    panel.select(SettingKey::VoiceModel, "Asteria");
    panel.on_setting_changed(&mut store);

    let saved = &store.saved[0];
    assert_eq!(saved.theme, "Horror");
    assert_eq!(saved.voice_model, "Asteria");
    let serialized = toml::to_string(saved).unwrap();
    assert!(!serialized.contains("deep sea"));
}

#[test]
fn test_selecting_current_value_is_not_a_change() {
    let store = RecordingStore::default();
    let mut panel = StoryPanel::new(&store);

    assert_eq!(panel.select(SettingKey::TextPosition, "center"), None);
}

#[test]
fn test_empty_idea_warns_on_each_click() {
    let store = RecordingStore::with_settings(custom_settings());
    let mut panel = StoryPanel::new(&store);

    assert_eq!(panel.on_generate_clicked(), Err(StoryError::MissingIdea));
    assert_eq!(panel.warning(), Some(&StoryError::MissingIdea));
    panel.dismiss_warning();

    assert_eq!(panel.on_generate_clicked(), Err(StoryError::MissingIdea));
    assert_eq!(panel.warning(), Some(&StoryError::MissingIdea));

    assert_eq!(store.save_count(), 0);
    assert_eq!(store.settings, custom_settings());
}

#[test]
fn test_whitespace_idea_does_not_warn() {
    let store = RecordingStore::default();
    let mut panel = StoryPanel::new(&store);
    panel.set_idea(" ");

    assert!(panel.on_generate_clicked().is_ok());
    assert!(panel.warning().is_none());
}

#[test]
fn test_warning_dialog_text() {
    assert_eq!(StoryError::MissingIdea.title(), "No Idea!");
    assert_eq!(
        StoryError::MissingIdea.to_string(),
        "Please input some idea before clicking generate."
    );
}
