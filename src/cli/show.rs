//! Show command implementation

use std::path::Path;

use anyhow::{Context, Result};

use reelsmith::config::{Config, StorySettings};
use reelsmith::story::SettingKey;

/// Print the persisted story settings
pub fn show_command(config_path: &Path, json: bool) -> Result<()> {
    let config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        tracing::info!(
            "No config at {}, showing defaults",
            config_path.display()
        );
        Config::default()
    };

    println!("{}", render_story_settings(&config.story_settings, json)?);

    for key in SettingKey::ALL {
        let value = key.read(&config.story_settings);
        if !key.is_declared(value) {
            tracing::warn!(
                "{} is set to \"{}\", which is not one of: {}",
                key,
                value,
                key.options().join(", ")
            );
        }
    }

    Ok(())
}

fn render_story_settings(settings: &StorySettings, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(settings).context("Failed to serialize story settings")
    } else {
        let content =
            toml::to_string_pretty(settings).context("Failed to serialize story settings")?;
        Ok(format!("[story_settings]\n{}", content.trim_end()))
    }
}
