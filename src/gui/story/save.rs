//! Settings save and generate handling
//!
//! Writes the enumerated settings back to the config store and validates the
//! idea before a story is generated.

use tracing::{debug, warn};

use super::state::StoryPanel;
use crate::config::ConfigStore;
use crate::story::{StoryError, StoryRequest};

impl StoryPanel {
    /// Persist the panel after any enumerated setting changed.
    ///
    /// All five enumerated fields are rewritten from the current snapshot and
    /// the store is saved once. Idea and context never reach the store.
    pub fn on_setting_changed(&mut self, store: &mut impl ConfigStore) {
        let values = self.snapshot();
        values.apply_to(store.story_settings_mut());

        match store.save() {
            Ok(()) => {
                debug!(
                    theme = %values.theme,
                    text_model = %values.text_model,
                    voice_model = %values.voice_model,
                    text_position = %values.text_position,
                    font = %values.text_font,
                    "Saved story settings"
                );
                self.save_error = None;
            }
            Err(e) => {
                warn!("Failed to save story settings: {:#}", e);
                self.save_error = Some(format!("Failed to save settings: {:#}", e));
            }
        }
    }

    /// Handle a click on "Generate".
    ///
    /// An empty idea opens the warning dialog. Whitespace is not trimmed, so
    /// an idea of " " goes through.
    pub fn on_generate_clicked(&mut self) -> Result<StoryRequest, StoryError> {
        match StoryRequest::try_from(self.snapshot()) {
            Ok(request) => Ok(request),
            Err(e) => {
                self.warning = Some(e.clone());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorySettings;

    #[derive(Default)]
    struct MemoryStore {
        settings: StorySettings,
        saves: usize,
        fail: bool,
    }

    impl ConfigStore for MemoryStore {
        fn story_settings(&self) -> &StorySettings {
            &self.settings
        }

        fn story_settings_mut(&mut self) -> &mut StorySettings {
            &mut self.settings
        }

        fn save(&mut self) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("disk full");
            }
            self.saves += 1;
            Ok(())
        }
    }

    #[test]
    fn test_save_failure_is_reported_and_cleared() {
        let mut store = MemoryStore {
            fail: true,
            ..Default::default()
        };
        let mut panel = StoryPanel::new(&store);

        panel.on_setting_changed(&mut store);
        assert_eq!(panel.save_error(), Some("Failed to save settings: disk full"));

        store.fail = false;
        panel.on_setting_changed(&mut store);
        assert_eq!(panel.save_error(), None);
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn test_generate_with_idea_returns_snapshot() {
        let store = MemoryStore::default();
        let mut panel = StoryPanel::new(&store);
        panel.set_idea("a lighthouse keeper hears knocking");
        panel.set_context("draft");

        let request = panel.on_generate_clicked().unwrap();
        assert_eq!(request.values.idea, "a lighthouse keeper hears knocking");
        assert_eq!(request.values.context, "draft");
        assert!(panel.warning().is_none());
    }

    #[test]
    fn test_generate_without_idea_opens_warning() {
        let store = MemoryStore::default();
        let mut panel = StoryPanel::new(&store);

        assert_eq!(panel.on_generate_clicked(), Err(StoryError::MissingIdea));
        assert_eq!(panel.warning(), Some(&StoryError::MissingIdea));

        panel.dismiss_warning();
        assert!(panel.warning().is_none());
    }
}
