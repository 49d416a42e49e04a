//! Main application state

use std::path::PathBuf;

use eframe::egui::FontFamily;
use tracing::{debug, info};

use super::story::{PanelAction, StoryPanel};
use crate::config::{ConfigStore, FileConfigStore};
use crate::story::StoryRequest;

/// Main application: owns the config store and the story panel
pub struct StudioApp<S: ConfigStore = FileConfigStore> {
    pub(crate) store: S,
    pub(crate) story_panel: StoryPanel,
    /// Last validated generation request, waiting for a story generator
    pub(crate) last_request: Option<StoryRequest>,
}

impl<S: ConfigStore> StudioApp<S> {
    pub fn new(store: S) -> Self {
        let story_panel = StoryPanel::new(&store);
        Self {
            store,
            story_panel,
            last_request: None,
        }
    }

    /// Show the image at `path` in the story panel's preview pane
    pub fn with_preview(mut self, path: PathBuf) -> Self {
        self.story_panel.set_preview(path);
        self
    }

    pub fn set_label_family(&mut self, family: FontFamily) {
        self.story_panel.set_label_family(family);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn story_panel(&self) -> &StoryPanel {
        &self.story_panel
    }

    pub fn story_panel_mut(&mut self) -> &mut StoryPanel {
        &mut self.story_panel
    }

    pub fn last_request(&self) -> Option<&StoryRequest> {
        self.last_request.as_ref()
    }

    /// Route a panel action to its handler
    pub fn handle_panel_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::SettingChanged(key) => {
                debug!("Story setting changed: {}", key);
                self.story_panel.on_setting_changed(&mut self.store);
            }
            PanelAction::Generate => match self.story_panel.on_generate_clicked() {
                Ok(request) => {
                    info!(
                        theme = %request.values.theme,
                        text_model = %request.values.text_model,
                        "Story generation requested"
                    );
                    self.last_request = Some(request);
                }
                Err(e) => debug!("Generate rejected: {}", e),
            },
            // No backend is wired to these controls yet
            PanelAction::RenderVideo
            | PanelAction::PlayVoice
            | PanelAction::BrowseClips
            | PanelAction::RandomizePosition => {
                debug!("Panel action not available yet: {:?}", action);
            }
        }
    }
}
