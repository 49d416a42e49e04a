//! Story panel section render functions
//!
//! Each function renders one framed group of the settings column.

mod idea_context;
mod theme_model;
mod video_options;
mod voiceover;

pub(super) use idea_context::render_idea_context;
pub(super) use theme_model::render_theme_model;
pub(super) use video_options::render_video_options;
pub(super) use voiceover::render_voiceover;

use eframe::egui;

use super::PanelAction;
use super::helpers::{render_setting_row, section_label};
use super::state::StoryPanel;
use crate::story::SettingKey;

/// Render one enumerated setting and record a change
fn render_setting(
    ui: &mut egui::Ui,
    panel: &mut StoryPanel,
    key: SettingKey,
    actions: &mut Vec<PanelAction>,
) {
    let label = section_label(key.label(), &panel.label_family);
    let picked = render_setting_row(ui, key, panel.value(key), label);
    if let Some(action) = picked.and_then(|option| panel.select(key, option)) {
        actions.push(action);
    }
}
