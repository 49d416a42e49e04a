//! Video options section (clips, caption placement and font)

use eframe::egui;

use super::super::PanelAction;
use super::super::helpers::{render_button_row, render_section_frame, section_label};
use super::super::state::StoryPanel;
use super::render_setting;
use crate::story::SettingKey;

pub(in crate::gui::story) fn render_video_options(
    ui: &mut egui::Ui,
    panel: &mut StoryPanel,
    actions: &mut Vec<PanelAction>,
) {
    render_section_frame(ui, |ui| {
        if render_button_row(ui, section_label("Clips", &panel.label_family), "browse") {
            actions.push(PanelAction::BrowseClips);
        }
        ui.add_space(12.0);

        let label = section_label("Randomize position", &panel.label_family);
        if render_button_row(ui, label, "randomize") {
            actions.push(PanelAction::RandomizePosition);
        }
        ui.add_space(12.0);

        render_setting(ui, panel, SettingKey::TextPosition, actions);
        ui.add_space(12.0);
        render_setting(ui, panel, SettingKey::Font, actions);
    });
}
