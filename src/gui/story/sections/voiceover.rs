//! Voiceover preview section

use eframe::egui;

use super::super::PanelAction;
use super::super::helpers::render_section_frame;
use super::super::state::StoryPanel;
use super::render_setting;
use crate::story::SettingKey;

pub(in crate::gui::story) fn render_voiceover(
    ui: &mut egui::Ui,
    panel: &mut StoryPanel,
    actions: &mut Vec<PanelAction>,
) {
    render_section_frame(ui, |ui| {
        render_setting(ui, panel, SettingKey::VoiceModel, actions);
        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button("Play").clicked() {
                actions.push(PanelAction::PlayVoice);
            }
        });
    });
}
