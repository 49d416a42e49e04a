//! Theme and text model section

use eframe::egui;

use super::super::PanelAction;
use super::super::helpers::render_section_frame;
use super::super::state::StoryPanel;
use super::render_setting;
use crate::story::SettingKey;

pub(in crate::gui::story) fn render_theme_model(
    ui: &mut egui::Ui,
    panel: &mut StoryPanel,
    actions: &mut Vec<PanelAction>,
) {
    render_section_frame(ui, |ui| {
        render_setting(ui, panel, SettingKey::Theme, actions);
        ui.add_space(12.0);
        render_setting(ui, panel, SettingKey::TextModel, actions);
    });
}
