//! Idea and context section

use eframe::egui;

use super::super::PanelAction;
use super::super::helpers::{caption, render_section_frame, section_label};
use super::super::state::StoryPanel;

const CONTEXT_CAPTION: &str =
    "Paste if you have an already made content or feel free to edit from the generated idea.";

pub(in crate::gui::story) fn render_idea_context(
    ui: &mut egui::Ui,
    panel: &mut StoryPanel,
    actions: &mut Vec<PanelAction>,
) {
    render_section_frame(ui, |ui| {
        ui.label(section_label("Idea", &panel.label_family));
        ui.add_space(8.0);
        ui.add(
            egui::TextEdit::singleline(&mut panel.idea)
                .hint_text("Tell me your idea.")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button("Generate").clicked() {
                actions.push(PanelAction::Generate);
            }
        });

        ui.add_space(8.0);
        ui.label(section_label("Context", &panel.label_family));
        ui.label(caption(CONTEXT_CAPTION));
        ui.add_space(8.0);
        ui.add(
            egui::TextEdit::multiline(&mut panel.context)
                .desired_rows(8)
                .desired_width(f32::INFINITY),
        );
    });
}
