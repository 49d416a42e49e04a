//! Main story panel rendering
//!
//! Left column is the video preview, right column the scrollable settings,
//! with "Render Video" anchored below.

use eframe::egui::{self, RichText, ScrollArea};

use super::PanelAction;
use super::dialog::render_warning_dialog;
use super::helpers::render_save_error;
use super::preview::PREVIEW_SIZE;
use super::sections::{
    render_idea_context, render_theme_model, render_video_options, render_voiceover,
};
use super::state::StoryPanel;
use crate::gui::theme::{BG_SECONDARY, TEXT_MUTED};

const PREVIEW_MARGIN: f32 = 32.0;

impl StoryPanel {
    /// Render the panel into `ui` and return the actions raised this frame
    pub fn render(&mut self, ui: &mut egui::Ui) -> Vec<PanelAction> {
        let mut actions = Vec::new();

        egui::SidePanel::left("story_preview")
            .resizable(false)
            .exact_width(PREVIEW_SIZE.x + PREVIEW_MARGIN * 2.0)
            .frame(egui::Frame::NONE.fill(BG_SECONDARY))
            .show_inside(ui, |ui| self.render_preview(ui));

        egui::TopBottomPanel::bottom("story_actions")
            .frame(egui::Frame::NONE.inner_margin(egui::Margin {
                left: 24,
                right: 24,
                top: 8,
                bottom: 16,
            }))
            .show_inside(ui, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Render Video").clicked() {
                        actions.push(PanelAction::RenderVideo);
                    }
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.inner_margin(egui::Margin {
                left: 24,
                right: 24,
                top: 24,
                bottom: 16,
            }))
            .show_inside(ui, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.render_settings(ui, &mut actions));
            });

        render_warning_dialog(ui.ctx(), self);

        actions
    }

    fn render_settings(&mut self, ui: &mut egui::Ui, actions: &mut Vec<PanelAction>) {
        render_theme_model(ui, self, actions);
        ui.add_space(20.0);
        render_idea_context(ui, self, actions);
        ui.add_space(20.0);
        render_voiceover(ui, self, actions);
        ui.add_space(20.0);
        render_video_options(ui, self, actions);

        ui.add_space(8.0);
        render_save_error(ui, self.save_error.as_deref());
    }

    fn render_preview(&mut self, ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| match self.preview.texture(ui.ctx()) {
            Some(texture) => {
                let sized = egui::load::SizedTexture::new(texture.id(), PREVIEW_SIZE);
                ui.add(egui::Image::from_texture(sized));
            }
            None => {
                ui.add_sized(
                    PREVIEW_SIZE,
                    egui::Label::new(RichText::new("Preview").color(TEXT_MUTED)),
                );
            }
        });
    }
}
