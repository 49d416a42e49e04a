//! eframe::App implementation for StudioApp
//!
//! Contains the main update loop that runs every frame.

use eframe::egui;

use super::app::StudioApp;
use super::theme::BG_PRIMARY;
use crate::config::ConfigStore;

impl<S: ConfigStore> eframe::App for StudioApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions = egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY))
            .show(ctx, |ui| self.story_panel.render(ui))
            .inner;

        for action in actions {
            self.handle_panel_action(action);
        }
    }
}
