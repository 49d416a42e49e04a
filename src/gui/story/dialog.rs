//! Modal warning dialog

use eframe::egui::{self, RichText};

use super::state::StoryPanel;
use crate::gui::theme::{ACCENT_YELLOW, BG_PRIMARY, BG_SECONDARY, TEXT_PRIMARY};

/// Render the open warning, if any, on top of everything else.
///
/// The modal blocks the panel underneath. OK, Enter, Escape or a click on the
/// backdrop dismisses it.
pub(super) fn render_warning_dialog(ctx: &egui::Context, panel: &mut StoryPanel) {
    let Some(warning) = panel.warning.clone() else {
        return;
    };

    let frame = egui::Frame::NONE
        .fill(BG_SECONDARY)
        .stroke(egui::Stroke::new(1.0, ACCENT_YELLOW))
        .corner_radius(6.0)
        .inner_margin(16.0);

    let modal = egui::Modal::new(egui::Id::new("story_warning"))
        .frame(frame)
        .backdrop_color(BG_PRIMARY.gamma_multiply(0.6))
        .show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.label(
                RichText::new(format!("⚠ {}", warning.title()))
                    .size(16.0)
                    .color(ACCENT_YELLOW),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(warning.to_string()).color(TEXT_PRIMARY));
            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.button("OK").clicked()
            })
            .inner
        });

    let enter_pressed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
    if modal.inner || enter_pressed || modal.should_close() {
        panel.dismiss_warning();
    }
}
