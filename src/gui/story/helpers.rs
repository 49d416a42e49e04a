//! UI helper functions for the story panel

use eframe::egui::{self, FontFamily, RichText};

use crate::gui::theme::{ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::story::SettingKey;

const COMBO_WIDTH: f32 = 140.0;

/// 16pt section label in the label font family
pub(super) fn section_label(text: &str, family: &FontFamily) -> RichText {
    RichText::new(text)
        .font(egui::FontId::new(16.0, family.clone()))
        .color(TEXT_PRIMARY)
}

/// 12pt caption under a label
pub(super) fn caption(text: &str) -> RichText {
    RichText::new(text).size(12.0).color(TEXT_MUTED)
}

/// Render a section frame with secondary background
pub(super) fn render_section_frame<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(6.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Render a labeled row with a trailing button. Returns true when clicked.
pub(super) fn render_button_row(
    ui: &mut egui::Ui,
    label: RichText,
    button_text: &str,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.button(button_text).clicked()
        })
        .inner
    })
    .inner
}

/// Render a labeled combo box for an enumerated setting.
///
/// Returns the option the user clicked this frame, if any. A current value
/// that is not one of the declared options is shown as-is with a "custom" hint.
pub(super) fn render_setting_row(
    ui: &mut egui::Ui,
    key: SettingKey,
    current: &str,
    label: RichText,
) -> Option<&'static str> {
    let mut picked = None;
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::ComboBox::from_id_salt(key.id_salt())
                .selected_text(current)
                .width(COMBO_WIDTH)
                .show_ui(ui, |ui| {
                    for option in key.options() {
                        if ui.selectable_label(*option == current, *option).clicked() {
                            picked = Some(*option);
                        }
                    }
                });

            if !key.is_declared(current) {
                ui.label(RichText::new("custom").small().color(TEXT_DIM))
                    .on_hover_text(format!("\"{}\" is not one of the built-in options", current));
            }
        });
    });
    picked
}

/// Render the last save failure, if any
pub(super) fn render_save_error(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(msg) = error {
        ui.label(RichText::new(msg).color(ACCENT_RED));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::text::LayoutJob;

    #[test]
    fn test_section_label_uses_label_family_and_primary_color() {
        let family = FontFamily::Name("futura".into());
        let mut job = LayoutJob::default();
        section_label("Theme", &family).append_to(
            &mut job,
            &egui::Style::default(),
            egui::FontSelection::Default,
            egui::Align::Center,
        );

        let format = &job.sections[0].format;
        assert_eq!(format.font_id, egui::FontId::new(16.0, family));
        assert_eq!(format.color, TEXT_PRIMARY);
    }
}
