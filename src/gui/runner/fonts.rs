//! Font configuration for the GUI

use std::path::Path;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::info;

/// Name of the family registered for section labels
const LABEL_FAMILY: &str = "futura";

/// Register the label font at `path` as its own family.
///
/// Returns the family to use for labels; the default proportional family
/// when the font file is unavailable.
pub(super) fn configure_fonts(ctx: &egui::Context, path: &Path) -> FontFamily {
    let font_data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            info!(
                "Label font not loaded ({}): {}. Using default font.",
                path.display(),
                e
            );
            return FontFamily::Proportional;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(
        LABEL_FAMILY.to_owned(),
        FontData::from_owned(font_data).into(),
    );

    // Fall back to the proportional fonts for glyphs the label font lacks
    let mut family = vec![LABEL_FAMILY.to_owned()];
    if let Some(proportional) = fonts.families.get(&FontFamily::Proportional) {
        family.extend(proportional.iter().cloned());
    }
    fonts
        .families
        .insert(FontFamily::Name(LABEL_FAMILY.into()), family);

    ctx.set_fonts(fonts);
    info!("Loaded label font from: {}", path.display());

    FontFamily::Name(LABEL_FAMILY.into())
}
