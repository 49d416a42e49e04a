//! GUI runner - launches the reelsmith window

mod fonts;

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::StudioApp;
use super::app_theme::apply_theme;
use crate::config::{Config, FileConfigStore};

use fonts::configure_fonts;

/// Resolve the config path: explicit override (relative to the current
/// directory) or the global `~/.reelsmith/config.toml`.
pub fn resolve_config_path(config_override: Option<PathBuf>) -> PathBuf {
    match config_override {
        Some(p) if p.is_absolute() => p,
        Some(p) => std::env::current_dir()
            .map(|cwd| cwd.join(&p))
            .unwrap_or(p),
        None => Config::global_config_path(),
    }
}

/// Run the GUI until the window is closed
pub fn run_gui(config_override: Option<PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(config_override);
    info!("Using config {}", config_path.display());

    let store = FileConfigStore::open(config_path);
    let assets = store.config().assets.clone();

    let mut app = StudioApp::new(store).with_preview(assets.preview_image_path());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("reelsmith")
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([800.0, 560.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "reelsmith",
        options,
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx);
            let label_family = configure_fonts(&cc.egui_ctx, &assets.label_font_path());
            app.set_label_family(label_family);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
