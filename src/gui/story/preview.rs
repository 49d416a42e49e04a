//! Preview image loading

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use tracing::warn;

/// Displayed size of the preview (portrait 9:16)
pub(super) const PREVIEW_SIZE: egui::Vec2 = egui::vec2(360.0, 640.0);

/// Preview image, decoded lazily on the first frame that shows it
pub(super) enum PreviewImage {
    /// No image configured
    None,
    /// Not decoded yet
    Pending(PathBuf),
    Loaded(TextureHandle),
    /// Decoding failed, the placeholder is shown instead
    Missing,
}

impl PreviewImage {
    /// Decode the pending image into a texture, once
    pub(super) fn texture(&mut self, ctx: &egui::Context) -> Option<&TextureHandle> {
        if let PreviewImage::Pending(path) = self {
            *self = match decode_image(path) {
                Ok(image) => PreviewImage::Loaded(ctx.load_texture(
                    "story_preview",
                    image,
                    TextureOptions::LINEAR,
                )),
                Err(e) => {
                    warn!("Preview image unavailable: {:#}", e);
                    PreviewImage::Missing
                }
            };
        }

        match self {
            PreviewImage::Loaded(texture) => Some(texture),
            _ => None,
        }
    }
}

fn decode_image(path: &Path) -> Result<ColorImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to load {}", path.display()))?
        .into_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
}
