//! Asset location settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Location of bundled assets (preview image, caption fonts)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSettings {
    /// Asset root; relative paths resolve against the working directory
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
        }
    }
}

impl AssetSettings {
    /// Placeholder image shown in the preview pane
    pub fn preview_image_path(&self) -> PathBuf {
        self.dir.join("preview").join("default.png")
    }

    /// Font used for section labels
    pub fn label_font_path(&self) -> PathBuf {
        self.dir.join("fonts").join("futura-extra-bold.ttf")
    }
}
