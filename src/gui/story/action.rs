//! User intents raised by the story panel

use crate::story::SettingKey;

/// Something the user did on the story panel that the app has to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    /// An enumerated setting got a new value
    SettingChanged(SettingKey),
    /// "Generate" was clicked next to the idea input
    Generate,
    /// "Render Video" was clicked
    RenderVideo,
    /// "Play" was clicked next to the voice model
    PlayVoice,
    /// "browse" was clicked on the clips row
    BrowseClips,
    /// "randomize" was clicked on the position row
    RandomizePosition,
}
