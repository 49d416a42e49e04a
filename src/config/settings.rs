//! Settings configuration types

mod api_keys;
mod assets;
mod story;

pub use api_keys::ApiKeys;
pub use assets::AssetSettings;
pub use story::StorySettings;
