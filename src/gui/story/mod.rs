//! Story settings panel
//!
//! Renders the story view where users can:
//! - Pick a theme and the text generation model
//! - Enter an idea (or paste an existing story as context) and generate
//! - Choose the voiceover voice
//! - Configure clips, caption position and caption font
//!
//! Every change to an enumerated setting is written back to the config store.

mod action;
mod dialog;
mod helpers;
mod panel;
mod preview;
mod save;
mod sections;
mod state;

pub use action::PanelAction;
pub use state::StoryPanel;
