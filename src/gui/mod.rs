//! Desktop GUI for reelsmith
//!
//! A single window hosting the story settings panel. The panel raises
//! [`PanelAction`]s which the app routes to the config store and, for
//! generation, validates before handing off.

pub mod app;
mod app_eframe;
mod app_theme;
pub mod runner;
pub mod story;
pub mod theme;

pub use app::StudioApp;
pub use runner::run_gui;
pub use story::{PanelAction, StoryPanel};
