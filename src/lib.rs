//! Reelsmith - desktop studio for short story videos
//!
//! The user picks a theme, a text generation model, a voiceover voice and the
//! caption style, then types an idea (or pastes a finished story) and renders
//! a video. This crate holds the settings side of that workflow:
//!
//! - [`config`]: the TOML config file and the [`config::ConfigStore`] seam
//! - [`story`]: the enumerated settings catalogue and the settings snapshot
//! - [`gui`]: the egui story panel and the window that hosts it

pub mod config;
pub mod gui;
pub mod story;
