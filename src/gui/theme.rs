//! GUI Theme: "Darkroom" - muted film-studio palette
//!
//! Color constants for the reelsmith GUI.

use eframe::egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Background: near-black with a warm tint
pub const BG_PRIMARY: Color32 = Color32::from_rgb(20, 19, 22);
/// Secondary background for section frames and the preview column
pub const BG_SECONDARY: Color32 = Color32::from_rgb(30, 29, 34);
/// Hovered/active widget background
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(48, 44, 56);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(236, 232, 225);
pub const TEXT_DIM: Color32 = Color32::from_rgb(170, 164, 156);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(118, 112, 106);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_RED: Color32 = Color32::from_rgb(230, 80, 70);
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(245, 190, 70);
