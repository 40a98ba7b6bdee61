//! Color Constants
//!
//! Slate/teal palette used across the client, plus the complaint status
//! badge colors.

use eframe::egui::Color32;

/// Main background - deep slate
pub const BG_DARK: Color32 = Color32::from_rgb(0x17, 0x1D, 0x24);

/// Card/panel background - raised slate
pub const CARD_BG: Color32 = Color32::from_rgb(0x1F, 0x27, 0x31);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x11, 0x16, 0x1C);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xED, 0xF2);

/// Muted text
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8C, 0x9A, 0xA8);

/// Accent - civic teal
pub const ACCENT: Color32 = Color32::from_rgb(0x2D, 0x9C, 0x8F);

/// Primary button fill
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x2D, 0x9C, 0x8F);

/// Secondary button fill
pub const BUTTON_SECONDARY: Color32 = Color32::from_rgb(0x31, 0x3C, 0x48);

/// Success - green
pub const SUCCESS: Color32 = Color32::from_rgb(0x3B, 0x8C, 0x4E);

/// Error - red
pub const ERROR: Color32 = Color32::from_rgb(0xC6, 0x4A, 0x4A);

/// Divider between list entries
pub const SEPARATOR: Color32 = Color32::from_rgb(0x2B, 0x35, 0x40);

/// Status badge - resolved complaints
pub const STATUS_COMPLETED: Color32 = Color32::from_rgb(0x3B, 0x8C, 0x4E);

/// Status badge - complaints being worked on
pub const STATUS_IN_PROGRESS: Color32 = Color32::from_rgb(0xC9, 0x8A, 0x2C);

/// Status badge - anything else
pub const STATUS_OPEN: Color32 = Color32::from_rgb(0x55, 0x61, 0x6D);
