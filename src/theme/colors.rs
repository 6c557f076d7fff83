//! Colors - Campus Theme Colors

use gpui::{rgb, Rgba};

/// Campus color palette - All colors are accessed via associated functions
pub struct CampusColors;

impl CampusColors {
    // Primary colors
    /// Primary accent - Indigo (active page, primary buttons)
    pub fn accent() -> Rgba { rgb(0x4f46e5) }
    /// Sidebar background - Deep indigo
    pub fn sidebar_bg() -> Rgba { rgb(0x1e1b4b) }
    /// Sidebar active item
    pub fn sidebar_active() -> Rgba { rgb(0x3730a3) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf3f4f6) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x111827) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x16a34a) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xd97706) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xdc2626) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xeef2ff) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xf9fafb) }

    // Row tones
    pub fn row_muted() -> Rgba { rgb(0xf3f4f6) }
    pub fn row_success() -> Rgba { rgb(0xf0fdf4) }
    pub fn row_warning() -> Rgba { rgb(0xfffbeb) }
    pub fn row_danger() -> Rgba { rgb(0xfef2f2) }
}
