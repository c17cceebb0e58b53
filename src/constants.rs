// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// UI Constants
pub mod ui {
    /// Left inset of the flash button in the top bar
    pub const BAR_LEFT_OFFSET: f32 = 11.0;

    /// Right inset of the rotate button in the top bar
    pub const BAR_RIGHT_OFFSET: f32 = 7.0;

    /// Top bar height
    pub const BAR_HEIGHT: f32 = 34.0;

    /// Flash icon edge length
    pub const FLASH_ICON_SIZE: u16 = 20;

    /// Rotate icon edge length
    pub const ROTATE_ICON_SIZE: u16 = 24;

    /// Gap between the flash icon and its label
    pub const FLASH_LABEL_GAP: f32 = 4.0;

    /// Flash label text size
    pub const FLASH_LABEL_TEXT_SIZE: u16 = 14;

    /// Flash label color while the flash is forced on (r, g, b)
    pub const FLASH_ON_LABEL_COLOR: (f32, f32, f32) = (0.98, 0.98, 0.45);

    /// Overlay button/container background transparency
    pub const OVERLAY_BACKGROUND_ALPHA: f32 = 0.6;

    /// Overlay container corner radius
    pub const OVERLAY_CORNER_RADIUS: f32 = 8.0;

    /// Standard icon button width (for layout balancing)
    pub const ICON_BUTTON_WIDTH: f32 = 44.0;

    /// Placeholder width when the rotate button is hidden
    pub const PLACEHOLDER_BUTTON_WIDTH: f32 = 40.0;

    /// Viewfinder caption text size
    pub const VIEWFINDER_CAPTION_TEXT_SIZE: u16 = 16;
}

/// Application metadata
pub mod app_info {
    /// Version string derived at build time
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_fits_its_controls() {
        // Both icons must fit inside the bar height
        assert!(f32::from(ui::FLASH_ICON_SIZE) <= ui::BAR_HEIGHT);
        assert!(f32::from(ui::ROTATE_ICON_SIZE) <= ui::BAR_HEIGHT);
    }

    #[test]
    fn test_overlay_alpha_in_range() {
        assert!(ui::OVERLAY_BACKGROUND_ALPHA > 0.0 && ui::OVERLAY_BACKGROUND_ALPHA <= 1.0);
    }
}
