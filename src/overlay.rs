// SPDX-License-Identifier: GPL-3.0-only

//! State of the capture overlay controls
//!
//! The overlay owns the flash mode and the current orientation. Pressing a
//! control produces an [`OverlayEvent`] that the hosting screen consumes;
//! the overlay itself never reaches into the rest of the application.

use crate::flash::FlashMode;
use crate::orientation::Orientation;

/// Notification emitted by an overlay control activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// The flash button was pressed; carries the mode it cycled to
    FlashModeChanged(FlashMode),
    /// The rotate button was pressed; the host is expected to switch
    /// the active camera
    RotateRequested,
}

/// Mutable state behind the two overlay controls
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayState {
    flash: FlashMode,
    orientation: Orientation,
}

impl OverlayState {
    pub fn new(flash: FlashMode, orientation: Orientation) -> Self {
        Self { flash, orientation }
    }

    /// Currently selected flash mode
    pub fn flash(&self) -> FlashMode {
        self.flash
    }

    /// Orientation the controls are rotated for
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Activate the flash button: advance the mode and report the new one
    pub fn press_flash(&mut self) -> OverlayEvent {
        self.flash = self.flash.next();
        OverlayEvent::FlashModeChanged(self.flash)
    }

    /// Activate the rotate button
    ///
    /// Leaves all overlay state untouched; switching cameras is the
    /// host's job.
    pub fn press_rotate(&self) -> OverlayEvent {
        OverlayEvent::RotateRequested
    }

    /// Adopt a new device orientation; the next render picks it up
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_index_after_n_presses_is_n_mod_3() {
        let mut overlay = OverlayState::default();
        for n in 1..=20usize {
            overlay.press_flash();
            assert_eq!(overlay.flash().index(), n % 3);
        }
    }

    #[test]
    fn test_press_flash_reports_new_mode() {
        let mut overlay = OverlayState::default();
        assert_eq!(
            overlay.press_flash(),
            OverlayEvent::FlashModeChanged(FlashMode::On)
        );
        assert_eq!(
            overlay.press_flash(),
            OverlayEvent::FlashModeChanged(FlashMode::Off)
        );
        assert_eq!(
            overlay.press_flash(),
            OverlayEvent::FlashModeChanged(FlashMode::Auto)
        );
    }

    #[test]
    fn test_rotate_never_mutates_flash() {
        let mut overlay = OverlayState::default();
        overlay.press_flash();
        let before = overlay.flash();

        for _ in 0..5 {
            assert_eq!(overlay.press_rotate(), OverlayEvent::RotateRequested);
        }
        assert_eq!(overlay.flash(), before);
    }

    #[test]
    fn test_orientation_change_preserves_flash() {
        let mut overlay = OverlayState::new(FlashMode::Off, Orientation::Portrait);
        overlay.set_orientation(Orientation::LandscapeLeft);
        assert_eq!(overlay.flash(), FlashMode::Off);
        assert_eq!(overlay.orientation(), Orientation::LandscapeLeft);
    }
}
