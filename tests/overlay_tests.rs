// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the overlay controls

use viewfinder::orientation::Orientation;
use viewfinder::overlay::{OverlayEvent, OverlayState};
use viewfinder::{FlashMode, icons};

#[test]
fn test_flash_cycles_with_wraparound() {
    let mut overlay = OverlayState::default();

    // A full cycle returns to the starting mode
    let start = overlay.flash();
    for _ in 0..FlashMode::ALL.len() {
        overlay.press_flash();
    }
    assert_eq!(overlay.flash(), start);
}

#[test]
fn test_flash_mode_after_n_presses() {
    for n in 0..50usize {
        let mut overlay = OverlayState::default();
        for _ in 0..n {
            overlay.press_flash();
        }
        assert_eq!(
            overlay.flash(),
            FlashMode::ALL[n % 3],
            "mode after {n} presses"
        );
    }
}

#[test]
fn test_flash_change_reports_mode_name() {
    let mut overlay = OverlayState::default();

    let OverlayEvent::FlashModeChanged(mode) = overlay.press_flash() else {
        panic!("flash press must report a mode change");
    };
    assert_eq!(mode.label(), "ON");
}

#[test]
fn test_rotate_request_leaves_flash_untouched() {
    let overlay = OverlayState::new(FlashMode::On, Orientation::Portrait);

    for _ in 0..10 {
        assert_eq!(overlay.press_rotate(), OverlayEvent::RotateRequested);
    }
    assert_eq!(overlay.flash(), FlashMode::On);
}

#[test]
fn test_orientation_to_rotation_angle() {
    let cases = [
        (Orientation::Portrait, 0.0),
        (Orientation::LandscapeLeft, 90.0),
        (Orientation::LandscapeRight, -90.0),
        (Orientation::PortraitUpsideDown, 180.0),
        (Orientation::Unknown, 0.0),
    ];
    for (orientation, degrees) in cases {
        assert_eq!(orientation.rotation_degrees(), degrees, "{orientation:?}");
    }
}

#[test]
fn test_each_flash_mode_has_an_embedded_icon() {
    for mode in FlashMode::ALL {
        assert_ne!(
            icons::icon_bytes(mode.icon_name()),
            icons::PLACEHOLDER_ICON,
            "missing icon for {mode:?}"
        );
    }
}
