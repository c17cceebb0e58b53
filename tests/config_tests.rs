// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use viewfinder::Config;
use viewfinder::FlashMode;
use viewfinder::config::AppTheme;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(
        config.app_theme,
        AppTheme::System,
        "Theme should follow the system by default"
    );
    assert_eq!(
        config.flash_mode,
        FlashMode::Auto,
        "Flash should start in automatic mode"
    );
}

#[test]
fn test_config_default_camera_index() {
    let config = Config::default();
    assert_eq!(
        config.last_camera_index, 0,
        "First camera should be active by default"
    );
}
