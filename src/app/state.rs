// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::config::Config;
use crate::orientation::Orientation;
use crate::overlay::OverlayState;
use cosmic::cosmic_config;
use cosmic::widget::about::About;

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// State behind the flash and rotate overlay controls
    pub overlay: OverlayState,
    /// Logical cameras the rotate button cycles through
    pub available_cameras: Vec<String>,
    /// Active camera index
    pub current_camera_index: usize,
    /// Dropdown options (cached for UI)
    pub theme_dropdown_options: Vec<String>,
    pub orientation_dropdown_options: Vec<String>,
}

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    /// Open external URL (repository, etc.)
    LaunchUrl(String),
    /// Toggle context drawer page (About, Settings)
    ToggleContextPage(ContextPage),

    // ===== Overlay Controls =====
    /// Flash button pressed: cycle to the next flash mode
    CycleFlashMode,
    /// Rotate button pressed: switch to the next camera
    RotateCamera,
    /// Device orientation changed
    SetOrientation(Orientation),
    /// Orientation selected from the settings dropdown by index
    SelectOrientation(usize),

    // ===== Settings =====
    /// Configuration updated
    UpdateConfig(Config),
    /// Application theme selected from the dropdown by index
    SetAppTheme(usize),

    // ===== Surface Management =====
    /// Forward a surface action (menu popups) to the COSMIC runtime
    Surface(cosmic::surface::Action),
}
