// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function acts as a dispatcher, while specific handlers
//! are implemented in the `handlers` submodules organized by functional domain.

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),

            // ===== Overlay Controls =====
            Message::CycleFlashMode => self.handle_cycle_flash_mode(),
            Message::RotateCamera => self.handle_rotate_camera(),
            Message::SetOrientation(orientation) => self.handle_set_orientation(orientation),
            Message::SelectOrientation(index) => self.handle_select_orientation(index),

            // ===== Settings =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),

            // ===== Surface Management =====
            Message::Surface(action) => self.handle_surface_action(action),
        }
    }
}
