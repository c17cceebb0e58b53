// SPDX-License-Identifier: GPL-3.0-only

//! Overlay control handlers
//!
//! Handles the flash and rotate button activations and orientation changes.
//! Button presses go through the overlay state, which reports an
//! [`OverlayEvent`]; the event is then applied to the rest of the application.

use crate::app::state::{AppModel, Message};
use crate::orientation::Orientation;
use crate::overlay::OverlayEvent;
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info};

impl AppModel {
    // =========================================================================
    // Overlay Control Handlers
    // =========================================================================

    pub(crate) fn handle_cycle_flash_mode(&mut self) -> Task<cosmic::Action<Message>> {
        let event = self.overlay.press_flash();
        self.apply_overlay_event(event)
    }

    pub(crate) fn handle_rotate_camera(&mut self) -> Task<cosmic::Action<Message>> {
        let event = self.overlay.press_rotate();
        self.apply_overlay_event(event)
    }

    /// Consume a notification from the overlay controls
    fn apply_overlay_event(&mut self, event: OverlayEvent) -> Task<cosmic::Action<Message>> {
        match event {
            OverlayEvent::FlashModeChanged(mode) => {
                info!(mode = mode.label(), "Flash mode changed");

                self.config.flash_mode = mode;
                if let Some(handler) = self.config_handler.as_ref()
                    && let Err(err) = self.config.write_entry(handler)
                {
                    error!(?err, "Failed to save flash mode");
                }
            }
            OverlayEvent::RotateRequested => {
                if self.available_cameras.len() > 1 {
                    self.current_camera_index =
                        (self.current_camera_index + 1) % self.available_cameras.len();
                    let camera_name = &self.available_cameras[self.current_camera_index];
                    info!(
                        index = self.current_camera_index,
                        camera = %camera_name,
                        "Rotation requested, switching camera"
                    );

                    self.config.last_camera_index = self.current_camera_index;
                    if let Some(handler) = self.config_handler.as_ref()
                        && let Err(err) = self.config.write_entry(handler)
                    {
                        error!(?err, "Failed to save camera selection");
                    }
                } else {
                    info!("Only one camera available, rotation request ignored");
                }
            }
        }
        Task::none()
    }

    pub(crate) fn handle_set_orientation(
        &mut self,
        orientation: Orientation,
    ) -> Task<cosmic::Action<Message>> {
        info!(
            ?orientation,
            degrees = orientation.rotation_degrees(),
            "Device orientation changed"
        );
        self.overlay.set_orientation(orientation);
        Task::none()
    }

    pub(crate) fn handle_select_orientation(
        &mut self,
        index: usize,
    ) -> Task<cosmic::Action<Message>> {
        match Orientation::ALL.get(index) {
            Some(orientation) => self.handle_set_orientation(*orientation),
            None => Task::none(),
        }
    }
}
