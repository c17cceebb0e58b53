// SPDX-License-Identifier: GPL-3.0-only

//! Top overlay bar
//!
//! Holds the two capture overlay controls: the flash mode toggle on the left
//! edge and the camera rotate button on the right edge. Both controls are
//! rotated to match the current device orientation.

mod camera_switcher;
mod flash_button;

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length, Padding};
use cosmic::widget;

/// Semi-transparent rounded background for controls overlaid on the viewfinder
pub fn overlay_container_style(_theme: &cosmic::Theme) -> widget::container::Style {
    widget::container::Style {
        background: Some(Background::Color(Color::from_rgba(
            0.0,
            0.0,
            0.0,
            ui::OVERLAY_BACKGROUND_ALPHA,
        ))),
        border: cosmic::iced::Border {
            radius: [ui::OVERLAY_CORNER_RADIUS; 4].into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

impl AppModel {
    /// Build the top bar with the flash and rotate controls
    pub fn build_top_bar(&self) -> Element<'_, Message> {
        let row = widget::row()
            .push(self.build_flash_button())
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(self.build_camera_switcher())
            .align_y(Alignment::Center)
            .height(Length::Fixed(ui::BAR_HEIGHT))
            .padding(Padding {
                top: 0.0,
                right: ui::BAR_RIGHT_OFFSET,
                bottom: 0.0,
                left: ui::BAR_LEFT_OFFSET,
            });

        widget::container(row).width(Length::Fill).into()
    }
}
