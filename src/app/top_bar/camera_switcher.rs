// SPDX-License-Identifier: GPL-3.0-only

//! Camera rotate button widget implementation

use crate::app::state::{AppModel, Message};
use crate::app::top_bar::overlay_container_style;
use crate::constants::ui;
use crate::icons;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Build the camera rotate button
    ///
    /// Icon-only; requests a switch of the active camera. Shows an invisible
    /// placeholder instead when only one camera is available, to keep the
    /// bar layout stable.
    pub fn build_camera_switcher(&self) -> Element<'_, Message> {
        if self.available_cameras.len() < 2 {
            return widget::Space::new(Length::Fixed(ui::PLACEHOLDER_BUTTON_WIDTH), Length::Shrink)
                .into();
        }

        let degrees = self.overlay.orientation().rotation_degrees();
        let switch_icon =
            widget::icon::from_svg_bytes(icons::rotated_icon_bytes("camera-switch", degrees))
                .symbolic(true);

        // Center icon in fixed-size content so the press target spans the bar
        let icon_content = widget::container(widget::icon(switch_icon).size(ui::ROTATE_ICON_SIZE))
            .center_x(Length::Fixed(ui::ICON_BUTTON_WIDTH))
            .center_y(Length::Fixed(ui::BAR_HEIGHT));

        let button = widget::button::custom(icon_content)
            .padding(0)
            .on_press(Message::RotateCamera)
            .class(cosmic::theme::Button::Text);

        widget::container(button)
            .style(overlay_container_style)
            .into()
    }
}
