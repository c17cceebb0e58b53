// SPDX-License-Identifier: GPL-3.0-only

//! Flash mode toggle button widget implementation

use crate::app::state::{AppModel, Message};
use crate::app::top_bar::overlay_container_style;
use crate::constants::ui;
use crate::flash::FlashMode;
use crate::icons;
use cosmic::Element;
use cosmic::iced::{Alignment, Color, Length};
use cosmic::widget;

impl AppModel {
    /// Build the flash mode toggle button
    ///
    /// Shows the icon and name of the current mode. The label takes the
    /// highlight color while the flash is forced on.
    pub fn build_flash_button(&self) -> Element<'_, Message> {
        let mode = self.overlay.flash();
        let degrees = self.overlay.orientation().rotation_degrees();

        let flash_icon =
            widget::icon::from_svg_bytes(icons::rotated_icon_bytes(mode.icon_name(), degrees))
                .symbolic(true);

        let label_color = if mode == FlashMode::On {
            let (r, g, b) = ui::FLASH_ON_LABEL_COLOR;
            Color::from_rgb(r, g, b)
        } else {
            Color::WHITE
        };

        let label = widget::container(
            widget::text(mode.label()).size(ui::FLASH_LABEL_TEXT_SIZE),
        )
        .style(move |_theme| widget::container::Style {
            text_color: Some(label_color),
            ..Default::default()
        });

        let content = widget::row()
            .push(widget::icon(flash_icon).size(ui::FLASH_ICON_SIZE))
            .push(widget::Space::new(
                Length::Fixed(ui::FLASH_LABEL_GAP),
                Length::Shrink,
            ))
            .push(label)
            .align_y(Alignment::Center);

        let button = widget::button::custom(content)
            .padding([4, 8])
            .on_press(Message::CycleFlashMode)
            .class(if mode == FlashMode::On {
                cosmic::theme::Button::Suggested
            } else {
                cosmic::theme::Button::Text
            });

        widget::container(button)
            .style(overlay_container_style)
            .center_y(Length::Fixed(ui::BAR_HEIGHT))
            .into()
    }
}
